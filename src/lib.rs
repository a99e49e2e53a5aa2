//! Spaceship Route Simulator
//!
//! Flies a spaceship along a route of legs. Each leg has an environment
//! that decides, from the ship's engine or deflectors, whether the ship
//! may enter, and obstacles whose damage depends on the deflectors. The
//! first impassable leg or the loss of the hull ends the run.
//!
//! A small triangle-area utility lives alongside in
//! [`services::geometry`].
//!
//! # Modules
//!
//! - [`models`] - Domain models (Spaceship, Environment, Obstacle, SpaceRoute)
//! - [`services`] - Route passage and triangle geometry
//! - [`voyage`] - Run-once voyage state machine
//! - [`scenario`] - Built-in and TOML scenarios
//! - [`io`] - Output abstraction for testing
//! - [`ui`] - Presentation logic
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use spaceroute::Scenario;
//!
//! let mut scenario = Scenario::builtin();
//! let result = scenario.route.pass(&mut scenario.ship);
//! assert_eq!(result.message(), "Ship Scout was destroyed");
//! ```

pub mod models;
pub mod services;
pub mod voyage;
pub mod scenario;
pub mod io;
pub mod ui;
pub mod cli;

// Re-export commonly used types
pub use models::errors::{SimError, SimResult};
pub use models::outcome::{PassageFailure, PassageResult};
pub use models::route::{RouteLeg, SpaceRoute};
pub use models::ship::{Deflectors, Engine, EngineType, Spaceship};
pub use models::environment::Environment;
pub use models::obstacle::Obstacle;
pub use scenario::Scenario;
pub use voyage::{Voyage, VoyageState};
