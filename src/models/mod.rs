//! Domain models
//!
//! Ships, environments, obstacles and routes. Models are plain data with
//! the small predicates that belong to them; route evaluation itself lives
//! in [`crate::services::passage`].

pub mod constants;
pub mod ship;
pub mod environment;
pub mod obstacle;
pub mod route;
pub mod outcome;
pub mod errors;
