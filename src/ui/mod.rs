//! User interface and presentation
//!
//! Presenters format ships, routes, passage events and areas for the
//! console, keeping formatting out of the services.

pub mod presenters;
