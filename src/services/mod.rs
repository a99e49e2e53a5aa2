//! Services
//!
//! Logic that operates on the domain models: route passage and
//! triangle geometry.

pub mod geometry;
pub mod passage;
