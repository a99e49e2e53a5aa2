use serde::Deserialize;

use super::environment::Environment;
use super::obstacle::Obstacle;
use super::outcome::PassageResult;
use super::ship::Spaceship;
use crate::services::passage::{pass_route, NullObserver};

/// One segment of a route: a single environment and the obstacles met inside it.
/// Length is carried as data only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteLeg {
    pub length: f64,
    pub environment: Environment,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl RouteLeg {
    pub fn new(length: f64, environment: Environment, obstacles: Vec<Obstacle>) -> Self {
        RouteLeg {
            length,
            environment,
            obstacles,
        }
    }
}

/// Ordered sequence of legs, evaluated strictly in order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct SpaceRoute {
    legs: Vec<RouteLeg>,
}

impl SpaceRoute {
    pub fn new(legs: Vec<RouteLeg>) -> Self {
        SpaceRoute { legs }
    }

    pub fn legs(&self) -> &[RouteLeg] {
        &self.legs
    }

    /// Fly `ship` along the route, applying damage to its hull.
    pub fn pass(&self, ship: &mut Spaceship) -> PassageResult {
        pass_route(self, ship, &mut NullObserver)
    }
}
