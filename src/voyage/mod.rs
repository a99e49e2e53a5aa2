//! Voyage state machine
//!
//! A [`Voyage`] owns one ship and one route and flies the route exactly
//! once. The outcome is kept, so asking again never re-applies damage.

use crate::models::outcome::{PassageFailure, PassageResult};
use crate::models::route::SpaceRoute;
use crate::models::ship::Spaceship;
use crate::services::passage::{pass_route, NullObserver, PassageObserver};

pub struct Voyage {
    ship: Spaceship,
    route: SpaceRoute,
    state: VoyageState,
    result: Option<PassageResult>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum VoyageState {
    Pending,
    Arrived,
    Blocked { environment: String },
    Destroyed,
}

impl Voyage {
    pub fn new(ship: Spaceship, route: SpaceRoute) -> Self {
        Self {
            ship,
            route,
            state: VoyageState::Pending,
            result: None,
        }
    }

    pub fn ship(&self) -> &Spaceship {
        &self.ship
    }

    pub fn route(&self) -> &SpaceRoute {
        &self.route
    }

    pub fn state(&self) -> &VoyageState {
        &self.state
    }

    /// Fly the route without observing events.
    pub fn run(&mut self) -> PassageResult {
        self.run_observed(&mut NullObserver)
    }

    /// Fly the route, reporting events to `observer`.
    ///
    /// Only the first call evaluates the route; later calls return the
    /// stored result and emit no events.
    pub fn run_observed(&mut self, observer: &mut dyn PassageObserver) -> PassageResult {
        if let Some(result) = &self.result {
            tracing::debug!(ship = self.ship.name(), "voyage already flown");
            return result.clone();
        }

        let result = pass_route(&self.route, &mut self.ship, observer);
        self.state = match result.failure() {
            None => VoyageState::Arrived,
            Some(PassageFailure::Blocked { environment, .. }) => VoyageState::Blocked {
                environment: environment.clone(),
            },
            Some(PassageFailure::Destroyed { .. }) => VoyageState::Destroyed,
        };
        self.result = Some(result.clone());
        result
    }
}
