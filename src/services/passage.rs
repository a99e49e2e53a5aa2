//! Route evaluation
//!
//! Flies a ship through a route leg by leg. For each leg the environment
//! is consulted first; a blocked leg ends the passage before any damage.
//! Otherwise the damage of every obstacle in the leg is summed, applied to
//! the hull in one step, and the hull is checked for destruction.

use crate::models::outcome::PassageResult;
use crate::models::route::{RouteLeg, SpaceRoute};
use crate::models::ship::{HullStatus, Spaceship};

/// Receives passage events as they happen. Every method defaults to a no-op.
pub trait PassageObserver {
    fn leg_entered(&mut self, _index: usize, _leg: &RouteLeg) {}

    fn leg_blocked(&mut self, _index: usize, _leg: &RouteLeg) {}

    /// Called once per passable leg, after damage has been applied.
    fn damage_taken(&mut self, _index: usize, _damage: u32, _hull: i32) {}

    /// Destruction hook, fired when the hull ends a leg at or below zero.
    fn ship_destroyed(&mut self, _ship: &Spaceship) {}

    fn route_completed(&mut self, _ship: &Spaceship) {}
}

/// Observer that ignores every event.
pub struct NullObserver;

impl PassageObserver for NullObserver {}

/// Total damage the obstacles of `leg` deal to `ship` in its current state.
pub fn leg_damage(leg: &RouteLeg, ship: &Spaceship) -> u32 {
    leg.obstacles
        .iter()
        .map(|obstacle| obstacle.damage(ship))
        .fold(0, u32::saturating_add)
}

/// Evaluate `route` for `ship`, stopping at the first blocked leg or at destruction.
pub fn pass_route(
    route: &SpaceRoute,
    ship: &mut Spaceship,
    observer: &mut dyn PassageObserver,
) -> PassageResult {
    for (index, leg) in route.legs().iter().enumerate() {
        observer.leg_entered(index, leg);

        if !leg.environment.can_pass(ship) {
            tracing::info!(
                ship = ship.name(),
                leg = index,
                environment = leg.environment.name(),
                "passage blocked"
            );
            observer.leg_blocked(index, leg);
            return PassageResult::blocked(ship.name(), leg.environment.name());
        }

        // Obstacles see the ship as it entered the leg, not each other's damage.
        let damage = leg_damage(leg, ship);
        let status = ship.take_damage(damage);
        tracing::debug!(
            ship = ship.name(),
            leg = index,
            damage,
            hull = ship.hull(),
            "leg passed"
        );
        observer.damage_taken(index, damage, ship.hull());

        if status == HullStatus::Destroyed {
            tracing::info!(ship = ship.name(), leg = index, "ship destroyed");
            observer.ship_destroyed(ship);
            return PassageResult::destroyed(ship.name());
        }
    }

    tracing::info!(ship = ship.name(), legs = route.legs().len(), "route completed");
    observer.route_completed(ship);
    PassageResult::Success
}
