use serde::Deserialize;

use super::constants::{
    meteorite_multiplier, METEORITE_BASE_DAMAGE, METEORITE_NAME, WORMHOLE_INSTABILITY_DAMAGE,
    WORMHOLE_INSTABILITY_NAME,
};
use super::ship::Spaceship;

/// Something inside a route leg that damages a passing ship.
/// Damage depends only on the ship's deflectors; obstacles are stateless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obstacle {
    Meteorite,
    WormholeInstability,
}

impl Obstacle {
    pub fn name(&self) -> &'static str {
        match self {
            Obstacle::Meteorite => METEORITE_NAME,
            Obstacle::WormholeInstability => WORMHOLE_INSTABILITY_NAME,
        }
    }

    pub fn damage(&self, ship: &Spaceship) -> u32 {
        let deflectors = ship.deflectors();
        match self {
            Obstacle::Meteorite => METEORITE_BASE_DAMAGE * meteorite_multiplier(deflectors.class),
            Obstacle::WormholeInstability => {
                if deflectors.has_photon {
                    0
                } else {
                    WORMHOLE_INSTABILITY_DAMAGE
                }
            }
        }
    }
}
