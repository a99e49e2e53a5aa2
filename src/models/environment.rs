use serde::Deserialize;

use super::constants::{ANTIMATTER_CLOUDS_NAME, EMPTY_SPACE_NAME, NEBULA_NAME, WORMHOLE_NAME};
use super::ship::{EngineType, Spaceship};

/// The medium a route leg passes through. Decides whether a ship may enter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Environment {
    /// Open space, sub-light drives only.
    EmptySpace,
    /// Nebula, only the type E sub-light drive copes with it.
    Nebula,
    /// Wormhole, jump drives only. Length is informational.
    Wormhole {
        #[serde(default)]
        length: u32,
    },
    /// Antimatter clouds, photon deflectors required.
    AntimatterClouds,
}

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::EmptySpace => EMPTY_SPACE_NAME,
            Environment::Nebula => NEBULA_NAME,
            Environment::Wormhole { .. } => WORMHOLE_NAME,
            Environment::AntimatterClouds => ANTIMATTER_CLOUDS_NAME,
        }
    }

    pub fn can_pass(&self, ship: &Spaceship) -> bool {
        match self {
            Environment::EmptySpace => ship.engine().engine_type.is_impulse(),
            Environment::Nebula => ship.engine().engine_type == EngineType::ImpulseE,
            Environment::Wormhole { .. } => ship.engine().engine_type.is_jump(),
            Environment::AntimatterClouds => ship.deflectors().has_photon,
        }
    }
}
