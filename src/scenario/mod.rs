//! Scenarios
//!
//! A scenario is one ship and the route it will fly. Scenarios come either
//! from [`Scenario::builtin`] or from a TOML file:
//!
//! ```toml
//! [ship]
//! name = "Scout"
//! hull = 10
//! engine = { type = "impulse_c", fuel_use = 10.0 }
//! deflectors = { class = 1, has_photon = false }
//!
//! [[route]]
//! length = 100.0
//! environment = { kind = "empty_space" }
//! obstacles = ["meteorite", "meteorite"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::environment::Environment;
use crate::models::errors::{SimError, SimResult};
use crate::models::obstacle::Obstacle;
use crate::models::route::{RouteLeg, SpaceRoute};
use crate::models::ship::{Deflectors, Engine, EngineType, Spaceship};
use crate::voyage::Voyage;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    ship: ShipSpec,
    #[serde(default)]
    route: SpaceRoute,
}

#[derive(Debug, Deserialize)]
struct ShipSpec {
    name: String,
    hull: i32,
    engine: Engine,
    deflectors: Deflectors,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub ship: Spaceship,
    pub route: SpaceRoute,
}

impl Scenario {
    /// The scout run: an impulse scout through meteorites, then a wormhole.
    pub fn builtin() -> Self {
        let route = SpaceRoute::new(vec![
            RouteLeg::new(
                100.0,
                Environment::EmptySpace,
                vec![Obstacle::Meteorite, Obstacle::Meteorite],
            ),
            RouteLeg::new(
                500.0,
                Environment::Wormhole { length: 300 },
                vec![Obstacle::WormholeInstability, Obstacle::WormholeInstability],
            ),
        ]);
        let ship = Spaceship::new(
            "Scout",
            Engine::new(EngineType::ImpulseC, 10.0),
            10,
            Deflectors::new(1, false),
        );
        Scenario { ship, route }
    }

    pub fn from_toml_str(content: &str) -> SimResult<Self> {
        let file: ScenarioFile = toml::from_str(content)?;
        validate(&file)?;

        let ShipSpec {
            name,
            hull,
            engine,
            deflectors,
        } = file.ship;
        Ok(Scenario {
            ship: Spaceship::new(name, engine, hull, deflectors),
            route: file.route,
        })
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let content = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            ship = scenario.ship.name(),
            legs = scenario.route.legs().len(),
            "scenario loaded"
        );
        Ok(scenario)
    }

    pub fn into_voyage(self) -> Voyage {
        Voyage::new(self.ship, self.route)
    }
}

fn validate(file: &ScenarioFile) -> SimResult<()> {
    if file.ship.name.trim().is_empty() {
        return Err(SimError::InvalidScenario("ship name is empty".into()));
    }
    if file.ship.hull <= 0 {
        return Err(SimError::InvalidScenario(format!(
            "ship {} must start with positive hull, got {}",
            file.ship.name, file.ship.hull
        )));
    }
    for (index, leg) in file.route.legs().iter().enumerate() {
        if !leg.length.is_finite() || leg.length < 0.0 {
            return Err(SimError::InvalidScenario(format!(
                "leg {} has invalid length {}",
                index + 1,
                leg.length
            )));
        }
    }
    Ok(())
}
