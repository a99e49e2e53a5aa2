use serde::Deserialize;
use std::fmt;

/// Drive kinds a ship can be fitted with.
///
/// `ImpulseC` and `ImpulseE` are the two sub-light drives; the three
/// `Jump*` variants are jump drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    ImpulseC,
    ImpulseE,
    JumpAlpha,
    JumpOmega,
    JumpGamma,
}

impl EngineType {
    pub const ALL: [EngineType; 5] = [
        EngineType::ImpulseC,
        EngineType::ImpulseE,
        EngineType::JumpAlpha,
        EngineType::JumpOmega,
        EngineType::JumpGamma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EngineType::ImpulseC => "IMPULSE C",
            EngineType::ImpulseE => "IMPULSE E",
            EngineType::JumpAlpha => "JUMP ALPHA",
            EngineType::JumpOmega => "JUMP OMEGA",
            EngineType::JumpGamma => "JUMP GAMMA",
        }
    }

    /// Sub-light drive (type C or E).
    pub fn is_impulse(&self) -> bool {
        matches!(self, EngineType::ImpulseC | EngineType::ImpulseE)
    }

    pub fn is_jump(&self) -> bool {
        matches!(
            self,
            EngineType::JumpAlpha | EngineType::JumpOmega | EngineType::JumpGamma
        )
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A ship's drive. Fuel use is carried as data only.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Engine {
    #[serde(rename = "type")]
    pub engine_type: EngineType,
    #[serde(default)]
    pub fuel_use: f64,
}

impl Engine {
    pub fn new(engine_type: EngineType, fuel_use: f64) -> Self {
        Engine {
            engine_type,
            fuel_use,
        }
    }
}

/// Deflector configuration.
/// `class` is nominally 1, 2 or 3; only 1 and 2 change meteorite damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Deflectors {
    pub class: u8,
    #[serde(default)]
    pub has_photon: bool,
}

impl Deflectors {
    pub fn new(class: u8, has_photon: bool) -> Self {
        Deflectors { class, has_photon }
    }
}

/// Hull state after damage has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullStatus {
    Intact,
    Destroyed,
}

/// A ship travelling along a route.
///
/// Everything except hull integrity is fixed at construction. Hull may drop
/// to zero or below, which marks the ship as destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct Spaceship {
    name: String,
    engine: Engine,
    hull: i32,
    deflectors: Deflectors,
}

impl Spaceship {
    pub fn new(name: impl Into<String>, engine: Engine, hull: i32, deflectors: Deflectors) -> Self {
        Spaceship {
            name: name.into(),
            engine,
            hull,
            deflectors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn deflectors(&self) -> Deflectors {
        self.deflectors
    }

    pub fn hull(&self) -> i32 {
        self.hull
    }

    /// Subtract `damage` from the hull.
    /// Returns `HullStatus::Destroyed` whenever the hull ends at or below zero.
    pub fn take_damage(&mut self, damage: u32) -> HullStatus {
        self.hull = self.hull.saturating_sub_unsigned(damage);
        if self.is_destroyed() {
            tracing::debug!(ship = %self.name, hull = self.hull, "hull breached");
            HullStatus::Destroyed
        } else {
            HullStatus::Intact
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.hull <= 0
    }
}
