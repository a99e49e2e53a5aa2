/// Base damage dealt by a single meteorite before the deflector multiplier.
pub const METEORITE_BASE_DAMAGE: u32 = 20;
/// Damage dealt by wormhole instability to a ship without photon deflectors.
pub const WORMHOLE_INSTABILITY_DAMAGE: u32 = 50;

/// Meteorite damage multiplier indexed by deflector class.
/// Classes outside this table fall back to `DEFAULT_DEFLECTOR_MULTIPLIER`.
pub const DEFLECTOR_MULTIPLIERS: [(u8, u32); 2] = [
    (1, 3), // class 1
    (2, 2), // class 2
];
pub const DEFAULT_DEFLECTOR_MULTIPLIER: u32 = 1;

pub const EMPTY_SPACE_NAME: &str = "Empty space";
pub const NEBULA_NAME: &str = "Nebula";
pub const WORMHOLE_NAME: &str = "Wormhole";
pub const ANTIMATTER_CLOUDS_NAME: &str = "Antimatter clouds";

pub const METEORITE_NAME: &str = "Meteorite";
pub const WORMHOLE_INSTABILITY_NAME: &str = "Wormhole instability";

pub fn meteorite_multiplier(deflector_class: u8) -> u32 {
    DEFLECTOR_MULTIPLIERS
        .iter()
        .find(|(class, _)| *class == deflector_class)
        .map(|(_, multiplier)| *multiplier)
        .unwrap_or(DEFAULT_DEFLECTOR_MULTIPLIER)
}
