use thiserror::Error;

/// Errors raised outside of route passage: bad geometry input and bad scenarios.
/// A ship failing its route is not an error; see `PassageResult`.
#[derive(Error, Debug)]
pub enum SimError {
    /// Side lengths that cannot form a triangle
    #[error("Sides {a}, {b}, {c} do not form a triangle")]
    InvalidTriangle { a: f64, b: f64, c: f64 },

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scenario parse error: {0}")]
    ScenarioParse(#[from] toml::de::Error),
}

/// Type alias for Results using SimError
pub type SimResult<T> = Result<T, SimError>;
