use thiserror::Error;

/// Why a ship did not complete its route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PassageFailure {
    #[error("Ship {ship} cannot pass {environment}")]
    Blocked { ship: String, environment: String },

    #[error("Ship {ship} was destroyed")]
    Destroyed { ship: String },
}

/// Outcome of one passage evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassageResult {
    Success,
    Failure(PassageFailure),
}

impl PassageResult {
    pub fn blocked(ship: &str, environment: &str) -> Self {
        PassageResult::Failure(PassageFailure::Blocked {
            ship: ship.to_string(),
            environment: environment.to_string(),
        })
    }

    pub fn destroyed(ship: &str) -> Self {
        PassageResult::Failure(PassageFailure::Destroyed {
            ship: ship.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PassageResult::Success)
    }

    /// Explanation of the failure; empty on success.
    pub fn message(&self) -> String {
        match self {
            PassageResult::Success => String::new(),
            PassageResult::Failure(failure) => failure.to_string(),
        }
    }

    pub fn failure(&self) -> Option<&PassageFailure> {
        match self {
            PassageResult::Success => None,
            PassageResult::Failure(failure) => Some(failure),
        }
    }
}
