//! Error types shared by the change-counting routines.

use thiserror::Error;

/// Result type for change-counting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the change-counting engine.
///
/// Validation errors are raised before any work starts; `Overflow` is the only
/// variant that can surface mid-computation, and only for fixed-width counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The target amount is negative.
    #[error("invalid amount {0}: the target must be zero or positive")]
    InvalidAmount(i64),

    /// A denomination is zero or negative.
    #[error("invalid denomination {0}: every denomination must be positive")]
    InvalidDenomination(i64),

    /// A fixed-width count exceeded its type while filling the ways table.
    #[error("overflow: the number of ways to make {amount} does not fit in the chosen integer width")]
    Overflow { amount: usize },

    /// Input text could not be read as integers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The amount is above the configured limit or cannot index a table.
    #[error("input too large: {0}")]
    InputTooLarge(String),
}

impl Error {
    /// True for errors caused by malformed or out-of-range input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::InvalidAmount(_)
                | Error::InvalidDenomination(_)
                | Error::InvalidInput(_)
                | Error::InputTooLarge(_)
        )
    }

    /// True when the exact answer exists but is too large to represent.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }
}
