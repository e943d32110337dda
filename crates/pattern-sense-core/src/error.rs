//! Error types for PatternSense.

use thiserror::Error;

/// Main error type for PatternSense operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Sequence length does not match the required arity
    #[error("The input must contain exactly {expected} numbers (got {actual})")]
    InvalidArity {
        /// Required number of elements
        expected: usize,
        /// Number of elements received
        actual: usize,
    },

    /// Element cannot be represented as a 32-bit signed integer
    #[error("Value {value} at index {index} is out of range for a 32-bit integer")]
    ValueOutOfRange {
        /// Position of the offending element
        index: usize,
        /// The rejected value
        value: i64,
    },

    /// Comparison tolerance is negative or not finite
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    /// A detector task failed to complete
    #[error("Detector failed: {0}")]
    DetectorFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input or parameters (generic)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the service.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidArity { .. } | Error::ValueOutOfRange { .. } | Error::InvalidInput(_)
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
