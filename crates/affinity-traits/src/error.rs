//! Error types for the affinity engine.
//!
//! Degenerate data (missing fields, malformed counts, empty catalogs) never
//! surfaces here; it is absorbed by the scoring rules. These variants cover
//! broken call contracts and invalid configuration only.

use thiserror::Error;

/// The main error type for affinity operations.
#[derive(Debug, Error)]
pub enum AffinityError {
    /// The requested result size was zero.
    #[error("Invalid result limit: {0} (must be at least 1)")]
    InvalidLimit(usize),

    /// The focal item cannot be scored against.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// A combiner produced a NaN or infinite score.
    #[error("Non-finite score for item {id} from '{combiner}'")]
    NonFiniteScore {
        /// Identifier of the candidate being scored.
        id: String,
        /// Name of the combiner that produced the value.
        combiner: String,
    },

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error when a signal is not found.
    #[error("Signal not found: {0}")]
    SignalNotFound(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for AffinityError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for AffinityError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for affinity operations.
///
/// This is a convenience type that uses [`AffinityError`] as the error type.
pub type Result<T> = std::result::Result<T, AffinityError>;
