//! Error taxonomy for the fallible (serialization) surface of Omega Gateway.
//!
//! Scoring and validation are total: out-of-range input is clamped, never
//! rejected. Only snapshot encoding/decoding can fail.

/// Omega Gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum OmegaError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type for Omega Gateway operations.
pub type Result<T> = std::result::Result<T, OmegaError>;
