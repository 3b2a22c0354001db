//! Domain models for Omega Gateway.
//!
//! - `OmegaWeights`: weighting of the three sub-signals
//! - `EvaluationRecord`: one stored evaluation
//! - `GovernanceThresholds` / `ValidatorConfig`: construction-time configuration
//! - `OmegaError`: failures of the serialization surface

pub mod config;
pub mod error;
pub mod record;
pub mod weights;

pub use config::{GovernanceThresholds, ValidatorConfig};
pub use error::{OmegaError, Result};
pub use record::EvaluationRecord;
pub use weights::OmegaWeights;
