//! Omega Gateway Core Library
//!
//! Composite health scoring ("Omega"), tail-mean risk estimation ("Quantum
//! CVaR") and a rolling validator that gates production readiness against
//! fixed governance thresholds.
//!
//! Everything is in-memory and synchronous. Numeric input is clamped, never
//! rejected; only snapshot (de)serialization returns errors.

pub mod antifragility;
pub mod barrier;
pub mod domain;
pub mod obs;
pub mod reporting;
pub mod scoring;
pub mod telemetry;
pub mod validator;

pub use antifragility::{antifragile_metric, AntifragileMetrics};
pub use barrier::{validate_governance_barrier, BarrierVerdict};
pub use domain::{
    EvaluationRecord, GovernanceThresholds, OmegaError, OmegaWeights, Result, ValidatorConfig,
};
pub use reporting::{parse_summary_json, render_health_md, render_summary_json};
pub use scoring::{
    clamp, clamp_unit, compute_omega, compute_qcvar, tail_count, ALPHA_EPSILON,
    DEFAULT_QCVAR_ALPHA,
};
pub use telemetry::{init_tracing, LogFormat};
pub use validator::{OmegaValidator, SystemHealth, ValidationOutcome, ValidationSummary};

/// Omega Gateway version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
