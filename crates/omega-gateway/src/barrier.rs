//! Governance barrier.
//!
//! Compares an Omega score and a QCVaR value against
//! [`GovernanceThresholds`] to produce a [`BarrierVerdict`]: the boolean
//! production-readiness decision plus the individual checks behind it.

use serde::{Deserialize, Serialize};

use crate::domain::GovernanceThresholds;
use crate::scoring::clamp_unit;

/// Outcome of one barrier evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarrierVerdict {
    /// `omega_score >= omega_threshold`.
    pub omega_ok: bool,
    /// `qcvar <= qcvar_limit`.
    pub qcvar_ok: bool,
    /// Both checks passed.
    pub production_ready: bool,
    /// Threshold actually applied, after clamping.
    pub omega_threshold: f64,
    /// Limit actually applied, after clamping.
    pub qcvar_limit: f64,
}

impl BarrierVerdict {
    /// Human-readable block reason, if not production ready.
    pub fn block_reason(&self) -> Option<String> {
        match (self.omega_ok, self.qcvar_ok) {
            (true, true) => None,
            (false, true) => Some(format!(
                "omega below threshold {:.4}",
                self.omega_threshold
            )),
            (true, false) => Some(format!("qcvar above limit {:.4}", self.qcvar_limit)),
            (false, false) => Some(format!(
                "omega below threshold {:.4} and qcvar above limit {:.4}",
                self.omega_threshold, self.qcvar_limit
            )),
        }
    }
}

/// Evaluate `omega_score` and `qcvar` against `thresholds`.
///
/// Scores and thresholds are all clamped to `[0, 1]` before comparison.
pub fn validate_governance_barrier(
    omega_score: f64,
    qcvar: f64,
    thresholds: &GovernanceThresholds,
) -> BarrierVerdict {
    let safe = thresholds.clamped();
    let omega_ok = clamp_unit(omega_score) >= safe.omega_threshold;
    let qcvar_ok = clamp_unit(qcvar) <= safe.qcvar_limit;

    BarrierVerdict {
        omega_ok,
        qcvar_ok,
        production_ready: omega_ok && qcvar_ok,
        omega_threshold: safe.omega_threshold,
        qcvar_limit: safe.qcvar_limit,
    }
}
