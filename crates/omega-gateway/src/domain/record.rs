//! Evaluation records held in the validator's history.

use serde::{Deserialize, Serialize};

/// One evaluation as stored by [`crate::OmegaValidator`].
///
/// All fields are clamped to `[0, 1]` before the record is built; `omega`
/// is the composite computed from the raw inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub psi: f64,
    pub theta: f64,
    pub cvar: f64,
    pub omega: f64,
}

impl EvaluationRecord {
    pub fn new(psi: f64, theta: f64, cvar: f64, omega: f64) -> Self {
        Self {
            psi,
            theta,
            cvar,
            omega,
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("psi", self.psi),
            ("theta", self.theta),
            ("cvar", self.cvar),
            ("omega", self.omega),
        ]
    }
}
