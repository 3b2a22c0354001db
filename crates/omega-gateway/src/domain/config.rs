//! Governance thresholds and rolling-validator configuration.

use serde::{Deserialize, Serialize};

use crate::scoring::{clamp, clamp_unit, ALPHA_EPSILON};

/// Omega threshold and QCVaR limit a governance barrier compares against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GovernanceThresholds {
    /// Minimum Omega (0.0–1.0) for the Omega check to pass.
    pub omega_threshold: f64,

    /// Maximum QCVaR (0.0–1.0) for the risk check to pass.
    pub qcvar_limit: f64,
}

impl GovernanceThresholds {
    pub fn new(omega_threshold: f64, qcvar_limit: f64) -> Self {
        Self {
            omega_threshold,
            qcvar_limit,
        }
    }

    /// Copy with both values clamped to `[0, 1]`.
    pub fn clamped(&self) -> Self {
        Self {
            omega_threshold: clamp_unit(self.omega_threshold),
            qcvar_limit: clamp_unit(self.qcvar_limit),
        }
    }
}

impl Default for GovernanceThresholds {
    fn default() -> Self {
        Self {
            omega_threshold: 0.9,
            qcvar_limit: 0.1,
        }
    }
}

/// Construction parameters for [`crate::OmegaValidator`].
///
/// Fixed for the validator's lifetime. Out-of-range values are coerced by
/// [`ValidatorConfig::sanitized`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub omega_threshold: f64,
    pub qcvar_limit: f64,
    /// Coverage level for the rolling QCVaR window.
    pub qcvar_alpha: f64,
    /// Bound on retained evaluations; oldest are evicted first.
    pub max_history: usize,
    /// Samples required before health may report production readiness.
    pub min_samples: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            omega_threshold: 0.9,
            qcvar_limit: 0.1,
            qcvar_alpha: 0.9,
            max_history: 100,
            min_samples: 5,
        }
    }
}

impl ValidatorConfig {
    pub fn with_omega_threshold(mut self, omega_threshold: f64) -> Self {
        self.omega_threshold = omega_threshold;
        self
    }

    pub fn with_qcvar_limit(mut self, qcvar_limit: f64) -> Self {
        self.qcvar_limit = qcvar_limit;
        self
    }

    pub fn with_qcvar_alpha(mut self, qcvar_alpha: f64) -> Self {
        self.qcvar_alpha = qcvar_alpha;
        self
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    pub fn with_min_samples(mut self, min_samples: usize) -> Self {
        self.min_samples = min_samples;
        self
    }

    /// Coerced copy: thresholds into `[0, 1]`, alpha strictly inside
    /// `(0, 1)`, bounds at least 1.
    pub fn sanitized(&self) -> Self {
        Self {
            omega_threshold: clamp_unit(self.omega_threshold),
            qcvar_limit: clamp_unit(self.qcvar_limit),
            qcvar_alpha: clamp(self.qcvar_alpha, ALPHA_EPSILON, 1.0 - ALPHA_EPSILON),
            max_history: self.max_history.max(1),
            min_samples: self.min_samples.max(1),
        }
    }

    /// The barrier thresholds this configuration implies.
    pub fn thresholds(&self) -> GovernanceThresholds {
        GovernanceThresholds::new(self.omega_threshold, self.qcvar_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let cfg = ValidatorConfig::default();
        assert_eq!(cfg.omega_threshold, 0.9);
        assert_eq!(cfg.qcvar_limit, 0.1);
        assert_eq!(cfg.qcvar_alpha, 0.9);
        assert_eq!(cfg.max_history, 100);
        assert_eq!(cfg.min_samples, 5);
    }

    #[test]
    fn sanitized_coerces_out_of_range_values() {
        let cfg = ValidatorConfig::default()
            .with_omega_threshold(1.7)
            .with_qcvar_limit(f64::NAN)
            .with_qcvar_alpha(1.0)
            .with_max_history(0)
            .with_min_samples(0)
            .sanitized();

        assert_eq!(cfg.omega_threshold, 1.0);
        assert_eq!(cfg.qcvar_limit, 0.0);
        assert!(cfg.qcvar_alpha < 1.0);
        assert_eq!(cfg.max_history, 1);
        assert_eq!(cfg.min_samples, 1);
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let cfg: ValidatorConfig =
            serde_json::from_str(r#"{"max_history": 7}"#).expect("deserialize config");
        assert_eq!(cfg.max_history, 7);
        assert_eq!(cfg.min_samples, 5);
    }

    #[test]
    fn thresholds_clamped_into_unit_interval() {
        let t = GovernanceThresholds::new(-0.5, 2.0).clamped();
        assert_eq!(t.omega_threshold, 0.0);
        assert_eq!(t.qcvar_limit, 1.0);
    }
}
