//! Rolling governance validator.
//!
//! [`OmegaValidator`] records every evaluation into a bounded FIFO history,
//! derives a live QCVaR over the retained `cvar` window and exposes health
//! and summary snapshots. Snapshots are always independent copies; nothing
//! returned aliases internal storage.
//!
//! # Concurrency
//!
//! No internal locking. Mutation goes through `&mut self`; callers sharing a
//! validator across threads must wrap it in their own `Mutex`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::barrier::validate_governance_barrier;
use crate::domain::{EvaluationRecord, OmegaWeights, ValidatorConfig};
use crate::obs::{
    emit_evaluation_recorded, emit_health_evaluated, emit_history_evicted, emit_readiness_gated,
    emit_validator_reset,
};
use crate::scoring::{clamp_unit, compute_omega, compute_qcvar};

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Result of [`OmegaValidator::validate_system`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Omega freshly computed for this call.
    pub omega: f64,
    /// QCVaR over the history window, including this call.
    pub qcvar: f64,
    /// Barrier verdict for `(omega, qcvar)`. Not gated by `min_samples`.
    pub production_ready: bool,
    pub history_size: usize,
}

/// Result of [`OmegaValidator::get_system_health`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    /// Omega of the most recent record, `0.0` when empty.
    pub latest_omega: f64,
    pub qcvar: f64,
    /// Barrier verdict, forced `false` below `min_samples`.
    pub production_ready: bool,
    pub sample_count: usize,
}

/// Result of [`OmegaValidator::get_validation_summary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Last record; encoded as `{}` when history is empty.
    #[serde(with = "latest_or_empty")]
    pub latest: Option<EvaluationRecord>,
    /// Every retained record, oldest first.
    pub history: Vec<EvaluationRecord>,
    pub qcvar: f64,
    pub omega_threshold: f64,
    pub qcvar_limit: f64,
}

mod latest_or_empty {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::domain::EvaluationRecord;

    /// Only the literal `{}`; any key makes it a (malformed) record.
    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Empty {}

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Latest {
        Record(EvaluationRecord),
        Empty(Empty),
    }

    pub fn serialize<S>(latest: &Option<EvaluationRecord>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match latest {
            Some(record) => Latest::Record(*record).serialize(s),
            None => Latest::Empty(Empty {}).serialize(s),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<EvaluationRecord>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Latest::deserialize(d)? {
            Latest::Record(record) => Some(record),
            Latest::Empty(_) => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Stateful rolling validator with a bounded evaluation history.
///
/// # Invariants
///
/// - `history.len() <= config.max_history`, oldest evicted first.
/// - The Omega and CVaR sequences are projections of `history` and so share
///   its length and eviction order.
/// - `config` is sanitized at construction and never changes.
#[derive(Debug, Clone)]
pub struct OmegaValidator {
    config: ValidatorConfig,
    history: VecDeque<EvaluationRecord>,
}

impl Default for OmegaValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl OmegaValidator {
    /// Build a validator; `config` is coerced via [`ValidatorConfig::sanitized`].
    pub fn new(config: ValidatorConfig) -> Self {
        let config = config.sanitized();
        Self {
            history: VecDeque::with_capacity(config.max_history.min(1024)),
            config,
        }
    }

    /// Effective (sanitized) configuration.
    pub fn config(&self) -> ValidatorConfig {
        self.config.clone()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Copy of the recorded Omega values, oldest first.
    pub fn omega_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.omega).collect()
    }

    /// Copy of the recorded (clamped) CVaR values, oldest first.
    pub fn cvar_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.cvar).collect()
    }

    /// Score one observation, record it and gate it.
    ///
    /// The returned `omega` is the one computed for this call, and
    /// `production_ready` is the raw barrier verdict (no `min_samples` gate).
    pub fn validate_system(
        &mut self,
        psi: f64,
        theta: f64,
        cvar: f64,
        weights: Option<OmegaWeights>,
    ) -> ValidationOutcome {
        let omega = compute_omega(psi, theta, cvar, weights);
        let record = EvaluationRecord::new(
            clamp_unit(psi),
            clamp_unit(theta),
            clamp_unit(cvar),
            omega,
        );

        self.history.push_back(record);
        self.trim_history();

        let qcvar = self.window_qcvar();
        let verdict = validate_governance_barrier(omega, qcvar, &self.config.thresholds());

        let outcome = ValidationOutcome {
            omega,
            qcvar,
            production_ready: verdict.production_ready,
            history_size: self.history.len(),
        };
        emit_evaluation_recorded(
            outcome.omega,
            outcome.qcvar,
            outcome.production_ready,
            outcome.history_size,
        );
        outcome
    }

    /// Health of the last *recorded* observation.
    ///
    /// Uses the stored Omega of the newest record rather than recomputing,
    /// and withholds readiness until `min_samples` records exist.
    pub fn get_system_health(&self) -> SystemHealth {
        let sample_count = self.history.len();
        let qcvar = self.window_qcvar();
        let latest_omega = self.history.back().map_or(0.0, |r| r.omega);

        let verdict = validate_governance_barrier(latest_omega, qcvar, &self.config.thresholds());
        let enough_samples = sample_count >= self.config.min_samples;
        if verdict.production_ready && !enough_samples {
            emit_readiness_gated(sample_count, self.config.min_samples);
        }

        let health = SystemHealth {
            latest_omega,
            qcvar,
            production_ready: verdict.production_ready && enough_samples,
            sample_count,
        };
        emit_health_evaluated(
            health.latest_omega,
            health.qcvar,
            health.production_ready,
            health.sample_count,
        );
        health
    }

    /// Independent copy of the history plus the active thresholds.
    pub fn get_validation_summary(&self) -> ValidationSummary {
        let history: Vec<EvaluationRecord> = self.history.iter().copied().collect();
        ValidationSummary {
            latest: history.last().copied(),
            history,
            qcvar: self.window_qcvar(),
            omega_threshold: self.config.omega_threshold,
            qcvar_limit: self.config.qcvar_limit,
        }
    }

    /// Drop all recorded evaluations. Configuration is untouched.
    pub fn reset(&mut self) {
        let cleared = self.history.len();
        self.history.clear();
        emit_validator_reset(cleared);
    }

    fn trim_history(&mut self) {
        let mut evicted = 0usize;
        while self.history.len() > self.config.max_history {
            self.history.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            emit_history_evicted(evicted, self.config.max_history);
        }
    }

    fn window_qcvar(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        compute_qcvar(self.history.iter().map(|r| r.cvar), self.config.qcvar_alpha)
    }
}
