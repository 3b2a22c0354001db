//! Structured tracing hooks for rolling-validator lifecycle events.
//!
//! Every event carries an `event` field naming it (`omega.*`). Health
//! evaluations and resets are emitted at `info!`; per-evaluation detail at
//! `debug!`/`trace!`. Filter with `RUST_LOG`, see [`crate::init_tracing`].

use tracing::{debug, info, trace};

/// Emit event: an evaluation was appended to the validator history.
pub fn emit_evaluation_recorded(
    omega: f64,
    qcvar: f64,
    production_ready: bool,
    history_size: usize,
) {
    debug!(
        event = "omega.evaluation_recorded",
        omega = omega,
        qcvar = qcvar,
        production_ready = production_ready,
        history_size = history_size,
    );
}

/// Emit event: oldest evaluations evicted to respect `max_history`.
pub fn emit_history_evicted(evicted: usize, max_history: usize) {
    trace!(
        event = "omega.history_evicted",
        evicted = evicted,
        max_history = max_history
    );
}

/// Emit event: a health snapshot was computed.
pub fn emit_health_evaluated(
    latest_omega: f64,
    qcvar: f64,
    production_ready: bool,
    sample_count: usize,
) {
    info!(
        event = "omega.health_evaluated",
        latest_omega = latest_omega,
        qcvar = qcvar,
        production_ready = production_ready,
        sample_count = sample_count,
    );
}

/// Emit event: barrier passed but readiness was withheld for lack of samples.
pub fn emit_readiness_gated(sample_count: usize, min_samples: usize) {
    debug!(
        event = "omega.readiness_gated",
        sample_count = sample_count,
        min_samples = min_samples,
    );
}

/// Emit event: validator history cleared.
pub fn emit_validator_reset(cleared: usize) {
    info!(event = "omega.validator_reset", cleared = cleared);
}

