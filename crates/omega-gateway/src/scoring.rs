//! Stateless scoring primitives: clamping, the Omega composite and the
//! tail-mean QCVaR estimator.
//!
//! Every function here is total. Non-finite input collapses to the lower
//! bound (clamp) or is dropped (QCVaR samples); nothing is rejected.

use crate::domain::OmegaWeights;

/// Distance kept between `alpha` and the ends of `(0, 1)`.
pub const ALPHA_EPSILON: f64 = 1e-6;

/// Coverage level used by [`compute_qcvar`] callers without a preference.
pub const DEFAULT_QCVAR_ALPHA: f64 = 0.95;

/// Bound `value` into `[min, max]`. NaN and ±infinity map to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.max(min).min(max)
}

/// [`clamp`] into `[0, 1]`.
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Compute the Omega composite in `[0, 1]`.
///
/// `psi` and `theta` are clamped to `[0, 1]`. `cvar` is clamped then
/// inverted, so lower risk contributes more. Weights are normalized;
/// `None` selects [`OmegaWeights::DEFAULT`].
pub fn compute_omega(psi: f64, theta: f64, cvar: f64, weights: Option<OmegaWeights>) -> f64 {
    let w = weights.unwrap_or_default().normalized();

    let safe_psi = clamp_unit(psi);
    let safe_theta = clamp_unit(theta);
    let safe_risk = 1.0 - clamp_unit(cvar);

    let omega = safe_psi * w.psi + safe_theta * w.theta + safe_risk * w.cvar;
    clamp_unit(omega)
}

/// Number of samples averaged by [`compute_qcvar`] for `n` finite samples.
///
/// Inclusive: `floor(n * (1 - alpha)) + 1`, never below 1, so small sample
/// sets keep signal at high alpha (19 samples at 0.95 still average one,
/// 20 average two).
pub fn tail_count(n: usize, alpha: f64) -> usize {
    let alpha = clamp(alpha, ALPHA_EPSILON, 1.0 - ALPHA_EPSILON);
    let tail = (n as f64 * (1.0 - alpha)).floor() as usize + 1;
    tail.max(1).min(n.max(1))
}

/// Tail-mean "Quantum CVaR" estimator.
///
/// Drops non-finite samples, sorts the rest descending (largest risk
/// first) and averages the first [`tail_count`] of them. Returns `0.0`
/// when no finite sample remains.
pub fn compute_qcvar<I>(samples: I, alpha: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut clean: Vec<f64> = samples.into_iter().filter(|v| v.is_finite()).collect();
    if clean.is_empty() {
        return 0.0;
    }

    clean.sort_by(|a, b| b.total_cmp(a));
    let tail = &clean[..tail_count(clean.len(), alpha)];
    tail.iter().sum::<f64>() / tail.len() as f64
}
