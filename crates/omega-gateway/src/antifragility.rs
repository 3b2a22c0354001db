//! Antifragility: did the system improve because it was stressed?

use serde::{Deserialize, Serialize};

use crate::scoring::clamp_unit;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntifragileMetrics {
    /// `after - before`, in `[-1, 1]`.
    pub improvement: f64,
    /// Stress was applied and the score strictly improved.
    pub is_antifragile: bool,
    /// `improvement` under stress, `0.0` otherwise.
    pub antifragile_coefficient: f64,
}

/// Compare `before`/`after` measurements (each clamped to `[0, 1]`).
pub fn antifragile_metric(before: f64, after: f64, stress_applied: bool) -> AntifragileMetrics {
    let improvement = clamp_unit(after) - clamp_unit(before);
    AntifragileMetrics {
        improvement,
        is_antifragile: stress_applied && improvement > 0.0,
        antifragile_coefficient: if stress_applied { improvement } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_improvement_under_stress_is_not_antifragile() {
        let m = antifragile_metric(0.5, 0.5, true);
        assert!(!m.is_antifragile);
        assert_eq!(m.antifragile_coefficient, 0.0);
    }

    #[test]
    fn regression_under_stress_has_negative_coefficient() {
        let m = antifragile_metric(0.8, 0.3, true);
        assert!(!m.is_antifragile);
        assert!((m.antifragile_coefficient + 0.5).abs() < 1e-9);
    }
}
