//! Weighting factors for the Omega score.

use serde::{Deserialize, Serialize};

/// Denominator floor used when normalizing a (near-)zero weight total.
const MIN_WEIGHT_TOTAL: f64 = 1e-12;

/// Weights applied to the `psi`, `theta` and inverted `cvar` sub-signals.
///
/// Callers may supply any non-negative scale; [`OmegaWeights::normalized`]
/// rescales to a unit sum before scoring. Defaults bias epistemic strength
/// and latency equally while slightly discounting risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OmegaWeights {
    pub psi: f64,
    pub theta: f64,
    pub cvar: f64,
}

impl OmegaWeights {
    pub const DEFAULT: Self = Self {
        psi: 0.45,
        theta: 0.35,
        cvar: 0.20,
    };

    pub const fn new(psi: f64, theta: f64, cvar: f64) -> Self {
        Self { psi, theta, cvar }
    }

    /// Raw (un-normalized) total of the three weights.
    pub fn sum(&self) -> f64 {
        self.psi + self.theta + self.cvar
    }

    /// Return a copy rescaled so the components sum to 1.
    ///
    /// The denominator is floored at `1e-12`, so an all-zero triple yields
    /// zeros rather than NaN. That fallback is not a distribution.
    pub fn normalized(&self) -> Self {
        let total = self.sum().max(MIN_WEIGHT_TOTAL);
        Self {
            psi: self.psi / total,
            theta: self.theta / total,
            cvar: self.cvar / total,
        }
    }
}

impl Default for OmegaWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}
