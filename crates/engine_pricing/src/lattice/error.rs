//! Error types for the binomial lattice engine.

use engine_core::types::PricingError;
use thiserror::Error;

/// Binomial lattice errors.
///
/// # Variants
/// - `InvalidStepCount`: Step count outside the supported range
/// - `ProbabilityOutOfRange`: Lattice parameters produce a risk-neutral
///   probability outside [0, 1]
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LatticeError {
    /// Step count outside the supported range.
    #[error("Invalid step count {steps}: must be in range [1, {max}]")]
    InvalidStepCount {
        /// The rejected step count
        steps: usize,
        /// Upper limit on step count
        max: usize,
    },

    /// Risk-neutral probability fell outside [0, 1].
    ///
    /// Happens when the per-step drift `exp(r*dt)` escapes the
    /// `[d, u]` interval, typically with extreme rates and tiny
    /// volatility.
    #[error("Risk-neutral probability {p} outside [0, 1]")]
    ProbabilityOutOfRange {
        /// The offending probability
        p: f64,
    },
}

impl From<LatticeError> for PricingError {
    fn from(err: LatticeError) -> Self {
        match err {
            LatticeError::InvalidStepCount { .. } => PricingError::InvalidInput(err.to_string()),
            LatticeError::ProbabilityOutOfRange { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
