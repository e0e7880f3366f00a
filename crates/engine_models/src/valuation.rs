//! Valuation output type shared by every pricing engine.

use num_traits::Float;

use crate::analytical::black_scholes::Greeks;

/// The result of valuing a single option contract.
///
/// Produced by the analytic model, the binomial lattice and the Monte
/// Carlo simulator alike, so downstream consumers handle one shape.
/// Immutable after construction; `time_value` is derived, never stored
/// negative.
///
/// # Examples
/// ```
/// use engine_models::Valuation;
///
/// let valuation = Valuation::new(10.45_f64, 0.0, None);
/// assert_eq!(valuation.theoretical_value(), 10.45);
/// assert_eq!(valuation.time_value(), 10.45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Valuation<T: Float> {
    theoretical_value: T,
    intrinsic_value: T,
    time_value: T,
    greeks: Option<Greeks<T>>,
}

impl<T: Float> Valuation<T> {
    /// Creates a valuation from a theoretical value and the contract's
    /// intrinsic value.
    ///
    /// Both values are clamped to be non-negative, and
    /// `time_value = max(theoretical - intrinsic, 0)` so numerical
    /// round-off below intrinsic never surfaces as negative time value.
    ///
    /// # Arguments
    /// * `theoretical_value` - Model price of the contract
    /// * `intrinsic_value` - Immediate-exercise value at the current spot
    /// * `greeks` - Sensitivities, when the producing engine computes them
    pub fn new(theoretical_value: T, intrinsic_value: T, greeks: Option<Greeks<T>>) -> Self {
        let theoretical_value = theoretical_value.max(T::zero());
        let intrinsic_value = intrinsic_value.max(T::zero());
        Self {
            theoretical_value,
            intrinsic_value,
            time_value: (theoretical_value - intrinsic_value).max(T::zero()),
            greeks,
        }
    }

    /// Model price of the contract (never negative).
    #[inline]
    pub fn theoretical_value(&self) -> T {
        self.theoretical_value
    }

    /// Immediate-exercise value at the current spot.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        self.intrinsic_value
    }

    /// Premium over intrinsic value (never negative).
    #[inline]
    pub fn time_value(&self) -> T {
        self.time_value
    }

    /// Sensitivities, when the producing engine computes them.
    #[inline]
    pub fn greeks(&self) -> Option<Greeks<T>> {
        self.greeks
    }
}
