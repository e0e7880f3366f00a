//! Monte Carlo pricing result.

use engine_models::Valuation;

/// Monte Carlo price estimate with sampling uncertainty.
///
/// # Examples
///
/// ```rust
/// use engine_models::Valuation;
/// use engine_pricing::mc::MonteCarloResult;
///
/// let result = MonteCarloResult {
///     valuation: Valuation::new(10.5, 0.0, None),
///     std_error: 0.05,
///     confidence_interval: (10.402, 10.598),
/// };
///
/// println!("Price: {} +/- {}", result.valuation.theoretical_value(), result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloResult {
    /// The price estimate (with intrinsic/time-value split, no Greeks).
    pub valuation: Valuation<f64>,
    /// Standard error of the discounted estimate. Vanishes whenever the
    /// sampled payoffs carry no variance: expired contracts, zero
    /// volatility, or a payoff that is worthless on every drawn path.
    pub std_error: f64,
    /// 95% confidence interval `(low, high)` around the estimate.
    /// Collapses to a point when `std_error` is zero.
    pub confidence_interval: (f64, f64),
}

impl MonteCarloResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_half_width() {
        let result = MonteCarloResult {
            valuation: Valuation::new(10.0, 0.0, None),
            std_error: 0.1,
            confidence_interval: (9.804, 10.196),
        };

        assert_relative_eq!(result.confidence_95(), 0.196, epsilon = 1e-10);
    }
}
