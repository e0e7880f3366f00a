//! Option payoff type definitions.

use num_traits::Float;

/// Type of option payoff.
///
/// # Variants
/// - `Call`: right to buy, payoff `max(S - K, 0)`
/// - `Put`: right to sell, payoff `max(K - S, 0)`
///
/// # Examples
/// ```
/// use engine_models::instruments::OptionType;
///
/// let payoff = OptionType::Call.payoff(110.0_f64, 100.0);
/// assert_eq!(payoff, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Evaluate the exercise payoff for given spot and strike.
    ///
    /// # Arguments
    /// * `spot` - Underlying price (S)
    /// * `strike` - Strike price (K)
    ///
    /// # Returns
    /// `max(S - K, 0)` for calls, `max(K - S, 0)` for puts. Never negative.
    ///
    /// # Examples
    /// ```
    /// use engine_models::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(90.0_f64, 100.0), 0.0);
    /// assert_eq!(OptionType::Put.payoff(90.0_f64, 100.0), 10.0);
    /// ```
    #[inline]
    pub fn payoff<T: Float>(&self, spot: T, strike: T) -> T {
        let zero = T::zero();
        match self {
            OptionType::Call => (spot - strike).max(zero),
            OptionType::Put => (strike - spot).max(zero),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff_in_the_money() {
        assert_eq!(OptionType::Call.payoff(110.0_f64, 100.0), 10.0);
    }

    #[test]
    fn test_call_payoff_out_of_the_money() {
        assert_eq!(OptionType::Call.payoff(90.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_call_payoff_at_the_money() {
        assert_eq!(OptionType::Call.payoff(100.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_put_payoff_in_the_money() {
        assert_eq!(OptionType::Put.payoff(90.0_f64, 100.0), 10.0);
    }

    #[test]
    fn test_put_payoff_out_of_the_money() {
        assert_eq!(OptionType::Put.payoff(110.0_f64, 100.0), 0.0);
    }

    #[test]
    fn test_is_call_is_put() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
        assert!(!OptionType::Put.is_call());
    }

    #[test]
    fn test_f32_compatibility() {
        let payoff = OptionType::Call.payoff(110.0_f32, 100.0_f32);
        assert_eq!(payoff, 10.0_f32);
    }

    #[test]
    fn test_clone_and_equality() {
        let call1 = OptionType::Call;
        let call2 = call1;
        assert_eq!(call1, call2);
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", OptionType::Put), "Put");
    }
}
