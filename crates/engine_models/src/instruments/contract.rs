//! Option contract definition with validation.

use num_traits::Float;

use super::error::InstrumentError;
use super::exercise::ExerciseStyle;
use super::option_type::OptionType;

/// Immutable option contract describing one pricing request.
///
/// Combines the market state (spot, rate, volatility) and the contract
/// terms (strike, expiry, payoff type, exercise style). Construction
/// validates every parameter, so a successfully built contract is safe
/// input for all pricing engines.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Parameter domains
/// - `spot > 0`, finite
/// - `strike > 0`, finite
/// - `time_to_expiry` finite; negative values are clamped to 0 (already expired)
/// - `rate` finite; may be zero or negative
/// - `volatility >= 0`, finite (annualised)
///
/// # Examples
/// ```
/// use engine_models::instruments::{OptionContract, OptionType};
///
/// let contract = OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
/// assert_eq!(contract.intrinsic_value(), 0.0);
///
/// // NaN parameters are rejected
/// assert!(
///     OptionContract::european(f64::NAN, 100.0, 1.0, 0.05, 0.2, OptionType::Call).is_err()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract<T: Float> {
    spot: T,
    strike: T,
    time_to_expiry: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
    exercise_style: ExerciseStyle,
}

impl<T: Float> OptionContract<T> {
    /// Creates a new contract with validation.
    ///
    /// # Arguments
    /// * `spot` - Current underlying price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `time_to_expiry` - Time to expiry in years; negative is clamped to 0
    /// * `rate` - Continuously compounded risk-free rate (may be negative)
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `option_type` - Call or put
    /// * `exercise_style` - European or American
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot is non-positive or non-finite
    /// - `InstrumentError::InvalidStrike` if strike is non-positive or non-finite
    /// - `InstrumentError::InvalidVolatility` if volatility is negative or non-finite
    /// - `InstrumentError::NonFiniteParameter` if expiry or rate is NaN/Inf
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        strike: T,
        time_to_expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
        exercise_style: ExerciseStyle,
    ) -> Result<Self, InstrumentError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !strike.is_finite() || strike <= zero {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility < zero {
            return Err(InstrumentError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !time_to_expiry.is_finite() {
            return Err(InstrumentError::NonFiniteParameter {
                name: "time_to_expiry",
                value: time_to_expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !rate.is_finite() {
            return Err(InstrumentError::NonFiniteParameter {
                name: "rate",
                value: rate.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            // Negative expiry means the contract has already expired
            time_to_expiry: time_to_expiry.max(zero),
            rate,
            volatility,
            option_type,
            exercise_style,
        })
    }

    /// Creates a European-exercise contract.
    ///
    /// Convenience constructor with the same validation as [`OptionContract::new`].
    pub fn european(
        spot: T,
        strike: T,
        time_to_expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
            option_type,
            ExerciseStyle::European,
        )
    }

    /// Creates an American-exercise contract.
    ///
    /// Convenience constructor with the same validation as [`OptionContract::new`].
    pub fn american(
        spot: T,
        strike: T,
        time_to_expiry: T,
        rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        Self::new(
            spot,
            strike,
            time_to_expiry,
            rate,
            volatility,
            option_type,
            ExerciseStyle::American,
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years (never negative).
    #[inline]
    pub fn time_to_expiry(&self) -> T {
        self.time_to_expiry
    }

    /// Returns the continuously compounded risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the annualised volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the payoff type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns whether the contract has already expired (expiry clamped to 0).
    #[inline]
    pub fn has_expired(&self) -> bool {
        self.time_to_expiry <= T::zero()
    }

    /// Exercise payoff at a given terminal underlying price.
    #[inline]
    pub fn payoff(&self, terminal_spot: T) -> T {
        self.option_type.payoff(terminal_spot, self.strike)
    }

    /// Intrinsic value at the current spot.
    ///
    /// `max(S - K, 0)` for a call, `max(K - S, 0)` for a put.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        self.option_type.payoff(self.spot, self.strike)
    }

    /// Returns a copy of the contract with the volatility replaced.
    ///
    /// Negative inputs are clamped to zero so the copy stays within the
    /// validated domain. Used by solvers that reprice across volatilities.
    #[inline]
    pub fn with_volatility(&self, volatility: T) -> Self {
        Self {
            volatility: volatility.max(T::zero()),
            ..*self
        }
    }

    /// Returns a copy of the contract with the spot replaced.
    ///
    /// Non-positive inputs are clamped to a small positive value so the
    /// copy stays within the validated domain. Used by scenario scans
    /// that reprice across underlying levels.
    #[inline]
    pub fn with_spot(&self, spot: T) -> Self {
        Self {
            spot: spot.max(T::from(1e-12).unwrap()),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_call() -> OptionContract<f64> {
        OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let contract = atm_call();
        assert_eq!(contract.spot(), 100.0);
        assert_eq!(contract.strike(), 100.0);
        assert_eq!(contract.time_to_expiry(), 1.0);
        assert_eq!(contract.rate(), 0.05);
        assert_eq!(contract.volatility(), 0.2);
        assert_eq!(contract.option_type(), OptionType::Call);
        assert!(contract.exercise_style().is_european());
    }

    #[test]
    fn test_new_invalid_spot() {
        let result =
            OptionContract::european(-100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(matches!(result, Err(InstrumentError::InvalidSpot { .. })));

        let result = OptionContract::european(0.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
        assert!(matches!(result, Err(InstrumentError::InvalidSpot { .. })));
    }

    #[test]
    fn test_new_invalid_strike() {
        let result = OptionContract::european(100.0_f64, 0.0, 1.0, 0.05, 0.2, OptionType::Put);
        assert!(matches!(result, Err(InstrumentError::InvalidStrike { .. })));
    }

    #[test]
    fn test_new_negative_volatility_rejected() {
        let result =
            OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, -0.2, OptionType::Call);
        match result {
            Err(InstrumentError::InvalidVolatility { volatility }) => {
                assert_eq!(volatility, -0.2);
            }
            _ => panic!("Expected InvalidVolatility error"),
        }
    }

    #[test]
    fn test_new_zero_volatility_allowed() {
        let contract =
            OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionType::Call);
        assert!(contract.is_ok());
    }

    #[test]
    fn test_new_negative_rate_allowed() {
        let contract =
            OptionContract::european(100.0_f64, 100.0, 1.0, -0.02, 0.2, OptionType::Call);
        assert!(contract.is_ok());
    }

    #[test]
    fn test_new_nan_rejected() {
        for (spot, strike, expiry, rate, vol) in [
            (f64::NAN, 100.0, 1.0, 0.05, 0.2),
            (100.0, f64::NAN, 1.0, 0.05, 0.2),
            (100.0, 100.0, f64::NAN, 0.05, 0.2),
            (100.0, 100.0, 1.0, f64::NAN, 0.2),
            (100.0, 100.0, 1.0, 0.05, f64::NAN),
        ] {
            let result =
                OptionContract::european(spot, strike, expiry, rate, vol, OptionType::Call);
            assert!(result.is_err(), "NaN parameter should be rejected");
        }
    }

    #[test]
    fn test_new_infinite_rejected() {
        let result = OptionContract::european(
            f64::INFINITY,
            100.0,
            1.0,
            0.05,
            0.2,
            OptionType::Call,
        );
        assert!(result.is_err());

        let result = OptionContract::european(
            100.0,
            100.0,
            f64::INFINITY,
            0.05,
            0.2,
            OptionType::Call,
        );
        assert!(matches!(
            result,
            Err(InstrumentError::NonFiniteParameter { .. })
        ));
    }

    #[test]
    fn test_negative_expiry_clamped() {
        let contract =
            OptionContract::european(100.0_f64, 100.0, -0.5, 0.05, 0.2, OptionType::Call)
                .unwrap();
        assert_eq!(contract.time_to_expiry(), 0.0);
        assert!(contract.has_expired());
    }

    // ==========================================================
    // Payoff / Intrinsic Tests
    // ==========================================================

    #[test]
    fn test_intrinsic_value_call() {
        let contract =
            OptionContract::european(120.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
                .unwrap();
        assert_relative_eq!(contract.intrinsic_value(), 20.0);
    }

    #[test]
    fn test_intrinsic_value_put() {
        let contract =
            OptionContract::european(90.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        assert_relative_eq!(contract.intrinsic_value(), 10.0);
    }

    #[test]
    fn test_payoff_at_terminal_spot() {
        let contract = atm_call();
        assert_eq!(contract.payoff(130.0), 30.0);
        assert_eq!(contract.payoff(70.0), 0.0);
    }

    #[test]
    fn test_american_constructor() {
        let contract =
            OptionContract::american(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put).unwrap();
        assert!(contract.exercise_style().is_american());
    }

    #[test]
    fn test_copy_semantics() {
        let contract1 = atm_call();
        let contract2 = contract1;
        assert_eq!(contract1, contract2);
    }

    #[test]
    fn test_with_volatility() {
        let contract = atm_call().with_volatility(0.35);
        assert_eq!(contract.volatility(), 0.35);
        assert_eq!(contract.spot(), 100.0);

        // Negative volatility is clamped
        let clamped = atm_call().with_volatility(-0.1);
        assert_eq!(clamped.volatility(), 0.0);
    }

    #[test]
    fn test_with_spot() {
        let contract = atm_call().with_spot(150.0);
        assert_eq!(contract.spot(), 150.0);
        assert_eq!(contract.strike(), 100.0);

        // Non-positive spot is clamped to a small positive value
        let clamped = atm_call().with_spot(0.0);
        assert!(clamped.spot() > 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let contract =
            OptionContract::european(100.0_f32, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
                .unwrap();
        assert_eq!(contract.spot(), 100.0_f32);
    }
}
