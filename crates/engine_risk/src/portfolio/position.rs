//! Portfolio positions.
//!
//! A [`PortfolioPosition`] couples an option contract with a signed
//! quantity and the premium paid per contract. Positive quantities are
//! long positions, negative quantities are short.

use crate::portfolio::PortfolioError;
use engine_models::instruments::OptionContract;

/// A single option position within a portfolio.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioPosition {
    contract: OptionContract<f64>,
    quantity: f64,
    premium_paid: f64,
}

impl PortfolioPosition {
    /// Creates a new position.
    ///
    /// # Arguments
    ///
    /// * `contract` - The option contract held
    /// * `quantity` - Signed number of contracts (negative = short)
    /// * `premium_paid` - Premium paid per contract, non-negative
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidQuantity`] if `quantity` is zero
    /// or non-finite, and [`PortfolioError::InvalidPremium`] if
    /// `premium_paid` is negative or non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use engine_models::instruments::{OptionContract, OptionType};
    /// use engine_risk::portfolio::PortfolioPosition;
    ///
    /// let call = OptionContract::european(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Call)?;
    /// let long = PortfolioPosition::new(call, 10.0, 3.25)?;
    /// assert_eq!(long.quantity(), 10.0);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        contract: OptionContract<f64>,
        quantity: f64,
        premium_paid: f64,
    ) -> Result<Self, PortfolioError> {
        if !quantity.is_finite() || quantity == 0.0 {
            return Err(PortfolioError::InvalidQuantity { quantity });
        }
        if !premium_paid.is_finite() || premium_paid < 0.0 {
            return Err(PortfolioError::InvalidPremium {
                premium: premium_paid,
            });
        }
        Ok(Self {
            contract,
            quantity,
            premium_paid,
        })
    }

    /// Returns the underlying option contract.
    #[inline]
    pub fn contract(&self) -> &OptionContract<f64> {
        &self.contract
    }

    /// Returns the signed quantity (negative = short).
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Returns the premium paid per contract.
    #[inline]
    pub fn premium_paid(&self) -> f64 {
        self.premium_paid
    }

    /// Profit and loss of this position if the underlying finishes at
    /// `terminal_spot`, ignoring interest on the premium.
    #[inline]
    pub fn pnl_at_expiry(&self, terminal_spot: f64) -> f64 {
        self.quantity * (self.contract.payoff(terminal_spot) - self.premium_paid)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use engine_models::instruments::OptionType;

    fn call_contract() -> OptionContract<f64> {
        OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_new_valid_long_and_short() {
        let long = PortfolioPosition::new(call_contract(), 5.0, 2.0).unwrap();
        assert_eq!(long.quantity(), 5.0);
        assert_eq!(long.premium_paid(), 2.0);

        let short = PortfolioPosition::new(call_contract(), -5.0, 2.0).unwrap();
        assert_eq!(short.quantity(), -5.0);
    }

    #[test]
    fn test_new_rejects_zero_quantity() {
        let result = PortfolioPosition::new(call_contract(), 0.0, 2.0);
        assert!(matches!(
            result,
            Err(PortfolioError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_new_rejects_non_finite_quantity() {
        for q in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = PortfolioPosition::new(call_contract(), q, 2.0);
            assert!(
                matches!(result, Err(PortfolioError::InvalidQuantity { .. })),
                "quantity {} accepted",
                q
            );
        }
    }

    #[test]
    fn test_new_rejects_bad_premium() {
        assert!(matches!(
            PortfolioPosition::new(call_contract(), 1.0, -0.01),
            Err(PortfolioError::InvalidPremium { .. })
        ));
        assert!(matches!(
            PortfolioPosition::new(call_contract(), 1.0, f64::NAN),
            Err(PortfolioError::InvalidPremium { .. })
        ));
    }

    #[test]
    fn test_zero_premium_allowed() {
        assert!(PortfolioPosition::new(call_contract(), 1.0, 0.0).is_ok());
    }

    #[test]
    fn test_pnl_at_expiry_long_call() {
        let position = PortfolioPosition::new(call_contract(), 2.0, 10.0).unwrap();
        // ITM: 2 * (120 - 100 - 10) = 20
        assert_relative_eq!(position.pnl_at_expiry(120.0), 20.0);
        // OTM: 2 * (0 - 10) = -20
        assert_relative_eq!(position.pnl_at_expiry(80.0), -20.0);
    }

    #[test]
    fn test_pnl_at_expiry_short_flips_sign() {
        let long = PortfolioPosition::new(call_contract(), 3.0, 5.0).unwrap();
        let short = PortfolioPosition::new(call_contract(), -3.0, 5.0).unwrap();
        for spot in [50.0, 100.0, 150.0] {
            assert_relative_eq!(long.pnl_at_expiry(spot), -short.pnl_at_expiry(spot));
        }
    }
}
