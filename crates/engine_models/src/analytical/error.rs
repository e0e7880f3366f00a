//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to closed-form pricing and inversion

use engine_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Provides structured error handling for closed-form pricing and
/// implied-volatility inversion with descriptive context for each
/// failure mode.
///
/// # Variants
/// - `PriceOutOfBounds`: Target price violates no-arbitrage bounds
/// - `ConversionFailure`: Value could not be represented in the working precision
/// - `NumericalInstability`: Computation encountered numerical issues
///
/// # Examples
/// ```
/// use engine_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::PriceOutOfBounds { price: -1.0, lower: 0.0, upper: 100.0 };
/// assert!(format!("{}", err).contains("no-arbitrage"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Target price outside the no-arbitrage interval for the contract.
    #[error("Price {price} violates no-arbitrage bounds [{lower}, {upper}]")]
    PriceOutOfBounds {
        /// The offending market price
        price: f64,
        /// Lower no-arbitrage bound (discounted intrinsic value)
        lower: f64,
        /// Upper no-arbitrage bound
        upper: f64,
    },

    /// A value could not be converted to the working float type.
    #[error("Numeric conversion failed for {name}")]
    ConversionFailure {
        /// Name of the value that failed to convert
        name: &'static str,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::PriceOutOfBounds { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::ConversionFailure { .. }
            | AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
