//! Error types for contract validation.

use engine_core::types::PricingError;
use thiserror::Error;

/// Contract validation errors.
///
/// Raised by [`OptionContract::new`](super::OptionContract::new) when a
/// parameter is outside its documented domain. Rejecting bad inputs at
/// construction keeps NaN/Inf out of every downstream pricer.
///
/// # Examples
/// ```
/// use engine_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (must be positive and finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (must be positive and finite).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid volatility (must be non-negative and finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A parameter was NaN or infinite.
    #[error("Non-finite parameter '{name}': {value}")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
