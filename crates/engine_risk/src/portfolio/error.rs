//! Portfolio error types.
//!
//! This module provides structured error types for portfolio operations
//! using `thiserror` for derivation.

use engine_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur during portfolio construction or analysis.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Position quantity is zero or non-finite.
    #[error("Invalid quantity {quantity}: must be finite and non-zero")]
    InvalidQuantity {
        /// The rejected quantity.
        quantity: f64,
    },

    /// Premium paid is negative or non-finite.
    #[error("Invalid premium {premium}: must be finite and non-negative")]
    InvalidPremium {
        /// The rejected premium.
        premium: f64,
    },

    /// Valuation of a single position failed.
    #[error("Valuation failed for position {position_idx}: {message}")]
    PositionValuationFailed {
        /// Index of the failed position.
        position_idx: usize,
        /// Error message.
        message: String,
    },
}

impl From<PortfolioError> for PricingError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::InvalidQuantity { .. } | PortfolioError::InvalidPremium { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            PortfolioError::PositionValuationFailed { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
