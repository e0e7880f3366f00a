//! Closed-form pricing: distributions, Black-Scholes, Greeks and
//! implied-volatility inversion.
//!
//! Everything here is generic over `T: Float` and operates on a
//! validated [`OptionContract`](crate::instruments::OptionContract).
//!
//! # Examples
//! ```
//! use engine_models::analytical::{black_scholes, implied_volatility};
//! use engine_models::instruments::{OptionContract, OptionType};
//!
//! let call = OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
//!     .unwrap();
//! let price = black_scholes::price(&call);
//!
//! // Invert the price back to its volatility
//! let estimate = implied_volatility(&call, price).unwrap();
//! assert!((estimate.volatility - 0.2).abs() < 1e-4);
//! ```

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod implied_vol;

pub use black_scholes::{value_contract, Greeks};
pub use error::AnalyticalError;
pub use implied_vol::{implied_volatility, ImpliedVolEstimate};
