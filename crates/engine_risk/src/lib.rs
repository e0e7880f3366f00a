//! # Engine Risk (L4: Portfolio)
//!
//! Portfolio-level risk aggregation on top of the valuation engines.
//!
//! This crate provides:
//! - Option positions with signed quantities and premiums
//! - Net value and Greeks aggregation across a book
//! - Expiry payoff analysis: max loss, max gain, breakeven points
//! - Rayon-based parallel position valuation
//!
//! ## Example
//!
//! ```
//! use engine_models::instruments::{OptionContract, OptionType};
//! use engine_risk::portfolio::{analyze_portfolio, PortfolioPosition};
//!
//! // Long straddle: a call and a put at the same strike
//! let call = OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
//! let put = OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Put)?;
//!
//! let positions = vec![
//!     PortfolioPosition::new(call, 10.0, 10.45)?,
//!     PortfolioPosition::new(put, 10.0, 5.57)?,
//! ];
//!
//! let risk = analyze_portfolio(&positions)?;
//! assert_eq!(risk.breakevens.len(), 2);
//! assert!(risk.max_gain.is_infinite());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod portfolio;

pub use portfolio::{analyze_portfolio, PortfolioError, PortfolioPosition, PortfolioRisk};
