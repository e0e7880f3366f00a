//! Portfolio structures and risk aggregation.
//!
//! Positions couple contracts with signed quantities; [`analyze_portfolio`]
//! nets value and Greeks across the book and derives expiry metrics.

mod analysis;
mod error;
mod position;

pub use analysis::{analyze_portfolio, PortfolioRisk};
pub use error::PortfolioError;
pub use position::PortfolioPosition;
