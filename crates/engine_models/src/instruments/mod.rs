//! Option contract definitions.
//!
//! This module provides the immutable value types describing a single
//! pricing request:
//! - `OptionContract`: validated spot/strike/expiry/rate/volatility bundle
//! - `OptionType`: call or put payoff
//! - `ExerciseStyle`: European or American exercise
//! - `InstrumentError`: validation failures

pub mod contract;
pub mod error;
pub mod exercise;
pub mod option_type;

// Re-export main types at module level
pub use contract::OptionContract;
pub use error::InstrumentError;
pub use exercise::ExerciseStyle;
pub use option_type::OptionType;
