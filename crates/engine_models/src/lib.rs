//! # Engine Models (L2: Contracts & Analytics)
//!
//! Option contract definitions, analytical pricing formulas, and Greeks.
//!
//! This crate provides:
//! - Contract definitions (`OptionContract`, `OptionType`, `ExerciseStyle`)
//! - Standard normal distribution functions (`erf`, `norm_cdf`, `norm_pdf`)
//! - Black-Scholes closed-form pricing with analytical Greeks
//! - Implied volatility inversion (Newton-Raphson with bisection fallback)
//! - The `Valuation` output type shared by every pricing engine
//!
//! ## Design Principles
//!
//! - **Enum-based contracts** for static dispatch: `OptionType` and
//!   `ExerciseStyle` are closed enums, so invalid states (a `'cal'` typo in
//!   a string-dispatched system) cannot be represented at all
//! - **Generic over `T: Float`**: formulas work for `f64` and `f32`
//! - **Validated construction**: contracts reject NaN/Inf and non-positive
//!   prices at the boundary, so the numeric kernels never see them

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod valuation;

pub use valuation::Valuation;
