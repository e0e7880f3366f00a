//! Core error types shared across the engine layers.
//!
//! This module provides:
//! - `error`: Structured error types for pricing and solver operations
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`PricingError`], [`SolverError`] from `error`

pub mod error;

// Re-export commonly used types at module level
pub use error::{PricingError, SolverError};
