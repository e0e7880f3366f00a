//! # engine_core: Numeric Foundation for the Option Valuation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! engine_core is the bottom layer of the 4-layer architecture, providing:
//! - Structured error types: `PricingError`, `SolverError` (`types::error`)
//! - Root-finding solvers for implied-volatility inversion (`math::solvers`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other engine_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derive macros for structured errors
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use engine_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = solver
//!     .find_root(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0)
//!     .unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
