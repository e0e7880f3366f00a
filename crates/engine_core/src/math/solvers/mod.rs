//! Root-finding solvers for numerical computation.
//!
//! Root finders backing the implied-volatility inversion: given a quoted
//! option price, the pricing layer searches for the volatility at which
//! the model reprices the quote. Newton-Raphson leads when vega is
//! available, bisection brackets when it is not.
//!
//! ## Available Solvers
//!
//! - [`NewtonRaphsonSolver`]: Fast quadratic convergence using derivatives
//! - [`BisectionSolver`]: Robust bracketing method without derivative requirement
//!
//! ## Configuration
//!
//! Both solvers use [`SolverConfig`] for configuring:
//! - `tolerance`: Convergence tolerance (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use engine_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! // Solve x² - 2 = 0 (find √2) with Newton-Raphson
//! let newton = NewtonRaphsonSolver::new(SolverConfig::default());
//! let root = newton
//!     .find_root(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0)
//!     .unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
//!
//! // Same root with bisection on the bracket [0, 2]
//! let bisection = BisectionSolver::new(SolverConfig::default());
//! let root = bisection.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
//! assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod bisection;
mod config;
mod newton_raphson;

// Re-export public types at module level
pub use bisection::BisectionSolver;
pub use config::SolverConfig;
pub use newton_raphson::NewtonRaphsonSolver;
