//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions. This is the primary solver
/// for implied-volatility inversion, where vega supplies the derivative.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root, but may fail when:
/// - The derivative is near zero (e.g., vanishing vega far from the money)
/// - The initial guess is far from the root
/// - An iterate leaves the finite range
///
/// Callers needing a guaranteed answer should fall back to
/// [`BisectionSolver`](super::BisectionSolver) on failure.
///
/// # Example
///
/// ```
/// use engine_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve e^x - 2 = 0 (find ln 2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
/// let root = solver
///     .find_root(|x: f64| x.exp() - 2.0, |x| x.exp(), 0.5)
///     .unwrap();
/// assert!((root - 2.0_f64.ln()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate left the finite range
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::from(1e-30).unwrap();

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            // Check for convergence
            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);

            // Check for near-zero derivative
            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            // Newton update
            x = x - f_val / f_prime_val;

            // Check for non-finite values
            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
