//! Bisection root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder.
///
/// Repeatedly halves a sign-change bracket until the function value or
/// the bracket width falls below tolerance. Slower than Newton-Raphson
/// but guaranteed to converge for continuous functions with a valid
/// bracket, which makes it the fallback when Newton steps diverge.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Example
///
/// ```
/// use engine_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::default());
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let root = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!((f(root)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` in the bracket [a, b].
    ///
    /// Requires that `f(a)` and `f(b)` have opposite signs (a valid bracket).
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `a` - Left bracket endpoint
    /// * `b` - Right bracket endpoint
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance` or the bracket has collapsed
    /// * `Err(SolverError::NoBracket)` - `f(a)` and `f(b)` have same sign
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    ///
    /// # Example
    ///
    /// ```
    /// use engine_core::math::solvers::{BisectionSolver, SolverConfig};
    ///
    /// let solver = BisectionSolver::new(SolverConfig::default());
    ///
    /// // Solve x² - 2 = 0 in bracket [0, 2]
    /// let root = solver.find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
    /// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-9);
    /// ```
    pub fn find_root<F>(&self, f: F, a: T, b: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
    {
        let mut a = a;
        let mut b = b;
        let fa = f(a);
        let fb = f(b);
        let two = T::from(2.0).unwrap();

        // Endpoints may already satisfy the tolerance
        if fa.abs() < self.config.tolerance {
            return Ok(a);
        }
        if fb.abs() < self.config.tolerance {
            return Ok(b);
        }

        // Check for valid bracket
        if fa * fb > T::zero() {
            return Err(SolverError::NoBracket {
                a: a.to_f64().unwrap_or(f64::NAN),
                b: b.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Keep the sign-change invariant: f(a) and f(mid) decide which half survives
        let mut fa = fa;

        for _iteration in 0..self.config.max_iterations {
            let mid = (a + b) / two;
            let fm = f(mid);

            if fm.abs() < self.config.tolerance || (b - a).abs() / two < self.config.tolerance {
                return Ok(mid);
            }

            if fa * fm < T::zero() {
                b = mid;
            } else {
                a = mid;
                fa = fm;
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
