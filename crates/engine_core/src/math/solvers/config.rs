//! Solver configuration types.

use num_traits::Float;

/// Stopping criteria shared by the root finders.
///
/// Bundles the convergence tolerance and the iteration cap. When the
/// objective is the repricing residual of an implied-volatility search,
/// `tolerance` reads as the acceptable price error of the recovered
/// volatility.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use engine_core::math::solvers::SolverConfig;
///
/// // Use default configuration
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
/// assert!(config.max_iterations >= 50);
///
/// // Custom configuration
/// let custom = SolverConfig {
///     tolerance: 1e-12,
///     max_iterations: 200,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on the objective.
    ///
    /// The solver stops when `|f(x)| < tolerance`; for a volatility
    /// search this bounds how far the model price may sit from the
    /// quote.
    pub tolerance: T,

    /// Maximum number of iterations before giving up.
    ///
    /// If the solver doesn't converge within this limit,
    /// it returns `SolverError::MaxIterationsExceeded`.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Create a default configuration with sensible values.
    ///
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap(),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Convergence tolerance (must be positive)
    /// * `max_iterations` - Maximum iteration count (must be > 0)
    ///
    /// # Panics
    ///
    /// Panics if `tolerance <= 0` or `max_iterations == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use engine_core::math::solvers::SolverConfig;
    ///
    /// let config = SolverConfig::new(1e-12, 200);
    /// assert_eq!(config.max_iterations, 200);
    /// ```
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        assert!(tolerance > T::zero(), "tolerance must be positive");
        assert!(max_iterations > 0, "max_iterations must be > 0");
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Create a configuration optimised for fast convergence.
    ///
    /// Relaxed tolerance (1e-6) and fewer iterations (50), suited to
    /// sweeping implied volatilities across a quote surface where
    /// sub-basis-point price accuracy is wasted effort.
    pub fn fast() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 50,
        }
    }

    /// Create a configuration with high precision settings.
    ///
    /// Tighter tolerance (1e-14) and more iterations (500), for
    /// inversions feeding calibration where residual price error would
    /// contaminate downstream parameters.
    pub fn high_precision() -> Self {
        Self {
            tolerance: T::from(1e-14).unwrap(),
            max_iterations: 500,
        }
    }
}
