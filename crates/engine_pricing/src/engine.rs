//! Method-dispatch pricing facade.
//!
//! One entry point over the three engines. Callers pick a
//! [`PricingMethod`] and get back the shared [`Valuation`] shape;
//! engine-specific knobs (step counts, path counts, seeds) live on the
//! method variants, so adding an engine never changes the signature.

use engine_core::types::PricingError;
use engine_models::analytical::black_scholes;
use engine_models::analytical::Greeks;
use engine_models::instruments::OptionContract;
use engine_models::Valuation;

use crate::lattice::BinomialPricer;
use crate::mc::{MonteCarloConfig, MonteCarloPricer};

/// Selects the pricing engine and its parameters.
///
/// A closed enum replaces string method names: a misspelt engine is a
/// compile error, not a runtime surprise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingMethod {
    /// Closed-form Black-Scholes (European semantics).
    BlackScholes,
    /// Cox-Ross-Rubinstein binomial lattice; honours American exercise.
    Binomial {
        /// Number of lattice steps.
        steps: usize,
    },
    /// Monte Carlo terminal-price simulation (European semantics).
    MonteCarlo {
        /// Number of simulated paths.
        n_paths: usize,
        /// Seed for reproducibility; `None` draws one from entropy.
        seed: Option<u64>,
    },
}

/// Prices a contract with the selected engine.
///
/// # Errors
///
/// Returns `PricingError` when the engine parameters are invalid (zero
/// lattice steps, zero or excessive path counts) or the lattice
/// parameterisation is numerically unusable.
///
/// # Examples
///
/// ```rust
/// use engine_models::instruments::{OptionContract, OptionType};
/// use engine_pricing::{price, PricingMethod};
///
/// let call = OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
///
/// let analytic = price(&call, PricingMethod::BlackScholes).unwrap();
/// let lattice = price(&call, PricingMethod::Binomial { steps: 500 }).unwrap();
///
/// let diff = (analytic.theoretical_value() - lattice.theoretical_value()).abs();
/// assert!(diff < 0.05);
/// ```
pub fn price(
    contract: &OptionContract<f64>,
    method: PricingMethod,
) -> Result<Valuation<f64>, PricingError> {
    match method {
        PricingMethod::BlackScholes => Ok(black_scholes::value_contract(contract)),
        PricingMethod::Binomial { steps } => {
            let valuation = BinomialPricer::new(steps)?.price(contract)?;
            Ok(valuation)
        }
        PricingMethod::MonteCarlo { n_paths, seed } => {
            let mut builder = MonteCarloConfig::builder().n_paths(n_paths);
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }
            let pricer = MonteCarloPricer::new(builder.build()?)?;
            Ok(pricer.price(contract).valuation)
        }
    }
}

/// Computes the analytic Greeks for a contract.
///
/// Always uses the closed-form model; the numerical engines do not
/// produce sensitivities.
pub fn greeks(contract: &OptionContract<f64>) -> Greeks<f64> {
    black_scholes::greeks(contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use engine_models::instruments::OptionType;

    fn atm_call() -> OptionContract<f64> {
        OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call).unwrap()
    }

    #[test]
    fn test_black_scholes_dispatch() {
        let valuation = price(&atm_call(), PricingMethod::BlackScholes).unwrap();
        assert_relative_eq!(valuation.theoretical_value(), 10.4506, epsilon = 1e-3);
        assert!(valuation.greeks().is_some());
    }

    #[test]
    fn test_binomial_dispatch() {
        let valuation = price(&atm_call(), PricingMethod::Binomial { steps: 500 }).unwrap();
        assert_relative_eq!(valuation.theoretical_value(), 10.4506, epsilon = 0.05);
        assert!(valuation.greeks().is_none());
    }

    #[test]
    fn test_monte_carlo_dispatch() {
        let valuation = price(
            &atm_call(),
            PricingMethod::MonteCarlo {
                n_paths: 100_000,
                seed: Some(42),
            },
        )
        .unwrap();
        assert_relative_eq!(valuation.theoretical_value(), 10.4506, epsilon = 0.3);
    }

    #[test]
    fn test_invalid_lattice_steps_surface_as_pricing_error() {
        let result = price(&atm_call(), PricingMethod::Binomial { steps: 0 });
        assert!(matches!(result, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_path_count_surfaces_as_pricing_error() {
        let result = price(
            &atm_call(),
            PricingMethod::MonteCarlo {
                n_paths: 0,
                seed: None,
            },
        );
        assert!(matches!(result, Err(PricingError::InvalidInput(_))));
    }

    #[test]
    fn test_greeks_facade_matches_analytic() {
        let call = atm_call();
        let g = greeks(&call);
        assert_relative_eq!(g.delta, 0.6368, epsilon = 1e-3);
        assert!(g.gamma > 0.0);
    }
}
