//! Implied volatility inversion.
//!
//! Recovers the Black-Scholes volatility that reproduces an observed
//! market price. Newton-Raphson with the analytic vega is the primary
//! method; when it fails to converge (flat vega far from the money,
//! prices near the no-arbitrage bounds) the solver falls back to
//! bisection over the full volatility search interval.

use engine_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
use num_traits::Float;

use crate::instruments::{OptionContract, OptionType};

use super::black_scholes;
use super::error::AnalyticalError;

/// Lower edge of the volatility search interval.
const VOL_MIN: f64 = 1e-4;

/// Upper edge of the volatility search interval (500% annualised).
const VOL_MAX: f64 = 5.0;

/// Newton-Raphson starting guess.
const INITIAL_GUESS: f64 = 0.3;

/// Vega floor used as the Newton derivative to avoid division blow-ups.
const VEGA_FLOOR: f64 = 1e-10;

/// Result of an implied volatility search.
///
/// `converged` is `false` when the solvers exhausted their budget and the
/// returned volatility is the best available estimate rather than a root
/// meeting the configured tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpliedVolEstimate<T: Float> {
    /// The recovered annualised volatility.
    pub volatility: T,
    /// Whether the solver met its tolerance.
    pub converged: bool,
}

/// Solves for the volatility that reproduces `market_price` under
/// Black-Scholes.
///
/// The volatility baked into the contract is ignored; only its spot,
/// strike, expiry, rate and payoff type participate.
///
/// # Arguments
/// * `contract` - The contract whose market price is observed
/// * `market_price` - The observed option premium
///
/// # Errors
/// - [`AnalyticalError::PriceOutOfBounds`] if the price violates the
///   no-arbitrage interval for the contract
/// - [`AnalyticalError::NumericalInstability`] if the contract has
///   expired (any volatility reproduces the intrinsic value)
///
/// # Examples
/// ```
/// use engine_models::analytical::implied_vol::implied_volatility;
/// use engine_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, 0.0, OptionType::Call)
///     .unwrap();
/// // Price generated with σ = 20% should invert back to 20%
/// let estimate = implied_volatility(&call, 10.4506).unwrap();
/// assert!((estimate.volatility - 0.2).abs() < 1e-3);
/// assert!(estimate.converged);
/// ```
pub fn implied_volatility<T: Float>(
    contract: &OptionContract<T>,
    market_price: T,
) -> Result<ImpliedVolEstimate<T>, AnalyticalError> {
    implied_volatility_with_config(contract, market_price, &SolverConfig::default())
}

/// Same as [`implied_volatility`] but with an explicit solver configuration.
pub fn implied_volatility_with_config<T: Float>(
    contract: &OptionContract<T>,
    market_price: T,
    config: &SolverConfig<T>,
) -> Result<ImpliedVolEstimate<T>, AnalyticalError> {
    if contract.has_expired() {
        return Err(AnalyticalError::NumericalInstability {
            message: "volatility is undetermined for an expired contract".to_string(),
        });
    }

    let (lower_bound, upper_bound) = no_arbitrage_bounds(contract);
    let slack = T::from(1e-9).unwrap();
    if market_price < lower_bound - slack || market_price > upper_bound + slack {
        return Err(AnalyticalError::PriceOutOfBounds {
            price: market_price.to_f64().unwrap_or(f64::NAN),
            lower: lower_bound.to_f64().unwrap_or(f64::NAN),
            upper: upper_bound.to_f64().unwrap_or(f64::NAN),
        });
    }

    let vol_min = T::from(VOL_MIN).unwrap();
    let vol_max = T::from(VOL_MAX).unwrap();

    // Prices indistinguishable from the lower bound carry no volatility
    // information beyond "very small"
    if market_price <= lower_bound + slack {
        return Ok(ImpliedVolEstimate {
            volatility: vol_min,
            converged: true,
        });
    }

    // Objective: repriced premium minus market. The candidate volatility
    // is clamped into the search interval inside the closure so Newton
    // steps cannot escape the valid domain.
    let objective = |sigma: T| {
        let clamped = sigma.max(vol_min).min(vol_max);
        black_scholes::price(&contract.with_volatility(clamped)) - market_price
    };
    let vega_fn = |sigma: T| {
        let clamped = sigma.max(vol_min).min(vol_max);
        black_scholes::vega(&contract.with_volatility(clamped))
            .max(T::from(VEGA_FLOOR).unwrap())
    };

    let newton = NewtonRaphsonSolver::new(*config);
    if let Ok(root) = newton.find_root(objective, vega_fn, T::from(INITIAL_GUESS).unwrap()) {
        return Ok(ImpliedVolEstimate {
            volatility: root.max(vol_min).min(vol_max),
            converged: true,
        });
    }

    // Bisection fallback over the full interval
    let bisection = BisectionSolver::new(*config);
    match bisection.find_root(objective, vol_min, vol_max) {
        Ok(root) => Ok(ImpliedVolEstimate {
            volatility: root,
            converged: true,
        }),
        Err(_) => {
            // No bracket inside the interval: the closest attainable price
            // sits at one of the edges. Report the nearer edge without
            // claiming convergence.
            let best = if objective(vol_min).abs() <= objective(vol_max).abs() {
                vol_min
            } else {
                vol_max
            };
            Ok(ImpliedVolEstimate {
                volatility: best,
                converged: false,
            })
        }
    }
}

/// No-arbitrage price bounds for a European option.
///
/// - Call: `max(S − K·e^(−rT), 0) <= C <= S`
/// - Put:  `max(K·e^(−rT) − S, 0) <= P <= K·e^(−rT)`
fn no_arbitrage_bounds<T: Float>(contract: &OptionContract<T>) -> (T, T) {
    let discounted_strike =
        contract.strike() * (-contract.rate() * contract.time_to_expiry()).exp();
    match contract.option_type() {
        OptionType::Call => (
            (contract.spot() - discounted_strike).max(T::zero()),
            contract.spot(),
        ),
        OptionType::Put => (
            (discounted_strike - contract.spot()).max(T::zero()),
            discounted_strike,
        ),
    }
}
