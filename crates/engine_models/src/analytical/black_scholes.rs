//! Black-Scholes closed-form pricing and analytic Greeks.
//!
//! All entry points are free functions over a validated [`OptionContract`].
//! Because the contract guarantees positive spot/strike and non-negative
//! volatility and expiry, pricing itself cannot fail: degenerate inputs
//! (expired contracts, zero volatility) collapse to their analytic limits
//! instead of producing errors.

use num_traits::Float;

use crate::instruments::{OptionContract, OptionType};
use crate::valuation::Valuation;

use super::distributions::{norm_cdf, norm_pdf};

/// Expiry below this threshold is treated as already expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Volatility floor used inside d1/d2 so the zero-volatility limit is
/// reached smoothly rather than by dividing by zero.
const VOLATILITY_FLOOR: f64 = 1e-6;

/// The full set of first- and second-order sensitivities for one contract.
///
/// Conventions:
/// - `vega` is per unit of volatility (divide by 100 for a 1-point move)
/// - `theta` is per year (divide by 365 for a daily decay)
/// - `rho` is per unit of rate
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks<T: Float> {
    /// Sensitivity to the underlying price, dV/dS.
    pub delta: T,
    /// Convexity in the underlying price, d²V/dS².
    pub gamma: T,
    /// Sensitivity to volatility, dV/dσ.
    pub vega: T,
    /// Time decay, dV/dt (typically negative for long positions).
    pub theta: T,
    /// Sensitivity to the risk-free rate, dV/dr.
    pub rho: T,
}

/// Computes the Black-Scholes d1 and d2 terms.
///
/// Assumes the contract has not expired; volatility is floored at
/// `VOLATILITY_FLOOR` so the σ → 0 limit saturates the normal CDF
/// instead of dividing by zero.
fn d1_d2<T: Float>(contract: &OptionContract<T>) -> (T, T) {
    let half = T::from(0.5).unwrap();
    let vol = contract
        .volatility()
        .max(T::from(VOLATILITY_FLOOR).unwrap());
    let t = contract.time_to_expiry();
    let sqrt_t = t.sqrt();
    let vol_sqrt_t = vol * sqrt_t;

    let d1 = ((contract.spot() / contract.strike()).ln()
        + (contract.rate() + half * vol * vol) * t)
        / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;

    (d1, d2)
}

/// Prices a contract with the Black-Scholes formula.
///
/// The exercise style on the contract is ignored: this is the European
/// closed form, which also serves as the analytic lower bound for
/// American contracts.
///
/// # Mathematical Definition
/// - Call: `S·Φ(d1) − K·e^(−rT)·Φ(d2)`
/// - Put:  `K·e^(−rT)·Φ(−d2) − S·Φ(−d1)`
///
/// # Edge Cases
/// - Expired contract: returns the intrinsic value
/// - Zero volatility: converges to the discounted intrinsic value
///
/// # Examples
/// ```
/// use engine_models::analytical::black_scholes;
/// use engine_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
/// let price = black_scholes::price(&call);
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn price<T: Float>(contract: &OptionContract<T>) -> T {
    if contract.time_to_expiry() <= T::from(EXPIRY_EPSILON).unwrap() {
        return contract.intrinsic_value();
    }

    let (d1, d2) = d1_d2(contract);
    let discount = (-contract.rate() * contract.time_to_expiry()).exp();
    let discounted_strike = contract.strike() * discount;

    match contract.option_type() {
        OptionType::Call => {
            contract.spot() * norm_cdf(d1) - discounted_strike * norm_cdf(d2)
        }
        OptionType::Put => {
            discounted_strike * norm_cdf(-d2) - contract.spot() * norm_cdf(-d1)
        }
    }
}

/// Delta: sensitivity of the price to the underlying, dV/dS.
///
/// `Φ(d1)` for a call, `Φ(d1) − 1` for a put. At expiry this collapses
/// to a step function of moneyness.
pub fn delta<T: Float>(contract: &OptionContract<T>) -> T {
    if contract.time_to_expiry() <= T::from(EXPIRY_EPSILON).unwrap() {
        // Step-function limit at expiry
        let in_the_money = match contract.option_type() {
            OptionType::Call => contract.spot() > contract.strike(),
            OptionType::Put => contract.spot() < contract.strike(),
        };
        if !in_the_money {
            return T::zero();
        }
        return match contract.option_type() {
            OptionType::Call => T::one(),
            OptionType::Put => -T::one(),
        };
    }

    let (d1, _) = d1_d2(contract);
    match contract.option_type() {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - T::one(),
    }
}

/// Gamma: convexity of the price in the underlying, d²V/dS².
///
/// Identical for calls and puts. Zero at expiry.
pub fn gamma<T: Float>(contract: &OptionContract<T>) -> T {
    if contract.time_to_expiry() <= T::from(EXPIRY_EPSILON).unwrap() {
        return T::zero();
    }

    let (d1, _) = d1_d2(contract);
    let vol = contract
        .volatility()
        .max(T::from(VOLATILITY_FLOOR).unwrap());
    norm_pdf(d1) / (contract.spot() * vol * contract.time_to_expiry().sqrt())
}

/// Vega: sensitivity of the price to volatility, dV/dσ.
///
/// Identical for calls and puts. Zero at expiry.
pub fn vega<T: Float>(contract: &OptionContract<T>) -> T {
    if contract.time_to_expiry() <= T::from(EXPIRY_EPSILON).unwrap() {
        return T::zero();
    }

    let (d1, _) = d1_d2(contract);
    contract.spot() * norm_pdf(d1) * contract.time_to_expiry().sqrt()
}

/// Theta: time decay of the price, per year. Zero at expiry.
pub fn theta<T: Float>(contract: &OptionContract<T>) -> T {
    let t = contract.time_to_expiry();
    if t <= T::from(EXPIRY_EPSILON).unwrap() {
        return T::zero();
    }

    let two = T::from(2.0).unwrap();
    let (d1, d2) = d1_d2(contract);
    let vol = contract
        .volatility()
        .max(T::from(VOLATILITY_FLOOR).unwrap());
    let discounted_strike = contract.strike() * (-contract.rate() * t).exp();

    let time_term = -(contract.spot() * norm_pdf(d1) * vol) / (two * t.sqrt());

    match contract.option_type() {
        OptionType::Call => time_term - contract.rate() * discounted_strike * norm_cdf(d2),
        OptionType::Put => time_term + contract.rate() * discounted_strike * norm_cdf(-d2),
    }
}

/// Rho: sensitivity of the price to the risk-free rate, dV/dr.
///
/// Zero at expiry.
pub fn rho<T: Float>(contract: &OptionContract<T>) -> T {
    let t = contract.time_to_expiry();
    if t <= T::from(EXPIRY_EPSILON).unwrap() {
        return T::zero();
    }

    let (_, d2) = d1_d2(contract);
    let discounted_strike_time = contract.strike() * t * (-contract.rate() * t).exp();

    match contract.option_type() {
        OptionType::Call => discounted_strike_time * norm_cdf(d2),
        OptionType::Put => -discounted_strike_time * norm_cdf(-d2),
    }
}

/// Computes all five Greeks for a contract in one call.
///
/// # Examples
/// ```
/// use engine_models::analytical::black_scholes;
/// use engine_models::instruments::{OptionContract, OptionType};
///
/// let call = OptionContract::european(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
/// let greeks = black_scholes::greeks(&call);
/// assert!(greeks.delta > 0.0 && greeks.delta < 1.0);
/// assert!(greeks.gamma > 0.0);
/// ```
pub fn greeks<T: Float>(contract: &OptionContract<T>) -> Greeks<T> {
    Greeks {
        delta: delta(contract),
        gamma: gamma(contract),
        vega: vega(contract),
        theta: theta(contract),
        rho: rho(contract),
    }
}

/// Values a contract analytically, bundling price and Greeks into a
/// [`Valuation`].
///
/// This is the entry point the portfolio layer uses: one call per
/// position yields everything the aggregates need.
pub fn value_contract<T: Float>(contract: &OptionContract<T>) -> Valuation<T> {
    Valuation::new(
        price(contract),
        contract.intrinsic_value(),
        Some(greeks(contract)),
    )
}
