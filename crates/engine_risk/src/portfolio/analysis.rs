//! Portfolio risk aggregation.
//!
//! [`analyze_portfolio`] values every position with the closed-form
//! model, nets the Greeks across the book, and scans the expiry payoff
//! profile for breakeven points and worst/best case outcomes.
//!
//! Position valuation is parallelised with Rayon; a failure in any
//! single position fails the whole analysis.

use crate::portfolio::{PortfolioError, PortfolioPosition};
use engine_models::analytical::black_scholes;
use engine_models::instruments::OptionType;
use engine_models::Valuation;
use rayon::prelude::*;

/// Number of intervals in the expiry payoff scan.
const PAYOFF_GRID_STEPS: usize = 1_000;

/// Threshold below which a net call quantity is treated as flat.
const NET_QUANTITY_EPSILON: f64 = 1e-12;

/// Aggregated risk metrics for a portfolio of option positions.
///
/// Greeks are quantity-weighted sums over the book. `max_loss` and
/// `max_gain` are non-negative magnitudes of the worst and best expiry
/// outcomes, `f64::INFINITY` where the exposure is unbounded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioRisk {
    /// Net theoretical value of the book.
    pub total_value: f64,
    /// Net delta.
    pub total_delta: f64,
    /// Net gamma.
    pub total_gamma: f64,
    /// Net vega.
    pub total_vega: f64,
    /// Net theta.
    pub total_theta: f64,
    /// Net rho.
    pub total_rho: f64,
    /// Magnitude of the worst expiry loss, `INFINITY` if unbounded.
    pub max_loss: f64,
    /// Magnitude of the best expiry gain, `INFINITY` if unbounded.
    pub max_gain: f64,
    /// Underlying prices at which the expiry P&L crosses zero, ascending.
    pub breakevens: Vec<f64>,
}

impl PortfolioRisk {
    fn zero() -> Self {
        Self {
            total_value: 0.0,
            total_delta: 0.0,
            total_gamma: 0.0,
            total_vega: 0.0,
            total_theta: 0.0,
            total_rho: 0.0,
            max_loss: 0.0,
            max_gain: 0.0,
            breakevens: Vec::new(),
        }
    }
}

/// Analyses a portfolio of option positions.
///
/// Values each position analytically in parallel, aggregates the
/// quantity-weighted value and Greeks, and derives expiry metrics from
/// the net payoff profile. An empty slice yields all-zero metrics.
///
/// Every position is valued with the European closed form, so
/// American-style positions enter `total_value` without their
/// early-exercise premium.
///
/// # Arguments
///
/// * `positions` - The positions making up the book
///
/// # Errors
///
/// Returns [`PortfolioError::PositionValuationFailed`] if any position
/// produces a non-finite valuation; no partial result is returned.
///
/// # Examples
///
/// ```
/// use engine_models::instruments::{OptionContract, OptionType};
/// use engine_risk::portfolio::{analyze_portfolio, PortfolioPosition};
///
/// let call = OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)?;
/// let position = PortfolioPosition::new(call, 10.0, 10.45)?;
/// let risk = analyze_portfolio(&[position])?;
/// assert!(risk.total_delta > 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn analyze_portfolio(
    positions: &[PortfolioPosition],
) -> Result<PortfolioRisk, PortfolioError> {
    if positions.is_empty() {
        return Ok(PortfolioRisk::zero());
    }

    let valuations: Vec<Valuation<f64>> = positions
        .par_iter()
        .enumerate()
        .map(|(idx, position)| {
            let valuation = black_scholes::value_contract(position.contract());
            if !valuation.theoretical_value().is_finite() {
                return Err(PortfolioError::PositionValuationFailed {
                    position_idx: idx,
                    message: format!(
                        "non-finite theoretical value {}",
                        valuation.theoretical_value()
                    ),
                });
            }
            Ok(valuation)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut risk = PortfolioRisk::zero();
    for (position, valuation) in positions.iter().zip(&valuations) {
        let quantity = position.quantity();
        risk.total_value += quantity * valuation.theoretical_value();
        if let Some(g) = valuation.greeks() {
            risk.total_delta += quantity * g.delta;
            risk.total_gamma += quantity * g.gamma;
            risk.total_vega += quantity * g.vega;
            risk.total_theta += quantity * g.theta;
            risk.total_rho += quantity * g.rho;
        }
    }

    let (max_loss, max_gain, breakevens) = expiry_profile(positions);
    risk.max_loss = max_loss;
    risk.max_gain = max_gain;
    risk.breakevens = breakevens;

    Ok(risk)
}

/// Net expiry P&L of the book at a terminal underlying price.
fn net_pnl(positions: &[PortfolioPosition], terminal_spot: f64) -> f64 {
    positions
        .iter()
        .map(|p| p.pnl_at_expiry(terminal_spot))
        .sum()
}

/// Scans the net expiry payoff on `[0, 2 * max(strike, spot)]`.
///
/// Returns the non-negative loss and gain magnitudes and the zero
/// crossings found by linear interpolation between grid points. Above
/// the grid the profile is linear in the underlying with slope equal to
/// the net call quantity, which decides unboundedness.
fn expiry_profile(positions: &[PortfolioPosition]) -> (f64, f64, Vec<f64>) {
    let spot_max = positions
        .iter()
        .map(|p| p.contract().strike().max(p.contract().spot()))
        .fold(0.0_f64, f64::max)
        * 2.0;

    let step = spot_max / PAYOFF_GRID_STEPS as f64;
    let mut min_pnl = f64::INFINITY;
    let mut max_pnl = f64::NEG_INFINITY;
    let mut breakevens = Vec::new();
    let mut prev = net_pnl(positions, 0.0);

    for i in 0..=PAYOFF_GRID_STEPS {
        let spot = step * i as f64;
        let pnl = if i == 0 { prev } else { net_pnl(positions, spot) };
        min_pnl = min_pnl.min(pnl);
        max_pnl = max_pnl.max(pnl);

        if pnl == 0.0 {
            // Exact zero at a grid point, from either direction; a
            // plateau of zeros is recorded once at its left edge
            if i == 0 || prev != 0.0 {
                breakevens.push(spot);
            }
        } else if i > 0 && prev * pnl < 0.0 {
            // Linear interpolation between the bracketing grid points
            let fraction = prev / (prev - pnl);
            breakevens.push(spot - step + fraction * step);
        }
        prev = pnl;
    }

    let net_calls: f64 = positions
        .iter()
        .filter(|p| p.contract().option_type() == OptionType::Call)
        .map(|p| p.quantity())
        .sum();

    let max_loss = if net_calls < -NET_QUANTITY_EPSILON {
        f64::INFINITY
    } else {
        (-min_pnl).max(0.0)
    };
    let max_gain = if net_calls > NET_QUANTITY_EPSILON {
        f64::INFINITY
    } else {
        max_pnl.max(0.0)
    };

    (max_loss, max_gain, breakevens)
}

// ============================================================================
// TESTS
// ============================================================================
