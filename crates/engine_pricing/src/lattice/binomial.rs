//! Cox-Ross-Rubinstein binomial lattice pricer.
//!
//! Supports European and American exercise on vanilla calls and puts.
//! The lattice recombines, so an `n`-step tree carries `n + 1` terminal
//! nodes and backward induction runs in O(n²) time with O(n) memory.

use engine_models::instruments::OptionContract;
use engine_models::Valuation;

use super::error::LatticeError;

/// Upper limit on lattice step count.
pub const MAX_LATTICE_STEPS: usize = 10_000;

/// Volatility floor so a zero-volatility contract still yields a valid
/// up/down spread.
const VOLATILITY_FLOOR: f64 = 1e-6;

/// Cox-Ross-Rubinstein binomial lattice pricer.
///
/// Parameterisation per step of length `dt = T / n`:
/// `u = exp(sigma * sqrt(dt))`, `d = 1 / u`,
/// `p = (exp(r * dt) - d) / (u - d)`.
///
/// European prices converge to Black-Scholes as the step count grows;
/// American exercise is handled by flooring every node's continuation
/// value with the immediate exercise payoff.
///
/// # Examples
///
/// ```rust
/// use engine_models::instruments::{OptionContract, OptionType};
/// use engine_pricing::lattice::BinomialPricer;
///
/// let call = OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
/// let pricer = BinomialPricer::new(500).unwrap();
/// let valuation = pricer.price(&call).unwrap();
/// assert!((valuation.theoretical_value() - 10.45).abs() < 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialPricer {
    steps: usize,
}

impl BinomialPricer {
    /// Creates a pricer with the given number of lattice steps.
    ///
    /// # Errors
    ///
    /// Returns `LatticeError::InvalidStepCount` if `steps` is 0 or
    /// exceeds [`MAX_LATTICE_STEPS`].
    pub fn new(steps: usize) -> Result<Self, LatticeError> {
        if steps == 0 || steps > MAX_LATTICE_STEPS {
            return Err(LatticeError::InvalidStepCount {
                steps,
                max: MAX_LATTICE_STEPS,
            });
        }
        Ok(Self { steps })
    }

    /// Returns the number of lattice steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices a contract on the lattice, honouring its exercise style.
    ///
    /// # Errors
    ///
    /// Returns `LatticeError::ProbabilityOutOfRange` when the per-step
    /// drift escapes the `[d, u]` interval (extreme rate against tiny
    /// volatility), which would make the risk-neutral measure invalid.
    pub fn price(&self, contract: &OptionContract<f64>) -> Result<Valuation<f64>, LatticeError> {
        if contract.has_expired() {
            let intrinsic = contract.intrinsic_value();
            return Ok(Valuation::new(intrinsic, intrinsic, None));
        }

        let n = self.steps;
        let dt = contract.time_to_expiry() / n as f64;
        let vol = contract.volatility().max(VOLATILITY_FLOOR);

        // When the per-step spread sigma*sqrt(dt) cannot span the drift
        // r*dt, the tree degenerates (p would leave [0, 1]). The process
        // is then effectively deterministic, so price the forward directly.
        if vol * dt.sqrt() <= contract.rate().abs() * dt {
            return Ok(Self::deterministic_limit(contract));
        }

        let up = (vol * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (contract.rate() * dt).exp();
        let p = (growth - down) / (up - down);

        if !(0.0..=1.0).contains(&p) || !p.is_finite() {
            return Err(LatticeError::ProbabilityOutOfRange { p });
        }

        let discount = (-contract.rate() * dt).exp();
        let p_up = p * discount;
        let p_down = (1.0 - p) * discount;

        // Terminal payoffs, lowest node first. The recombining tree means
        // consecutive terminal prices differ by a factor of u².
        let mut node_spot = contract.spot() * down.powi(n as i32);
        let up_sq = up * up;
        let mut values: Vec<f64> = Vec::with_capacity(n + 1);
        for _ in 0..=n {
            values.push(contract.payoff(node_spot));
            node_spot *= up_sq;
        }

        let early_exercise = contract.exercise_style().allows_early_exercise();

        // Backward induction, overwriting in place
        for step in (0..n).rev() {
            // Lowest node at this layer
            let mut layer_spot = contract.spot() * down.powi(step as i32);
            for j in 0..=step {
                let continuation = p_up * values[j + 1] + p_down * values[j];
                values[j] = if early_exercise {
                    continuation.max(contract.payoff(layer_spot))
                } else {
                    continuation
                };
                layer_spot *= up_sq;
            }
        }

        Ok(Valuation::new(values[0], contract.intrinsic_value(), None))
    }

    /// Zero-volatility limit: the underlying grows deterministically at
    /// the risk-free rate.
    ///
    /// European value is the discounted terminal payoff along the
    /// deterministic path. With early exercise the optimal stopping time
    /// sits at one end of `[0, T]` because the discounted payoff is
    /// monotonic in time, so the American value is the larger of the
    /// immediate and terminal alternatives.
    fn deterministic_limit(contract: &OptionContract<f64>) -> Valuation<f64> {
        let t = contract.time_to_expiry();
        let forward = contract.spot() * (contract.rate() * t).exp();
        let terminal_value = (-contract.rate() * t).exp() * contract.payoff(forward);
        let intrinsic = contract.intrinsic_value();

        let value = if contract.exercise_style().allows_early_exercise() {
            terminal_value.max(intrinsic)
        } else {
            terminal_value
        };

        Valuation::new(value, intrinsic, None)
    }
}
