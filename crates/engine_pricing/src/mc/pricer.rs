//! Monte Carlo pricing engine.
//!
//! Terminal-price sampling under geometric Brownian motion: one normal
//! variate per path, so no path storage is needed. Batches of paths are
//! simulated in parallel with rayon; each batch seeds its own
//! [`NormalRng`] from the base seed plus the batch index, making the
//! estimate independent of worker scheduling.

use engine_models::instruments::OptionContract;
use engine_models::Valuation;
use rayon::prelude::*;

use super::config::MonteCarloConfig;
use super::error::ConfigError;
use super::result::MonteCarloResult;
use crate::rng::NormalRng;

/// Paths simulated per parallel batch.
const BATCH_SIZE: usize = 16_384;

/// Monte Carlo pricing engine for vanilla European payoffs.
///
/// # Examples
///
/// ```rust
/// use engine_models::instruments::{OptionContract, OptionType};
/// use engine_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config).unwrap();
///
/// let call = OptionContract::european(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call)
///     .unwrap();
/// let result = pricer.price(&call);
///
/// // Estimate lands near the Black-Scholes value of 10.4506
/// assert!((result.valuation.theoretical_value() - 10.45).abs() < 0.5);
/// ```
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a new pricer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a contract by simulation.
    ///
    /// The exercise style is ignored: terminal-price sampling prices the
    /// European payoff, which also lower-bounds the American value.
    ///
    /// Expired contracts return the intrinsic value with zero standard
    /// error and a collapsed confidence interval, since the outcome
    /// carries no sampling uncertainty. The same collapse occurs for any
    /// zero-variance sample, such as zero volatility or a deep
    /// out-of-the-money payoff worthless on every drawn path.
    pub fn price(&self, contract: &OptionContract<f64>) -> MonteCarloResult {
        if contract.has_expired() {
            let intrinsic = contract.intrinsic_value();
            return MonteCarloResult {
                valuation: Valuation::new(intrinsic, intrinsic, None),
                std_error: 0.0,
                confidence_interval: (intrinsic, intrinsic),
            };
        }

        let n_paths = self.config.n_paths();
        let base_seed = self.config.seed().unwrap_or_else(rand::random::<u64>);

        let t = contract.time_to_expiry();
        let vol = contract.volatility();
        // GBM terminal price: S_T = S * exp((r - sigma^2/2) T + sigma sqrt(T) Z)
        let drift = (contract.rate() - 0.5 * vol * vol) * t;
        let diffusion = vol * t.sqrt();
        let spot = contract.spot();

        let n_batches = n_paths.div_ceil(BATCH_SIZE);

        let (sum, sum_sq) = (0..n_batches)
            .into_par_iter()
            .map(|batch| {
                let mut rng = NormalRng::from_seed(base_seed.wrapping_add(batch as u64));
                let start = batch * BATCH_SIZE;
                let count = BATCH_SIZE.min(n_paths - start);

                let mut sum = 0.0;
                let mut sum_sq = 0.0;
                for _ in 0..count {
                    let z = rng.next_normal();
                    let terminal = spot * (drift + diffusion * z).exp();
                    let payoff = contract.payoff(terminal);
                    sum += payoff;
                    sum_sq += payoff * payoff;
                }
                (sum, sum_sq)
            })
            .reduce(|| (0.0, 0.0), |a, b| (a.0 + b.0, a.1 + b.1));

        let n = n_paths as f64;
        let mean = sum / n;
        // Sample variance with Bessel's correction
        let variance = if n_paths > 1 {
            ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };
        let std_error = (variance / n).sqrt();

        let discount = (-contract.rate() * t).exp();
        let price = mean * discount;
        let discounted_error = std_error * discount;
        let half_width = 1.96 * discounted_error;

        MonteCarloResult {
            valuation: Valuation::new(price, contract.intrinsic_value(), None),
            std_error: discounted_error,
            confidence_interval: (price - half_width, price + half_width),
        }
    }
}
