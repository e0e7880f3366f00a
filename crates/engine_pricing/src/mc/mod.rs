//! Monte Carlo pricing under geometric Brownian motion.
//!
//! The simulator draws terminal prices directly (one normal variate per
//! path), discounts payoffs, and reports the estimate with its standard
//! error and a 95% confidence interval. Paths are split into fixed-size
//! batches priced in parallel, each batch owning an independently seeded
//! generator so results are reproducible regardless of thread scheduling.

mod config;
mod error;
mod pricer;
mod result;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use error::ConfigError;
pub use pricer::MonteCarloPricer;
pub use result::MonteCarloResult;
