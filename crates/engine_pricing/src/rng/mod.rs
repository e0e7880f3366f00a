//! Random number generation for Monte Carlo simulation.

mod normal;

pub use normal::NormalRng;
