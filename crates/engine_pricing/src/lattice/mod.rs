//! Binomial lattice pricing.

mod binomial;
mod error;

pub use binomial::{BinomialPricer, MAX_LATTICE_STEPS};
pub use error::LatticeError;
