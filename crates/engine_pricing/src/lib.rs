//! # Engine Pricing (L3: Numerical Engines)
//!
//! Concrete `f64` pricing engines built on the analytic layer:
//!
//! - [`rng`]: seeded Box-Muller normal generator with instance-owned state
//! - [`lattice`]: Cox-Ross-Rubinstein binomial tree with American exercise
//! - [`mc`]: parallel Monte Carlo simulation under geometric Brownian motion
//! - [`engine`]: method-dispatch facade over all engines
//!
//! ## Reproducibility
//!
//! Every stochastic component is seeded and free of global state. Monte
//! Carlo batches derive per-batch seeds from the base seed, so results
//! are identical across runs and across thread counts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engine;
pub mod lattice;
pub mod mc;
pub mod rng;

pub use engine::{greeks, price, PricingMethod};
pub use engine_models::analytical::implied_volatility;
