//! Numerical routines shared across the engine.
//!
//! This module provides:
//! - `solvers`: Root-finding algorithms (Newton-Raphson, bisection)

pub mod solvers;
