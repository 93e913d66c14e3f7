//! Numerical building blocks for sampled one-dimensional data.
//!
//! - [`interpolators`]: strict and extrapolating interpolation
//! - [`reliability`]: nearest-sample distance classification

pub mod interpolators;
pub mod reliability;
