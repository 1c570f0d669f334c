//! Probability distributions.
//!
//! Thin wrappers over the `statrs` implementations. Only the normal
//! distribution is needed here — it backs the Black-76 reference prices
//! used to sanity-check the lattice pricers.

pub mod normal;

pub use normal::NormalDistribution;
