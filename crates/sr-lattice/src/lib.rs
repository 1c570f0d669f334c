//! # sr-lattice
//!
//! The recombining trinomial lattice for the Black-Karasinski short rate:
//! node geometry, branch probabilities, Arrow-Debreu state prices, and the
//! drift sequence calibrated to an input discount curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod trinomial;

pub use trinomial::TrinomialLattice;
