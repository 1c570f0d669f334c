//! # sr-curves
//!
//! The discount-factor curve consumed by the lattice builder and the
//! pricers. The curve is a validated set of `(time, discount factor)`
//! pillars queried by flat-forward interpolation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod discount_curve;

pub use discount_curve::DiscountCurve;
