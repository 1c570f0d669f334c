//! # sr-math
//!
//! Mathematical utilities for the lattice pricers: 1-D interpolation, the
//! accrued-interest interpolator, root solvers for the drift calibration, a
//! dense matrix newtype (over nalgebra), and the normal distribution
//! (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod distributions;
pub mod interpolations;
pub mod matrix;
pub mod solvers1d;

pub use interpolations::{
    accrued_interpolator, Interpolation1D, LinearInterpolation, LogLinearInterpolation,
};
pub use matrix::Matrix;
