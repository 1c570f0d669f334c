//! Error types for shortrate-rs.
//!
//! All fallible operations in the workspace share a single
//! `thiserror`-derived enum. The variants partition failures by the stage
//! that detects them: parameter validation, lattice construction, drift
//! calibration, and input-data checks. Errors are raised synchronously and
//! are fatal to the current call; there is no retry logic anywhere.

use thiserror::Error;

/// The top-level error type used throughout shortrate-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A model or pricing parameter is outside its admissible range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The lattice truncation width implied by the parameters is wider than
    /// the supported maximum.
    #[error("lattice over-refined: jmax = {jmax} exceeds {limit}; increase the mean reversion or use fewer time steps")]
    LatticeOverrefined {
        /// Truncation width implied by the mean reversion and time step.
        jmax: u64,
        /// Widest supported truncation.
        limit: u64,
    },

    /// The root search for a per-step drift did not converge.
    #[error("drift calibration failed: {0}")]
    CalibrationFailed(String),

    /// An input curve or schedule is empty, mismatched, or not monotone.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A pricing method was called before the lattice was built.
    #[error("lattice has not been built; call build_tree first")]
    LatticeNotBuilt,
}

/// Shorthand `Result` type used throughout shortrate-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a parameter, returning `Err(Error::InvalidParameter(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use sr_core::{ensure, errors::Error};
/// fn positive(x: f64) -> sr_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Validate input data, returning `Err(Error::DegenerateInput(...))` if
/// `$cond` is false.
///
/// # Example
/// ```
/// use sr_core::{ensure_data, errors::Error};
/// fn head(xs: &[f64]) -> sr_core::errors::Result<f64> {
///     ensure_data!(!xs.is_empty(), "need at least one element");
///     Ok(xs[0])
/// }
/// assert!(head(&[1.0]).is_ok());
/// assert!(head(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure_data {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::DegenerateInput(
                format!($($msg)*)
            ));
        }
    };
}
