//! 1D root-finding for the drift calibration.
//!
//! The lattice builder solves one nonlinear equation per time step. The
//! objective has a cheap analytic derivative, so Newton-Raphson is the
//! primary method; a secant search is available as a derivative-free
//! fallback for the rare step where Newton stalls.

use sr_core::{
    errors::{Error, Result},
    Real,
};

const MAX_ITERATIONS: u32 = 50;

// ── Newton-Raphson ────────────────────────────────────────────────────────────

/// Newton-Raphson iteration from a seed, using an analytic derivative.
///
/// `f_df` returns `(f(x), f'(x))`. Iterates `x ← x − f/f'` and stops when
/// `|f(x)| ≤ accuracy`.
///
/// # Errors
/// `CalibrationFailed` if the derivative vanishes or the iteration cap is
/// reached.
pub fn newton<F>(f_df: F, x0: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> (Real, Real),
{
    let mut x = x0;
    for _ in 0..MAX_ITERATIONS {
        let (fx, dfx) = f_df(x);
        if fx.abs() <= accuracy {
            return Ok(x);
        }
        if dfx == 0.0 {
            return Err(Error::CalibrationFailed(
                "Newton: derivative is zero".into(),
            ));
        }
        x -= fx / dfx;
    }
    Err(Error::CalibrationFailed(
        "Newton: maximum iterations reached".into(),
    ))
}

// ── Secant ────────────────────────────────────────────────────────────────────

/// Secant method seeded at `(x0, 1.0001·x0)`.
///
/// Derivative-free; used when the analytic-derivative search fails.
///
/// # Errors
/// `CalibrationFailed` if the difference quotient vanishes or the iteration
/// cap is reached.
pub fn secant<F>(f: F, x0: Real, accuracy: Real) -> Result<Real>
where
    F: Fn(Real) -> Real,
{
    let mut x0 = x0;
    let mut x1 = 1.0001 * x0;
    let mut f0 = f(x0);
    let mut f1 = f(x1);

    for _ in 0..MAX_ITERATIONS {
        let df = f1 - f0;
        if df == 0.0 {
            return Err(Error::CalibrationFailed(
                "secant: vanishing difference quotient".into(),
            ));
        }
        let x2 = x1 - f1 * (x1 - x0) / df;
        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f(x1);

        if f1.abs() <= accuracy {
            return Ok(x1);
        }
    }
    Err(Error::CalibrationFailed(
        "secant: maximum iterations reached".into(),
    ))
}
