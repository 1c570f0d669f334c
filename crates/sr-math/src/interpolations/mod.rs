//! 1D interpolation schemes used by the discount curve and the pricers.
//!
//! * [`LinearInterpolation`] — piecewise linear; outside the domain the
//!   boundary segment is extended.
//! * [`LogLinearInterpolation`] — linear in `ln y`. Applied to discount
//!   factors against time this is flat-forward interpolation
//!   (piecewise-constant forward rates).
//! * [`accrued_interpolator`] — the saw-tooth accrued-interest ramp over a
//!   mapped coupon schedule.

use sr_core::{errors::Result, Real};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x`.
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
///
/// Outside the domain the nearest boundary segment is extended, so a curve
/// of log discount factors keeps its last forward rate beyond the final
/// knot instead of collapsing to a zero forward.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from sorted `xs` and corresponding `ys`.
    ///
    /// # Errors
    /// Returns `DegenerateInput` if fewer than 2 points are given, the
    /// slices have different lengths, or `xs` is not strictly increasing.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        sr_core::ensure_data!(xs.len() >= 2, "need at least 2 points for interpolation");
        sr_core::ensure_data!(xs.len() == ys.len(), "xs and ys must have the same length");
        sr_core::ensure_data!(
            xs.windows(2).all(|w| w[0] < w[1]),
            "xs must be strictly increasing"
        );
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    fn locate(&self, x: Real) -> usize {
        // Binary search for the interval containing x; out-of-domain values
        // resolve to the boundary segments
        let n = self.xs.len();
        if x <= self.xs[0] {
            return 0;
        }
        if x >= self.xs[n - 1] {
            return n - 2;
        }
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        self.xs[self.xs.len() - 1]
    }

    fn operator(&self, x: Real) -> Real {
        let i = self.locate(x);
        let dx = self.xs[i + 1] - self.xs[i];
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}

// ── Log-linear ────────────────────────────────────────────────────────────────

/// Log-linear interpolation.
///
/// Interpolates `ln y` linearly and exponentiates the result. On discount
/// factors this gives piecewise-constant (flat) forward rates.
#[derive(Debug, Clone)]
pub struct LogLinearInterpolation {
    inner: LinearInterpolation,
}

impl LogLinearInterpolation {
    /// Construct a log-linear interpolation.
    ///
    /// All `ys` values must be strictly positive.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        sr_core::ensure_data!(
            ys.iter().all(|&y| y > 0.0),
            "all y values must be positive for log-linear interpolation"
        );
        let log_ys: Vec<Real> = ys.iter().map(|&y| y.ln()).collect();
        Ok(Self {
            inner: LinearInterpolation::new(xs, &log_ys)?,
        })
    }
}

impl Interpolation1D for LogLinearInterpolation {
    fn x_min(&self) -> Real {
        self.inner.x_min()
    }

    fn x_max(&self) -> Real {
        self.inner.x_max()
    }

    fn operator(&self, x: Real) -> Real {
        self.inner.operator(x).exp()
    }
}

// ── Accrued-interest interpolator ────────────────────────────────────────────

/// Accrued interest at `t` implied by a schedule of flow knots.
///
/// Between consecutive knots `(t_k, t_{k+1})` with amount `a_{k+1}` due at
/// `t_{k+1}`, the accrued is the linear ramp
/// `a_{k+1} · (t − t_k) / (t_{k+1} − t_k)`; it resets to zero immediately
/// after each knot. Exactly on a knot the full flow is returned. Outside
/// the knot range the accrued is zero.
pub fn accrued_interpolator(t: Real, knot_times: &[Real], knot_amounts: &[Real]) -> Real {
    for i in 1..knot_times.len() {
        if t > knot_times[i - 1] && t <= knot_times[i] {
            let span = knot_times[i] - knot_times[i - 1];
            return knot_amounts[i] * (t - knot_times[i - 1]) / span;
        }
    }
    0.0
}
