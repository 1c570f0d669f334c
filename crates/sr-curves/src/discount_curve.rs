//! `DiscountCurve` — a discount-factor curve on pillar times.
//!
//! The curve stores `(time, discount factor)` pairs and interpolates them
//! log-linearly in time, i.e. with piecewise-constant forward rates.
//! Queries beyond the last pillar keep the final forward rate; the lattice
//! deliberately extends one step past the nominal maturity, so a curve that
//! ends exactly at that maturity must still discount the extra step.

use sr_core::{errors::Result, DiscountFactor, Time};
use sr_math::{Interpolation1D, LogLinearInterpolation};

/// A discount-factor curve sampled on an arbitrary strictly-increasing time
/// grid, queried by flat-forward interpolation.
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    times: Vec<Time>,
    dfs: Vec<DiscountFactor>,
    interp: LogLinearInterpolation,
}

impl DiscountCurve {
    /// Build a curve from pillar times and corresponding discount factors.
    ///
    /// The first pillar must be `t = 0` with a discount factor of 1, times
    /// must be strictly increasing, and all discount factors must be
    /// positive.
    ///
    /// # Errors
    /// `DegenerateInput` if any of the above fails or fewer than two
    /// pillars are given.
    pub fn new(times: &[Time], dfs: &[DiscountFactor]) -> Result<Self> {
        sr_core::ensure_data!(!times.is_empty(), "discount curve has no pillars");
        sr_core::ensure_data!(
            times.len() == dfs.len(),
            "times and discount factors must have the same length"
        );
        sr_core::ensure_data!(
            times[0].abs() < 1e-12,
            "first pillar time must be 0, got {}",
            times[0]
        );
        sr_core::ensure_data!(
            (dfs[0] - 1.0).abs() < 1e-12,
            "discount factor at t = 0 must be 1, got {}",
            dfs[0]
        );

        let interp = LogLinearInterpolation::new(times, dfs)?;
        Ok(Self {
            times: times.to_vec(),
            dfs: dfs.to_vec(),
            interp,
        })
    }

    /// Discount factor `P(0, t)`.
    ///
    /// Beyond the last pillar the final forward rate is extended.
    pub fn discount(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        self.interp.operator(t)
    }

    /// The pillar times.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// The pillar discount factors.
    pub fn dfs(&self) -> &[DiscountFactor] {
        &self.dfs
    }

    /// The last pillar time.
    pub fn max_time(&self) -> Time {
        self.times[self.times.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn flat_curve(rate: f64, max_time: f64, n: usize) -> DiscountCurve {
        let times: Vec<f64> = (0..=n).map(|i| max_time * i as f64 / n as f64).collect();
        let dfs: Vec<f64> = times.iter().map(|&t| (-rate * t).exp()).collect();
        DiscountCurve::new(&times, &dfs).unwrap()
    }

    #[test]
    fn reproduces_pillars_and_midpoints_of_flat_curve() {
        let curve = flat_curve(0.05, 10.0, 20);
        assert_abs_diff_eq!(curve.discount(0.0), 1.0, epsilon = 1e-15);
        for &t in &[0.5, 1.0, 3.3, 7.77, 10.0] {
            assert_abs_diff_eq!(curve.discount(t), (-0.05_f64 * t).exp(), epsilon = 1e-12);
        }
    }

    #[test]
    fn extends_final_forward_beyond_last_pillar() {
        let curve = flat_curve(0.05, 5.0, 10);
        assert_abs_diff_eq!(
            curve.discount(7.0),
            (-0.05_f64 * 7.0).exp(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(curve.max_time(), 5.0, epsilon = 1e-15);
    }

    #[test]
    fn rejects_degenerate_curves() {
        assert!(DiscountCurve::new(&[], &[]).is_err());
        assert!(DiscountCurve::new(&[0.0, 1.0], &[1.0]).is_err());
        // first pillar not at t = 0
        assert!(DiscountCurve::new(&[0.5, 1.0], &[1.0, 0.9]).is_err());
        // df(0) != 1
        assert!(DiscountCurve::new(&[0.0, 1.0], &[0.99, 0.9]).is_err());
        // not strictly increasing
        assert!(DiscountCurve::new(&[0.0, 1.0, 1.0], &[1.0, 0.9, 0.8]).is_err());
        // non-positive discount factor
        assert!(DiscountCurve::new(&[0.0, 1.0, 2.0], &[1.0, 0.9, 0.0]).is_err());
    }

    #[test]
    fn interpolation_is_flat_forward_between_pillars() {
        // Coarse pillars at 1y spacing: the implied forward between pillars
        // is constant, so ln P is linear in t.
        let times = [0.0, 1.0, 2.0];
        let dfs = [1.0, 0.95, 0.89];
        let curve = DiscountCurve::new(&times, &dfs).unwrap();
        let mid = curve.discount(1.5);
        let expected = (0.5 * (0.95_f64.ln() + 0.89_f64.ln())).exp();
        assert_abs_diff_eq!(mid, expected, epsilon = 1e-12);
    }
}
