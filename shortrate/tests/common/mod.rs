//! Shared fixtures for the integration tests.

#![allow(dead_code)]

/// Sample a flat continuously-compounded curve on a quarterly grid.
pub fn flat_curve_samples(rate: f64, max_time: f64) -> (Vec<f64>, Vec<f64>) {
    let n = (max_time * 4.0).round() as usize;
    let times: Vec<f64> = (0..=n).map(|i| max_time * i as f64 / n as f64).collect();
    let dfs: Vec<f64> = times.iter().map(|&t| (-rate * t).exp()).collect();
    (times, dfs)
}

/// A semi-annual coupon schedule: times `0.5, 1.0, …` out to maturity and
/// the per-period flow `coupon / 2`.
pub fn semiannual_schedule(maturity_years: usize, coupon: f64) -> (Vec<f64>, Vec<f64>) {
    let times: Vec<f64> = (1..=2 * maturity_years).map(|i| i as f64 * 0.5).collect();
    let flows = vec![coupon / 2.0; times.len()];
    (times, flows)
}
