//! Lattice construction and drift calibration against input curves.

mod common;

use approx::assert_abs_diff_eq;
use common::flat_curve_samples;
use proptest::prelude::*;
use shortrate::curves::DiscountCurve;
use shortrate::lattice::TrinomialLattice;
use shortrate::models::BlackKarasinski;

#[test]
fn hull_style_tree_reprices_the_zero_curve() {
    // Zero rates 10/11/12/12.5/13% at years 1..5, annual compounding, with
    // a 5-step tree (dt = 1y). Small trees are built directly through the
    // lattice; the model façade enforces a higher step count.
    let zeros: [f64; 5] = [0.10, 0.11, 0.12, 0.125, 0.13];
    let mut times = vec![0.0];
    let mut dfs = vec![1.0];
    for (i, &z) in zeros.iter().enumerate() {
        let t = (i + 1) as f64;
        times.push(t);
        dfs.push((1.0 + z).powf(-t));
    }
    let curve = DiscountCurve::new(&times, &dfs).unwrap();
    let lattice = TrinomialLattice::build(0.10, 0.16, 5, 5.0, &curve).unwrap();

    assert_eq!(lattice.jmax(), 2);
    for m in 1..=5 {
        assert_abs_diff_eq!(
            lattice.state_price_sum(m),
            curve.discount(m as f64),
            epsilon = 1e-6
        );
    }
}

#[test]
fn state_prices_reproduce_an_upward_sloping_curve() {
    // Zero curve rising from 2% to 6% over 10 years
    let n = 40;
    let times: Vec<f64> = (0..=n).map(|i| 10.5 * i as f64 / n as f64).collect();
    let dfs: Vec<f64> = times
        .iter()
        .map(|&t| {
            let zero = 0.02 + 0.004 * t.min(10.0);
            (-zero * t).exp()
        })
        .collect();

    let mut model = BlackKarasinski::new(0.10, 0.20, 100).unwrap();
    model.build_tree(10.0, &times, &dfs).unwrap();
    let lattice = model.lattice().unwrap();
    let curve = DiscountCurve::new(&times, &dfs).unwrap();

    for m in 1..=101 {
        let t = lattice.times()[m];
        assert_abs_diff_eq!(lattice.state_price_sum(m), curve.discount(t), epsilon = 1e-6);
    }
}

#[test]
fn branch_probabilities_sum_to_one() {
    let (times, dfs) = flat_curve_samples(0.05, 6.0);
    let mut model = BlackKarasinski::new(0.10, 0.15, 60).unwrap();
    model.build_tree(5.0, &times, &dfs).unwrap();
    let lattice = model.lattice().unwrap();

    for j in -lattice.jmax()..=lattice.jmax() {
        let (pu, pm, pd) = lattice.probabilities(j);
        assert_abs_diff_eq!(pu + pm + pd, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn drifts_order_with_the_rate_level() {
    let (times_lo, dfs_lo) = flat_curve_samples(0.03, 6.0);
    let (times_hi, dfs_hi) = flat_curve_samples(0.06, 6.0);

    let mut lo = BlackKarasinski::new(0.10, 0.15, 100).unwrap();
    lo.build_tree(5.0, &times_lo, &dfs_lo).unwrap();
    let mut hi = BlackKarasinski::new(0.10, 0.15, 100).unwrap();
    hi.build_tree(5.0, &times_hi, &dfs_hi).unwrap();

    let lo = lo.lattice().unwrap();
    let hi = hi.lattice().unwrap();
    for m in 0..lo.drifts().len() {
        assert!(
            hi.drift(m) > lo.drift(m),
            "drift at step {m}: {} !> {}",
            hi.drift(m),
            lo.drift(m)
        );
    }
}

#[test]
fn over_refined_lattice_is_rejected() {
    let (times, dfs) = flat_curve_samples(0.05, 6.0);
    let mut model = BlackKarasinski::new(1e-5, 0.15, 100).unwrap();
    let err = model.build_tree(5.0, &times, &dfs).unwrap_err();
    assert!(matches!(
        err,
        shortrate::core::errors::Error::LatticeOverrefined { limit: 1000, .. }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn flat_curves_are_reproduced_for_random_parameters(
        rate in 0.01..0.10f64,
        sigma in 0.05..0.30f64,
        a in 0.05..0.30f64,
    ) {
        let (times, dfs) = flat_curve_samples(rate, 6.0);
        let mut model = BlackKarasinski::new(a, sigma, 50).unwrap();
        model.build_tree(5.0, &times, &dfs).unwrap();
        let lattice = model.lattice().unwrap();
        for m in 1..=51 {
            let t = lattice.times()[m];
            let df = (-rate * t).exp();
            prop_assert!(
                (lattice.state_price_sum(m) - df).abs() < 1e-6,
                "step {} off by {}",
                m,
                (lattice.state_price_sum(m) - df).abs()
            );
        }
    }
}
