//! Mapping of coupon schedules onto lattice steps.
//!
//! Coupon dates rarely coincide with grid times, so each flow is moved to
//! its nearest step and rescaled by `DF(t_cpn)/DF(t_step)`. The rescaling
//! makes the mapped schedule worth exactly as much as the original under
//! the input curve, which keeps pricing stable as the step count changes.

use sr_core::{ensure, ensure_data, errors::Result, Price, Real, Time};
use sr_curves::DiscountCurve;
use sr_lattice::TrinomialLattice;
use sr_math::accrued_interpolator;

/// Validate a coupon schedule and return the bond maturity (the last
/// coupon time).
pub(crate) fn validate_schedule(coupon_times: &[Time], coupon_flows: &[Real]) -> Result<Time> {
    ensure_data!(!coupon_times.is_empty(), "coupon schedule is empty");
    ensure_data!(
        coupon_times.len() == coupon_flows.len(),
        "coupon times and flows must have the same length"
    );
    ensure_data!(
        coupon_times.windows(2).all(|w| w[0] < w[1]),
        "coupon times must be strictly increasing"
    );
    Ok(coupon_times[coupon_times.len() - 1])
}

/// Check that a step derived from an instrument date lies on the lattice.
pub(crate) fn ensure_on_lattice(lattice: &TrinomialLattice, step: usize, what: &str) -> Result<()> {
    ensure!(
        step < lattice.num_times(),
        "{what} lies beyond the lattice; rebuild the tree out to the bond maturity"
    );
    Ok(())
}

/// Spread each coupon onto its nearest lattice step, preserving present
/// value under `curve`.
pub(crate) fn tree_flows(
    lattice: &TrinomialLattice,
    curve: &DiscountCurve,
    coupon_times: &[Time],
    coupon_flows: &[Real],
) -> Vec<Real> {
    let mut flows = vec![0.0; lattice.num_times()];
    for (&tcpn, &flow) in coupon_times.iter().zip(coupon_flows) {
        let n = lattice.step_index(tcpn);
        let t_tree = lattice.times()[n];
        let df_flow = curve.discount(tcpn);
        let df_tree = curve.discount(t_tree);
        flows[n] += flow * df_flow / df_tree;
    }
    flows
}

/// Accrued interest per step implied by the mapped flows.
///
/// The knots are the flow-bearing steps; between knots the accrued is a
/// linear ramp, and on a flow step it is the full mapped flow (the
/// interpolator already lands there, but the override also covers flows
/// merged onto one step).
pub(crate) fn accrued_schedule(
    lattice: &TrinomialLattice,
    flows: &[Real],
    face: Price,
    last_step: usize,
) -> Vec<Real> {
    let mut knot_times = vec![0.0];
    let mut knot_amounts = vec![0.0];
    for n in 1..lattice.num_times() {
        if flows[n] > 0.0 {
            knot_times.push(lattice.times()[n]);
            knot_amounts.push(flows[n]);
        }
    }

    let mut accrued = vec![0.0; lattice.num_times()];
    for m in 0..=last_step {
        accrued[m] = accrued_interpolator(lattice.times()[m], &knot_times, &knot_amounts) * face;
        if flows[m] > 0.0 {
            accrued[m] = flows[m] * face;
        }
    }
    accrued
}
