//! Bonds with embedded call and put schedules.
//!
//! At every step the holder value is floored by any scheduled put price
//! and capped by any scheduled call price, both applied to the clean
//! value; accrued interest is added back afterwards. A pure-bond leg is
//! rolled alongside so the caller gets the option-adjusted and straight
//! values from one pass.

use sr_core::{ensure_data, errors::Result, Price, Real, Time};
use sr_curves::DiscountCurve;
use sr_lattice::TrinomialLattice;
use sr_math::Matrix;

use crate::flows;

/// Sentinel multiple of face marking steps with no scheduled call.
const CALL_UNSET_MULTIPLE: Real = 1000.0;

/// Option-adjusted and straight values of a bond, in the units of `face`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CallablePuttableValue {
    /// Value of the bond including the embedded call and put rights.
    pub bond_with_option: Price,
    /// Value of the equivalent option-free bond.
    pub bond_pure: Price,
}

/// Value a bond with embedded issuer calls and holder puts by backward
/// induction.
///
/// Call and put prices are clean prices in the units of `face` (100 =
/// par). Either schedule may be empty. Where both land on the same step
/// the put floors the clean value first and the call then caps it.
///
/// # Errors
/// * `DegenerateInput` — bad coupon schedule, or call/put times and prices
///   of different lengths.
/// * `InvalidParameter` — a schedule date beyond the lattice.
#[allow(clippy::too_many_arguments)]
pub fn callable_puttable_bond(
    lattice: &TrinomialLattice,
    curve: &DiscountCurve,
    coupon_times: &[Time],
    coupon_flows: &[Real],
    call_times: &[Time],
    call_prices: &[Price],
    put_times: &[Time],
    put_prices: &[Price],
    face: Price,
) -> Result<CallablePuttableValue> {
    let tmat = flows::validate_schedule(coupon_times, coupon_flows)?;
    ensure_data!(
        call_times.len() == call_prices.len(),
        "call times and prices must have the same length"
    );
    ensure_data!(
        put_times.len() == put_prices.len(),
        "put times and prices must have the same length"
    );

    let maturity_step = lattice.step_index(tmat);
    flows::ensure_on_lattice(lattice, maturity_step, "bond maturity")?;

    let flows = flows::tree_flows(lattice, curve, coupon_times, coupon_flows);
    let accrued = flows::accrued_schedule(lattice, &flows, face, maturity_step);

    // Map the exercise schedules onto steps; off-schedule steps carry
    // sentinels that make the clamp a no-op.
    let mut call_schedule = vec![face * CALL_UNSET_MULTIPLE; lattice.num_times()];
    for (&t, &price) in call_times.iter().zip(call_prices) {
        let n = lattice.step_index(t);
        flows::ensure_on_lattice(lattice, n, "call date")?;
        call_schedule[n] = price;
    }
    let mut put_schedule = vec![0.0; lattice.num_times()];
    for (&t, &price) in put_times.iter().zip(put_prices) {
        let n = lattice.step_index(t);
        flows::ensure_on_lattice(lattice, n, "put date")?;
        put_schedule[n] = price;
    }

    let num_nodes = (2 * lattice.jmax() + 1) as usize;
    let mut bond_values = Matrix::zeros(lattice.num_times(), num_nodes);
    let mut constrained_values = Matrix::zeros(lattice.num_times(), num_nodes);

    // Redemption at maturity, clamped by any final call or put
    let redemption = (1.0 + flows[maturity_step]) * face;
    let clean = redemption - accrued[maturity_step];
    let constrained = clean
        .max(put_schedule[maturity_step])
        .min(call_schedule[maturity_step])
        + accrued[maturity_step];
    let nm = lattice.live_width(maturity_step);
    for j in -nm..=nm {
        let k = lattice.column(j);
        bond_values[(maturity_step, k)] = redemption;
        constrained_values[(maturity_step, k)] = constrained;
    }

    for m in (0..maturity_step).rev() {
        let flow = flows[m] * face;
        let nm = lattice.live_width(m);
        for j in -nm..=nm {
            let k = lattice.column(j);

            let rolled = lattice.discounted_expectation(m, j, &bond_values);
            bond_values[(m, k)] = rolled + flow;

            // The coupon at this step accrues to the holder whether the
            // bond is called, put, or held, so it is added before the
            // clamp on the clean value.
            let hold = lattice.discounted_expectation(m, j, &constrained_values) + flow;
            let clean = hold - accrued[m];
            constrained_values[(m, k)] =
                clean.max(put_schedule[m]).min(call_schedule[m]) + accrued[m];
        }
    }

    let root = lattice.column(0);
    Ok(CallablePuttableValue {
        bond_with_option: constrained_values[(0, root)],
        bond_pure: bond_values[(0, root)],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn flat_curve(rate: f64, max_time: f64) -> DiscountCurve {
        let n = 60;
        let times: Vec<f64> = (0..=n).map(|i| max_time * i as f64 / n as f64).collect();
        let dfs: Vec<f64> = times.iter().map(|&t| (-rate * t).exp()).collect();
        DiscountCurve::new(&times, &dfs).unwrap()
    }

    fn semiannual_bond(maturity_years: usize, coupon: f64) -> (Vec<f64>, Vec<f64>) {
        let times: Vec<f64> = (1..=2 * maturity_years).map(|i| i as f64 * 0.5).collect();
        let flows = vec![coupon / 2.0; times.len()];
        (times, flows)
    }

    #[test]
    fn zero_coupon_bond_reprices_the_discount_factor() {
        let curve = flat_curve(0.04, 6.0);
        let lattice = TrinomialLattice::build(0.10, 0.15, 100, 5.0, &curve).unwrap();

        let v = callable_puttable_bond(
            &lattice,
            &curve,
            &[5.0],
            &[0.0],
            &[],
            &[],
            &[],
            &[],
            1.0,
        )
        .unwrap();

        assert_abs_diff_eq!(v.bond_pure, curve.discount(5.0), epsilon = 1e-4);
        assert_abs_diff_eq!(v.bond_with_option, v.bond_pure, epsilon = 1e-10);
    }

    #[test]
    fn empty_schedules_leave_the_bond_unchanged() {
        let curve = flat_curve(0.05, 11.0);
        let lattice = TrinomialLattice::build(0.10, 0.15, 100, 10.0, &curve).unwrap();
        let (times, cflows) = semiannual_bond(10, 0.05);

        let v = callable_puttable_bond(
            &lattice, &curve, &times, &cflows, &[], &[], &[], &[], 100.0,
        )
        .unwrap();

        assert_abs_diff_eq!(v.bond_with_option, v.bond_pure, epsilon = 1e-10);
        // Flat 5% curve, 5% coupon: the straight bond sits near par
        let pv: f64 = times.iter().map(|&t| 2.5 * curve.discount(t)).sum::<f64>()
            + 100.0 * curve.discount(10.0);
        assert_abs_diff_eq!(v.bond_pure, pv, epsilon = 0.05);
    }

    #[test]
    fn calls_cap_and_puts_floor_the_value() {
        let curve = flat_curve(0.05, 11.0);
        let lattice = TrinomialLattice::build(0.10, 0.15, 200, 10.0, &curve).unwrap();
        let (times, cflows) = semiannual_bond(10, 0.05);

        let straight = callable_puttable_bond(
            &lattice, &curve, &times, &cflows, &[], &[], &[], &[], 100.0,
        )
        .unwrap();
        let callable = callable_puttable_bond(
            &lattice,
            &curve,
            &times,
            &cflows,
            &[5.0],
            &[102.0],
            &[],
            &[],
            100.0,
        )
        .unwrap();
        let puttable = callable_puttable_bond(
            &lattice,
            &curve,
            &times,
            &cflows,
            &[],
            &[],
            &[5.0],
            &[98.0],
            100.0,
        )
        .unwrap();

        assert!(callable.bond_with_option <= straight.bond_pure + 1e-9);
        assert!(puttable.bond_with_option >= straight.bond_pure - 1e-9);
        // The pure leg is identical in all three runs
        assert_abs_diff_eq!(callable.bond_pure, straight.bond_pure, epsilon = 1e-10);
        assert_abs_diff_eq!(puttable.bond_pure, straight.bond_pure, epsilon = 1e-10);
    }

    #[test]
    fn rejects_mismatched_schedules() {
        let curve = flat_curve(0.05, 6.0);
        let lattice = TrinomialLattice::build(0.10, 0.15, 50, 5.0, &curve).unwrap();
        let (times, cflows) = semiannual_bond(5, 0.05);

        let err = callable_puttable_bond(
            &lattice,
            &curve,
            &times,
            &cflows,
            &[2.0],
            &[],
            &[],
            &[],
            100.0,
        )
        .unwrap_err();
        assert!(matches!(err, sr_core::errors::Error::DegenerateInput(_)));
    }
}
