//! American and European options on coupon bonds.
//!
//! The bond price has no closed form under a lognormal short rate, so the
//! lattice extends to the bond maturity: bond values are rolled back from
//! maturity to the option expiry, the payoff is taken there on the clean
//! price, and option values are rolled back to today with early exercise
//! applied at every step for American options.

use sr_core::{ensure, errors::Result, Price, Real, Time};
use sr_curves::DiscountCurve;
use sr_lattice::TrinomialLattice;
use sr_math::Matrix;

use crate::exercise::ExerciseType;
use crate::flows;

/// Fair values of a call and a put on the same bond, in the units of
/// `face`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondOptionValue {
    /// Value of the call option.
    pub call: Price,
    /// Value of the put option.
    pub put: Price,
}

/// Value a call and a put on a coupon bond by backward induction.
///
/// `coupon_times` are years from valuation, `coupon_flows` are fractions
/// of face (e.g. 0.025 for a 5% semi-annual coupon); the principal is
/// implicit at the last coupon time. The strike applies to the clean
/// price.
///
/// # Errors
/// * `DegenerateInput` — empty, mismatched, or non-increasing coupon
///   schedule.
/// * `InvalidParameter` — negative expiry, expiry after bond maturity, or
///   a bond that does not fit on the lattice.
#[allow(clippy::too_many_arguments)]
pub fn bond_option(
    lattice: &TrinomialLattice,
    curve: &DiscountCurve,
    texp: Time,
    strike: Price,
    face: Price,
    coupon_times: &[Time],
    coupon_flows: &[Real],
    exercise: ExerciseType,
) -> Result<BondOptionValue> {
    let tmat = flows::validate_schedule(coupon_times, coupon_flows)?;
    ensure!(texp >= 0.0, "option expiry time is negative, got {texp}");
    ensure!(
        texp <= tmat,
        "option expiry {texp} falls after the bond matures at {tmat}"
    );

    let expiry_step = lattice.step_index(texp);
    let maturity_step = lattice.step_index(tmat);
    flows::ensure_on_lattice(lattice, maturity_step, "bond maturity")?;

    let flows = flows::tree_flows(lattice, curve, coupon_times, coupon_flows);
    let accrued = flows::accrued_schedule(lattice, &flows, face, maturity_step);

    let num_nodes = (2 * lattice.jmax() + 1) as usize;
    let mut bond_values = Matrix::zeros(lattice.num_times(), num_nodes);
    let mut call_values = Matrix::zeros(lattice.num_times(), num_nodes);
    let mut put_values = Matrix::zeros(lattice.num_times(), num_nodes);

    // Principal plus any coupon mapped onto the maturity step
    let redemption = (1.0 + flows[maturity_step]) * face;
    let nm = lattice.live_width(maturity_step);
    for j in -nm..=nm {
        bond_values[(maturity_step, lattice.column(j))] = redemption;
    }

    // Roll the bond back to the option expiry
    for m in (expiry_step..maturity_step).rev() {
        let flow = flows[m] * face;
        let nm = lattice.live_width(m);
        for j in -nm..=nm {
            let rolled = lattice.discounted_expectation(m, j, &bond_values);
            bond_values[(m, lattice.column(j))] = rolled + flow;
        }
    }

    // Exercise into the clean price at expiry
    let nm = lattice.live_width(expiry_step);
    for j in -nm..=nm {
        let k = lattice.column(j);
        let clean = bond_values[(expiry_step, k)] - accrued[expiry_step];
        call_values[(expiry_step, k)] = (clean - strike).max(0.0);
        put_values[(expiry_step, k)] = (strike - clean).max(0.0);
    }

    // Roll back to today; American options compare holding against
    // exercising on the clean price at every step
    for m in (0..expiry_step).rev() {
        let flow = flows[m] * face;
        let nm = lattice.live_width(m);
        for j in -nm..=nm {
            let k = lattice.column(j);

            let rolled = lattice.discounted_expectation(m, j, &bond_values);
            bond_values[(m, k)] = rolled + flow;

            let call_hold = lattice.discounted_expectation(m, j, &call_values);
            let put_hold = lattice.discounted_expectation(m, j, &put_values);

            if exercise == ExerciseType::American {
                let clean = bond_values[(m, k)] - accrued[m];
                call_values[(m, k)] = call_hold.max((clean - strike).max(0.0));
                put_values[(m, k)] = put_hold.max((strike - clean).max(0.0));
            } else {
                call_values[(m, k)] = call_hold;
                put_values[(m, k)] = put_hold;
            }
        }
    }

    let root = lattice.column(0);
    Ok(BondOptionValue {
        call: call_values[(0, root)],
        put: put_values[(0, root)],
    })
}
