//! Black-Karasinski short-rate model.
//!
//! ```text
//! d ln(r) = (θ(t) − a·ln r) dt + σ dW
//! ```
//!
//! A lognormal short-rate model — rates stay positive by construction, and
//! there is no closed-form bond price. Pricing runs on a trinomial lattice
//! in `ln r` that is built once per discount curve and reused across
//! pricing calls.

use sr_core::{
    ensure,
    errors::{Error, Result},
    Price, Real, Time, Volatility,
};
use sr_curves::DiscountCurve;
use sr_lattice::TrinomialLattice;
use sr_pricers::{BondOptionValue, CallablePuttableValue, ExerciseType};

/// Drift fitting needs the time step bounded below; with fewer steps the
/// repricing objective turns flat and the root search degrades.
const MIN_TIME_STEPS: usize = 30;

/// Black-Karasinski model: parameters plus the lattice built for the most
/// recent curve.
#[derive(Debug, Clone)]
pub struct BlackKarasinski {
    a: Real,
    sigma: Volatility,
    num_time_steps: usize,
    tree: Option<BuiltTree>,
}

#[derive(Debug, Clone)]
struct BuiltTree {
    lattice: TrinomialLattice,
    curve: DiscountCurve,
}

impl BlackKarasinski {
    /// Create a model with mean-reversion speed `a`, log-rate volatility
    /// `sigma`, and `num_time_steps` lattice steps.
    ///
    /// # Errors
    /// `InvalidParameter` if `sigma < 0`, `a < 0`, or
    /// `num_time_steps < 30`.
    pub fn new(a: Real, sigma: Volatility, num_time_steps: usize) -> Result<Self> {
        ensure!(sigma >= 0.0, "negative volatility not allowed, got {sigma}");
        ensure!(a >= 0.0, "mean-reversion speed must be >= 0, got {a}");
        ensure!(
            num_time_steps >= MIN_TIME_STEPS,
            "drift fitting requires at least {MIN_TIME_STEPS} time steps, got {num_time_steps}"
        );
        Ok(Self {
            a,
            sigma,
            num_time_steps,
            tree: None,
        })
    }

    /// Build (or rebuild) the lattice out to one step past `tmat`,
    /// calibrated to the curve sampled by `df_times` / `df_values`.
    ///
    /// `df_times` must start at 0 with `df_values[0] = 1`. The lattice
    /// queries the curve slightly past `tmat`; beyond the last pillar the
    /// final forward rate is extended.
    pub fn build_tree(
        &mut self,
        tmat: Time,
        df_times: &[Time],
        df_values: &[Real],
    ) -> Result<()> {
        let curve = DiscountCurve::new(df_times, df_values)?;
        let lattice =
            TrinomialLattice::build(self.a, self.sigma, self.num_time_steps, tmat, &curve)?;
        self.tree = Some(BuiltTree { lattice, curve });
        Ok(())
    }

    /// Value a call and a put on a coupon bond.
    ///
    /// See [`sr_pricers::bond_option()`] for the conventions; fails with
    /// `LatticeNotBuilt` before [`build_tree`](Self::build_tree).
    pub fn bond_option(
        &self,
        texp: Time,
        strike: Price,
        face: Price,
        coupon_times: &[Time],
        coupon_flows: &[Real],
        exercise: ExerciseType,
    ) -> Result<BondOptionValue> {
        let tree = self.tree.as_ref().ok_or(Error::LatticeNotBuilt)?;
        sr_pricers::bond_option(
            &tree.lattice,
            &tree.curve,
            texp,
            strike,
            face,
            coupon_times,
            coupon_flows,
            exercise,
        )
    }

    /// Value a bond with embedded call and put schedules.
    ///
    /// See [`sr_pricers::callable_puttable_bond()`] for the conventions;
    /// fails with `LatticeNotBuilt` before
    /// [`build_tree`](Self::build_tree).
    #[allow(clippy::too_many_arguments)]
    pub fn callable_puttable_bond(
        &self,
        coupon_times: &[Time],
        coupon_flows: &[Real],
        call_times: &[Time],
        call_prices: &[Price],
        put_times: &[Time],
        put_prices: &[Price],
        face: Price,
    ) -> Result<CallablePuttableValue> {
        let tree = self.tree.as_ref().ok_or(Error::LatticeNotBuilt)?;
        sr_pricers::callable_puttable_bond(
            &tree.lattice,
            &tree.curve,
            coupon_times,
            coupon_flows,
            call_times,
            call_prices,
            put_times,
            put_prices,
            face,
        )
    }

    /// Mean-reversion speed.
    pub fn a(&self) -> Real {
        self.a
    }

    /// Log-rate volatility.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// Lattice step count.
    pub fn num_time_steps(&self) -> usize {
        self.num_time_steps
    }

    /// The built lattice, if [`build_tree`](Self::build_tree) has run.
    pub fn lattice(&self) -> Option<&TrinomialLattice> {
        self.tree.as_ref().map(|t| &t.lattice)
    }
}
