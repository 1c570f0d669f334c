//! Recombining trinomial lattice in `x = ln r`, calibrated to a discount
//! curve.
//!
//! Construction follows the two-stage procedure of Hull & White (1994): a
//! geometry/probability stage driven by the mean reversion alone, then a
//! forward-induction stage that fits a per-step drift `α[m]` so the lattice
//! reprices every input discount factor. Branching is plain trinomial in
//! the interior; at the truncation boundary `±jmax` the branches bend
//! inward so the lattice keeps a finite width.

use sr_core::{
    ensure,
    errors::{Error, Result},
    Real, Time, Volatility,
};
use sr_curves::DiscountCurve;
use sr_math::{solvers1d, Matrix};

/// Truncation coefficient from Hull & White: inward branching starts at
/// `jmax = ⌈0.1835 / (a·dt)⌉`.
const JMAX_COEFFICIENT: Real = 0.1835;

/// Widest supported truncation. Beyond this the time step is too small
/// relative to the mean reversion.
const MAX_JMAX: u64 = 1000;

/// Tolerance on the repricing objective for each drift.
const DRIFT_ACCURACY: Real = 1.0e-7;

/// Tolerance for the derivative-free fallback search.
const FALLBACK_ACCURACY: Real = 1.0e-8;

/// Drift seed of last resort, used when the first discount factor implies
/// no usable short-rate level.
const DEFAULT_DRIFT_SEED: Real = 3.0;

/// Admissible range for branch probabilities. Values outside indicate a
/// time step incompatible with the mean reversion.
const PROBABILITY_MIN: Real = -0.1;
const PROBABILITY_MAX: Real = 1.1;

/// A calibrated trinomial lattice for a lognormal short rate.
///
/// Node `(m, j)` carries log-rate `x = α[m] + j·dX` and short rate
/// `r = exp(x)`. The lattice owns its tensors; pricers read them through
/// the accessors below and allocate their own value grids, so concurrent
/// pricing calls against one built lattice are safe.
#[derive(Debug, Clone)]
pub struct TrinomialLattice {
    a: Real,
    sigma: Volatility,
    num_time_steps: usize,
    jmax: i64,
    dt: Time,
    dx: Real,
    times: Vec<Time>,
    alpha: Vec<Real>,
    pu: Vec<Real>,
    pm: Vec<Real>,
    pd: Vec<Real>,
    q: Matrix,
    rt: Matrix,
}

impl TrinomialLattice {
    /// Build a lattice of `num_time_steps` steps out to one step past
    /// `tmat`, calibrated to `curve`.
    ///
    /// The grid has `num_time_steps + 2` times ending at
    /// `tmat·(N+1)/N`, so the spacing is `dt = tmat/N` and the last node
    /// layer sits one step beyond the nominal maturity. The curve is
    /// queried at every grid time; past its last pillar the final forward
    /// rate is extended.
    ///
    /// # Errors
    /// * `LatticeOverrefined` — `jmax` would exceed 1000.
    /// * `InvalidParameter` — non-positive maturity, zero steps, or branch
    ///   probabilities outside the admissible range.
    /// * `CalibrationFailed` — a per-step drift could not be solved for.
    pub fn build(
        a: Real,
        sigma: Volatility,
        num_time_steps: usize,
        tmat: Time,
        curve: &DiscountCurve,
    ) -> Result<Self> {
        ensure!(num_time_steps >= 1, "need at least one time step");
        ensure!(tmat > 0.0, "maturity must be positive, got {tmat}");

        let n = num_time_steps;
        let num_times = n + 2;
        let tree_maturity = tmat * (n as Real + 1.0) / n as Real;
        let dt = tree_maturity / (n as Real + 1.0);
        let times: Vec<Time> = (0..num_times).map(|i| i as Real * dt).collect();
        let dx = sigma * (3.0 * dt).sqrt();

        let width = (JMAX_COEFFICIENT / (a * dt)).ceil();
        if !width.is_finite() || width > MAX_JMAX as Real {
            return Err(Error::LatticeOverrefined {
                jmax: width as u64, // saturates for a = 0
                limit: MAX_JMAX,
            });
        }
        let jmax = width as i64;
        let num_nodes = (2 * jmax + 1) as usize;

        // Branch probabilities depend on j only. The top and bottom layers
        // use the inward-bending variants so that probability mass cannot
        // leave the truncated lattice.
        let mut pu = vec![0.0; num_nodes];
        let mut pm = vec![0.0; num_nodes];
        let mut pd = vec![0.0; num_nodes];
        for j in -jmax..=jmax {
            let ajdt = a * j as Real * dt;
            let k = (j + jmax) as usize;
            if j == jmax {
                pu[k] = 7.0 / 6.0 + 0.5 * (ajdt * ajdt - 3.0 * ajdt);
                pm[k] = -1.0 / 3.0 - ajdt * ajdt + 2.0 * ajdt;
                pd[k] = 1.0 / 6.0 + 0.5 * (ajdt * ajdt - ajdt);
            } else if j == -jmax {
                pu[k] = 1.0 / 6.0 + 0.5 * (ajdt * ajdt + ajdt);
                pm[k] = -1.0 / 3.0 - ajdt * ajdt - 2.0 * ajdt;
                pd[k] = 7.0 / 6.0 + 0.5 * (ajdt * ajdt + 3.0 * ajdt);
            } else {
                pu[k] = 1.0 / 6.0 + 0.5 * (ajdt * ajdt - ajdt);
                pm[k] = 2.0 / 3.0 - ajdt * ajdt;
                pd[k] = 1.0 / 6.0 + 0.5 * (ajdt * ajdt + ajdt);
            }
        }
        for k in 0..num_nodes {
            let in_range = |p: Real| (PROBABILITY_MIN..=PROBABILITY_MAX).contains(&p);
            ensure!(
                in_range(pu[k]) && in_range(pm[k]) && in_range(pd[k]),
                "branch probabilities out of range at j = {}; adjust the step count",
                k as i64 - jmax
            );
        }

        let mut df_tree = vec![1.0; num_times];
        for i in 1..num_times {
            df_tree[i] = curve.discount(times[i]);
        }

        let mut q = Matrix::zeros(num_times, num_nodes);
        let mut rt = Matrix::zeros(num_times, num_nodes);
        let mut alpha = vec![0.0; n + 1];
        q[(0, jmax as usize)] = 1.0;

        // Seed the first search with the exact one-node solution
        // exp(α)·dt = −ln P(dt); later steps reuse the previous drift,
        // which keeps Newton to a handful of iterations per step.
        let implied = -df_tree[1].ln() / dt;
        let mut seed = if implied > 0.0 {
            implied.ln()
        } else {
            DEFAULT_DRIFT_SEED
        };

        for m in 0..=n {
            let nm = (m as i64).min(jmax);
            let target = df_tree[m + 1];

            let objective_with_derivative = |x: Real| {
                let mut sum = 0.0;
                let mut dsum = 0.0;
                for j in -nm..=nm {
                    let k = (j + jmax) as usize;
                    let r = (x + j as Real * dx).exp();
                    let z = q[(m, k)] * (-r * dt).exp();
                    sum += z;
                    dsum -= z * r * dt;
                }
                (sum - target, dsum)
            };
            let objective = |x: Real| objective_with_derivative(x).0;

            alpha[m] = match solvers1d::newton(&objective_with_derivative, seed, DRIFT_ACCURACY) {
                Ok(root) => root,
                Err(_) => solvers1d::secant(objective, seed, FALLBACK_ACCURACY)?,
            };
            seed = alpha[m];

            for j in -nm..=nm {
                let k = (j + jmax) as usize;
                rt[(m, k)] = (alpha[m] + j as Real * dx).exp();
            }

            // Forward-propagate the state prices into row m+1
            for j in -nm..=nm {
                let k = (j + jmax) as usize;
                let z = q[(m, k)] * (-rt[(m, k)] * dt).exp();
                if j == jmax {
                    q[(m + 1, k)] += z * pu[k];
                    q[(m + 1, k - 1)] += z * pm[k];
                    q[(m + 1, k - 2)] += z * pd[k];
                } else if j == -jmax {
                    q[(m + 1, k + 2)] += z * pu[k];
                    q[(m + 1, k + 1)] += z * pm[k];
                    q[(m + 1, k)] += z * pd[k];
                } else {
                    q[(m + 1, k + 1)] += z * pu[k];
                    q[(m + 1, k)] += z * pm[k];
                    q[(m + 1, k - 1)] += z * pd[k];
                }
            }
        }

        Ok(Self {
            a,
            sigma,
            num_time_steps: n,
            jmax,
            dt,
            dx,
            times,
            alpha,
            pu,
            pm,
            pd,
            q,
            rt,
        })
    }

    // ── Geometry ─────────────────────────────────────────────────────────

    /// Mean-reversion speed.
    pub fn mean_reversion(&self) -> Real {
        self.a
    }

    /// Volatility of the log-rate.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// Nominal step count `N` (the grid has `N + 2` times).
    pub fn num_time_steps(&self) -> usize {
        self.num_time_steps
    }

    /// Number of grid times.
    pub fn num_times(&self) -> usize {
        self.times.len()
    }

    /// Truncation half-width.
    pub fn jmax(&self) -> i64 {
        self.jmax
    }

    /// Time step.
    pub fn dt(&self) -> Time {
        self.dt
    }

    /// Log-rate node spacing `σ·√(3·dt)`.
    pub fn dx(&self) -> Real {
        self.dx
    }

    /// Grid times.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Half-width of the live node range at step `m`: `min(m, jmax)`.
    pub fn live_width(&self, m: usize) -> i64 {
        (m as i64).min(self.jmax)
    }

    /// Physical column index of vertical index `j`.
    pub fn column(&self, j: i64) -> usize {
        (j + self.jmax) as usize
    }

    /// Nearest grid step to time `t`.
    pub fn step_index(&self, t: Time) -> usize {
        (t / self.dt).round() as usize
    }

    // ── Calibrated state ─────────────────────────────────────────────────

    /// Calibrated drift `α[m]`.
    pub fn drift(&self, m: usize) -> Real {
        self.alpha[m]
    }

    /// The full drift sequence `α[0..=N]`.
    pub fn drifts(&self) -> &[Real] {
        &self.alpha
    }

    /// Short rate at node `(m, j)`.
    pub fn short_rate(&self, m: usize, j: i64) -> Real {
        self.rt[(m, self.column(j))]
    }

    /// Arrow-Debreu state price at node `(m, j)`.
    pub fn state_price(&self, m: usize, j: i64) -> Real {
        self.q[(m, self.column(j))]
    }

    /// `Σⱼ Q[m, j]` — the lattice-implied discount factor for `times[m]`.
    pub fn state_price_sum(&self, m: usize) -> Real {
        self.q.row(m).iter().sum()
    }

    /// Branch probabilities `(pu, pm, pd)` at vertical index `j`.
    pub fn probabilities(&self, j: i64) -> (Real, Real, Real) {
        let k = self.column(j);
        (self.pu[k], self.pm[k], self.pd[k])
    }

    // ── Rollback primitive ───────────────────────────────────────────────

    /// Discounted trinomial expectation at node `(m, j)` of the values in
    /// row `m + 1` of `grid`.
    ///
    /// Interior nodes branch to `(j+1, j, j−1)`. At the truncation
    /// boundary the branches bend inward: the top layer connects to
    /// `(j, j−1, j−2)` and the bottom layer to `(j+2, j+1, j)`.
    pub fn discounted_expectation(&self, m: usize, j: i64, grid: &Matrix) -> Real {
        let k = self.column(j);
        let (ku, km, kd) = if j == self.jmax {
            (k, k - 1, k - 2)
        } else if j == -self.jmax {
            (k + 2, k + 1, k)
        } else {
            (k + 1, k, k - 1)
        };
        let expected = self.pu[k] * grid[(m + 1, ku)]
            + self.pm[k] * grid[(m + 1, km)]
            + self.pd[k] * grid[(m + 1, kd)];
        expected * (-self.rt[(m, k)] * self.dt).exp()
    }
}
