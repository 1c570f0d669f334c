//! Normal (Gaussian) distribution.
//!
//! Wraps the `statrs` crate's normal implementation.

use sr_core::Real;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Normal distribution with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone)]
pub struct NormalDistribution {
    dist: Normal,
}

impl NormalDistribution {
    /// Create a normal distribution with the given mean and standard
    /// deviation.
    ///
    /// # Panics
    /// Panics if `sigma <= 0`.
    pub fn new(mu: Real, sigma: Real) -> Self {
        assert!(sigma > 0.0, "standard deviation must be positive");
        Self {
            dist: Normal::new(mu, sigma).expect("invalid normal parameters"),
        }
    }

    /// The standard normal distribution (mean 0, standard deviation 1).
    pub fn standard() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Probability density function.
    pub fn pdf(&self, x: Real) -> Real {
        self.dist.pdf(x)
    }

    /// Cumulative distribution function `P(X ≤ x)`.
    pub fn cdf(&self, x: Real) -> Real {
        self.dist.cdf(x)
    }
}
