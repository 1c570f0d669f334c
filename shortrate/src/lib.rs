//! # shortrate
//!
//! Trinomial-lattice pricing of American/Bermudan bond options and
//! callable/puttable bonds under the Black-Karasinski one-factor
//! short-rate model `d ln r = (θ(t) − a·ln r) dt + σ dW`.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the
//! individual `sr-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use shortrate::models::BlackKarasinski;
//! use shortrate::pricers::ExerciseType;
//!
//! // A flat 5% curve sampled every quarter out to 11 years
//! let df_times: Vec<f64> = (0..=44).map(|i| i as f64 * 0.25).collect();
//! let df_values: Vec<f64> = df_times.iter().map(|&t| (-0.05 * t).exp()).collect();
//!
//! // 10y 5% semi-annual bond
//! let coupon_times: Vec<f64> = (1..=20).map(|i| i as f64 * 0.5).collect();
//! let coupon_flows = vec![0.025; 20];
//!
//! let mut model = BlackKarasinski::new(0.10, 0.20, 100).unwrap();
//! model.build_tree(10.0, &df_times, &df_values).unwrap();
//!
//! let value = model
//!     .bond_option(1.5, 105.0, 100.0, &coupon_times, &coupon_flows,
//!                  ExerciseType::American)
//!     .unwrap();
//! assert!(value.call > 0.0 && value.put > 0.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use sr_core as core;

/// Mathematical utilities: interpolation, solvers, matrix, distributions.
pub use sr_math as math;

/// Discount-factor curves.
pub use sr_curves as curves;

/// The calibrated trinomial lattice.
pub use sr_lattice as lattice;

/// Backward-induction pricers.
pub use sr_pricers as pricers;

/// Model façades.
pub use sr_models as models;
