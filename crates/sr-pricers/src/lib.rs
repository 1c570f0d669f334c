//! # sr-pricers
//!
//! Backward-induction pricers on the trinomial lattice: American and
//! European options on coupon bonds, and bonds with embedded call/put
//! schedules. The underlying bond has no closed form under the model, so
//! every pricer rolls bond values back from maturity alongside the option
//! values.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bond_option;
pub mod callable_bond;
pub mod exercise;

mod flows;

pub use bond_option::{bond_option, BondOptionValue};
pub use callable_bond::{callable_puttable_bond, CallablePuttableValue};
pub use exercise::ExerciseType;
