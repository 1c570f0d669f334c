//! Option exercise styles.

/// When a bond option may be exercised.
///
/// American exercise is approximated on the lattice by allowing exercise
/// at every step up to and including the expiry step; a Bermudan schedule
/// tightens to the same thing as the step count grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseType {
    /// Exercise only at expiry.
    European,
    /// Exercise at any time up to expiry.
    American,
}
