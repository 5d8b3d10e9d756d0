//! The output of [`crate::forward_dynamics::forward_dynamics`]: generalized acceleration
//! plus, when the mechanism carries loop-closure (non-tree) joints, the Lagrange
//! multipliers enforcing them (populated only when the mechanism's non-tree joints are
//! non-empty).

use mechanism_spatial::scalar::Scalar;

#[derive(Clone, Debug, PartialEq)]
pub struct DynamicsResult<T: Scalar> {
    /// Generalized acceleration `v̇`, one entry per velocity coordinate.
    pub vdot: Vec<T>,
    /// Constraint-force multipliers enforcing loop closures, one 6-vector per non-tree
    /// joint (its relative-twist constraint), empty when the mechanism has none.
    pub lambda: Vec<T>,
}

impl<T: Scalar> DynamicsResult<T> {
    #[must_use]
    pub fn new(vdot: Vec<T>, lambda: Vec<T>) -> Self {
        Self { vdot, lambda }
    }

    #[must_use]
    pub fn unconstrained(vdot: Vec<T>) -> Self {
        Self::new(vdot, Vec::new())
    }
}
