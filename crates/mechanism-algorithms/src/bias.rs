//! Bias forces `c(q, v) = inverse_dynamics(q, v, v̇ = 0, external = 0)`: the joint torques
//! needed to hold the current velocity with zero acceleration, i.e. gravity plus Coriolis
//! and centrifugal terms.

use crate::errors::AlgorithmsError;
use crate::inverse_dynamics::inverse_dynamics;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::SpatialVector;
use mechanism_state::MechanismState;

/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn bias_forces<T: Scalar>(state: &mut MechanismState<T>) -> Result<Vec<T>, AlgorithmsError> {
    bias_forces_with_external(state, None)
}

/// `c(q, v)` with an optional per-body world-frame external wrench folded in, so that
/// `M(q) v̇ + c(q, v) = tau` already accounts for externally applied forces (contact
/// wrenches, e.g.) without the caller having to project them onto joint space by hand.
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn bias_forces_with_external<T: Scalar>(
    state: &mut MechanismState<T>,
    external_wrenches: Option<&[SpatialVector<T>]>,
) -> Result<Vec<T>, AlgorithmsError> {
    let nv = state.velocity().len();
    inverse_dynamics(state, &vec![T::zero(); nv], external_wrenches)
}
