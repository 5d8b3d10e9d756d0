//! Combines contact force resolution with forward dynamics into the single per-step
//! entry point a simulation driver calls: kinematics are already current on `state`,
//! each contact point's force is evaluated from them, and the resulting per-body
//! wrenches feed straight into [`forward_dynamics_with_external`] alongside `tau`.
//!
//! Collision geometry (penetration depth, contact normal) is not this crate's concern;
//! [`ContactInput`] is how a caller supplies it per contact point, already measured.

use crate::algorithms::{forward_dynamics_with_external, AlgorithmsError, DynamicsResult};
use crate::contact::kinematics::{point_kinematics, wrench_at_origin};
use crate::contact::ContactPoint;
use crate::model::DimensionMismatch;
use crate::spatial::scalar::Scalar;
use crate::spatial::{SpatialVector, Vector3};
use crate::state::MechanismState;

/// Per-contact-point kinematic input that this crate cannot derive on its own: how far
/// the point has penetrated, how fast that is changing, and the outward contact normal
/// (all in the world frame).
#[derive(Clone, Copy, Debug)]
pub struct ContactInput<T: Scalar> {
    pub penetration: T,
    pub penetration_rate: T,
    pub normal_world: Vector3<T>,
}

/// Runs one contact-aware dynamics step: for each contact point, reads its current
/// world-frame position and velocity off `state`, evaluates its force model, and
/// accumulates the resulting wrench onto its body; then solves forward dynamics with
/// those wrenches as the external input alongside `tau`.
///
/// `contacts`, `inputs`, and `states` must all have the same length, one entry per
/// contact point, in the same order. Returns the dynamics result together with each
/// contact point's updated model state, for the caller to carry into the next step.
///
/// # Errors
/// Returns [`AlgorithmsError::WrongSize`] if `inputs` or `states` does not match
/// `contacts` in length, or any error [`forward_dynamics_with_external`] can return.
pub fn dynamics<T: Scalar>(
    state: &mut MechanismState<T>,
    tau: &[T],
    contacts: &[ContactPoint<T>],
    inputs: &[ContactInput<T>],
    states: &[Vec<T>],
) -> Result<(DynamicsResult<T>, Vec<Vec<T>>), AlgorithmsError> {
    if inputs.len() != contacts.len() || states.len() != contacts.len() {
        return Err(DimensionMismatch {
            name: "contacts/inputs/states",
            expected: contacts.len(),
            got: inputs.len().min(states.len()),
        }
        .into());
    }

    let nbodies = state.mechanism().nbodies();
    let mut external = vec![SpatialVector::zero(); nbodies];
    let mut next_states = Vec::with_capacity(contacts.len());

    for ((point, input), point_state) in contacts.iter().zip(inputs).zip(states) {
        let transform_to_root = state.transform_to_root(point.body)?;
        let twist = state.twist_wrt_world(point.body)?;
        let (r_world, point_velocity) = point_kinematics(&transform_to_root, &twist, point.location);

        let normal_speed = point_velocity.dot(&input.normal_world);
        let tangential_velocity = point_velocity - input.normal_world.scale(normal_speed);

        let (normal_force, friction_force, state_rate) = point.model.force(
            input.penetration,
            input.penetration_rate,
            tangential_velocity,
            point_state,
        );

        let force_world = input.normal_world.scale(normal_force) + friction_force;
        let wrench = wrench_at_origin(r_world, force_world);
        let index = point.body.index();
        external[index] = external[index] + wrench;
        next_states.push(state_rate);
    }

    let result = forward_dynamics_with_external(state, tau, Some(&external))?;
    Ok((result, next_states))
}
