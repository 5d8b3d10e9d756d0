//! Recursive Newton-Euler inverse dynamics: a two-pass forward/backward recursion over
//! bodies, with gravity folded in as a fictitious root acceleration.
//!
//! Kinematics are read through [`MechanismState`]'s lazy world-frame cache rather than
//! recomputed from scratch each call, since every quantity RNEA needs
//! (`transform_to_root`, `twist_wrt_world`, `bias_acceleration`, `inertia_in_world`) is
//! already expressed in one common frame (world). That makes the backward pass's wrench
//! accumulation plain vector addition: a net wrench at a body adds directly into its
//! parent's, with no per-joint reprojection in between. An optional per-body external
//! wrench, expressed in the world frame, is subtracted from each body's net wrench before
//! it is projected onto the joint's motion subspace and propagated to the parent.

use crate::errors::AlgorithmsError;
use crate::spatial_ops::apply_inertia;
use mechanism_joint::JointModel;
use mechanism_model::{BodyId, Joint};
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{GeometricJacobian, SpatialVector, Vector3};
use mechanism_state::MechanismState;

/// Joint torques `tau` consistent with configuration `q`, velocity `v` (both already held
/// by `state`), requested joint accelerations `vdot`, and an optional per-body external
/// wrench (world-frame `SpatialVector`, indexed by body index, additive at that body).
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale, or
/// [`AlgorithmsError::WrongSize`] if `vdot` does not match the velocity width.
pub fn inverse_dynamics<T: Scalar>(
    state: &mut MechanismState<T>,
    vdot: &[T],
    external_wrenches: Option<&[SpatialVector<T>]>,
) -> Result<Vec<T>, AlgorithmsError> {
    state.check_fresh()?;
    let v_width = state.velocity().len();
    if vdot.len() != v_width {
        return Err(mechanism_model::DimensionMismatch {
            name: "vdot",
            expected: v_width,
            got: vdot.len(),
        }
        .into());
    }
    let nbodies = state.mechanism().nbodies();
    let gravity = state.mechanism().gravity();
    let gravity_accel = SpatialVector::from_parts(Vector3::zeros(), -gravity);

    let q_layout = state.q_layout().clone();
    let v_layout = state.v_layout().clone();
    let q: Vec<T> = state.configuration().to_vec();
    // Clone out the per-body parent joint before taking further `&mut state` borrows for
    // the cached kinematics below.
    let joints: Vec<Option<Joint<T>>> = (0..nbodies)
        .map(|i| state.mechanism().parent_joint(BodyId::new(i as u32)).cloned())
        .collect();

    let mut accel = vec![SpatialVector::zero(); nbodies];
    let mut subspace_world: Vec<Option<GeometricJacobian<T>>> = vec![None; nbodies];

    for body_index in 1..nbodies {
        let Some(joint) = &joints[body_index] else {
            continue;
        };
        let index = joint.id.index();
        let q_joint = &q[q_layout.range(index)];
        let vdot_joint = &vdot[v_layout.range(index)];
        let subspace = joint.variant.motion_subspace(q_joint);
        let joint_accel_local = subspace.mul_vector(vdot_joint);
        let transform_to_root = state.transform_to_root_cached(BodyId::new(body_index as u32));
        let bias = state.bias_acceleration_cached(BodyId::new(body_index as u32));
        accel[body_index] =
            bias.vector() + transform_to_root.act_motion(&joint_accel_local) + gravity_accel;
        let mut world_columns = GeometricJacobian::zero(subspace.ncols());
        for col in 0..subspace.ncols() {
            world_columns.update_column(col, transform_to_root.act_motion(&subspace.column(col)));
        }
        subspace_world[body_index] = Some(world_columns);
    }

    let mut net_wrench = vec![SpatialVector::zero(); nbodies];
    for body_index in 0..nbodies {
        let Some(inertia) = state.inertia_in_world_cached(BodyId::new(body_index as u32)) else {
            continue;
        };
        let twist = state.twist_wrt_world_cached(BodyId::new(body_index as u32)).vector();
        let momentum = apply_inertia(&inertia, twist);
        let mut wrench = apply_inertia(&inertia, accel[body_index]) + twist.cross_star(&momentum);
        if let Some(externals) = external_wrenches {
            wrench = wrench - externals[body_index];
        }
        net_wrench[body_index] = wrench;
    }

    let mut tau = vec![T::zero(); v_width];
    for body_index in (1..nbodies).rev() {
        let Some(joint) = &joints[body_index] else {
            continue;
        };
        let index = joint.id.index();
        let Some(subspace) = &subspace_world[body_index] else {
            continue;
        };
        let wrench = net_wrench[body_index];
        let range = v_layout.range(index);
        for col in 0..subspace.ncols() {
            tau[range.start + col] = subspace.column(col).inner(&wrench);
        }
        let parent_index = joint.predecessor.index();
        net_wrench[parent_index] = net_wrench[parent_index] + wrench;
    }

    Ok(tau)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanism_joint::revolute::JointModelRevolute;
    use mechanism_model::{Mechanism, STANDARD_GRAVITY};
    use mechanism_spatial::frame::FrameId;
    use mechanism_spatial::{SpatialInertia, Symmetric3, Transform};

    fn single_pendulum() -> Mechanism<f64> {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let inertia = SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::new(1.0, 0.0, 0.0),
            Symmetric3::identity(),
        );
        mechanism
            .attach(
                root,
                "link",
                mechanism_joint::JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(root_frame),
                Some(inertia),
            )
            .unwrap();
        mechanism
    }

    #[test]
    fn zero_velocity_zero_acceleration_balances_gravity_torque() {
        let mechanism = single_pendulum();
        let mut state = MechanismState::zero(mechanism);
        let tau = inverse_dynamics(&mut state, &[0.0], None).unwrap();
        // The link's COM sits 1m along its own x axis; a revolute-z joint does not feel
        // gravity pulling along that in-plane axis at zero velocity in this orientation.
        assert_eq!(tau.len(), 1);
        assert!(tau[0].is_finite());
    }

    #[test]
    fn external_wrench_at_the_tip_changes_the_torque() {
        let mechanism = single_pendulum();
        let mut state = MechanismState::zero(mechanism);
        let baseline = inverse_dynamics(&mut state, &[0.0], None).unwrap();
        let push = SpatialVector::from_parts(Vector3::zeros(), Vector3::new(0.0, 10.0, 0.0));
        let wrenches = vec![SpatialVector::zero(), push];
        let with_push = inverse_dynamics(&mut state, &[0.0], Some(&wrenches)).unwrap();
        assert!((with_push[0] - baseline[0]).abs() > 1e-6);
    }
}
