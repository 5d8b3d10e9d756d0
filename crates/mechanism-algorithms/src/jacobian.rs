//! The geometric Jacobian of the twist of one arbitrary body relative to another, built
//! by walking [`mechanism_model::Mechanism::path`]'s signed joint list between the two
//! bodies rather than always climbing to the root.

use crate::errors::AlgorithmsError;
use mechanism_joint::JointModel;
use mechanism_model::{BodyId, WORLD_ID};
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{GeometricJacobian, Vector3};
use mechanism_state::MechanismState;

/// The `6 x nv` Jacobian `J` such that `twist(body_b) - twist(body_a) = J * v`, expressed
/// in the world frame. Columns outside the tree path between `body_a` and `body_b` are
/// zero.
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn relative_jacobian<T: Scalar>(
    state: &mut MechanismState<T>,
    body_a: BodyId,
    body_b: BodyId,
) -> Result<GeometricJacobian<T>, AlgorithmsError> {
    state.check_fresh()?;
    let nv = state.velocity().len();
    let q_layout = state.q_layout().clone();
    let v_layout = state.v_layout().clone();
    let q: Vec<T> = state.configuration().to_vec();
    let path = state.mechanism().path(body_a, body_b);

    let mut jac = GeometricJacobian::zero(nv);
    for (joint_id, sign) in path {
        let Some(successor) = state.mechanism().successor(joint_id) else {
            continue;
        };
        let Some(joint) = state.mechanism().parent_joint(successor).cloned() else {
            continue;
        };
        let index = joint.id.index();
        let q_joint = &q[q_layout.range(index)];
        let subspace = joint.variant.motion_subspace(q_joint);
        let transform_to_root = state.transform_to_root_cached(successor);
        let range = v_layout.range(index);
        let factor = T::from_f64(f64::from(sign));
        for (col_index, col) in subspace.columns().iter().enumerate() {
            jac.update_column(range.start + col_index, transform_to_root.act_motion(col).scale(factor));
        }
    }
    Ok(jac)
}

/// The `6 x nv` Jacobian of `body`'s twist with respect to the world, expressed in the
/// world frame: [`relative_jacobian`] specialised to the world root as the base body.
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn geometric_jacobian<T: Scalar>(
    state: &mut MechanismState<T>,
    body: BodyId,
) -> Result<GeometricJacobian<T>, AlgorithmsError> {
    let root = BodyId::new(WORLD_ID as u32);
    relative_jacobian(state, root, body)
}

/// The `3 x nv` Jacobian of the world-frame velocity of a point fixed at
/// `location_in_body_frame` in `body`'s own frame, built from [`relative_jacobian`]
/// between the world root and `body` by translating each column's angular part onto
/// the point (`v_point = v_origin + omega x r`).
///
/// # Errors
/// Returns [`AlgorithmsError::State`] if `state` is stale.
pub fn point_jacobian<T: Scalar>(
    state: &mut MechanismState<T>,
    body: BodyId,
    location_in_body_frame: Vector3<T>,
) -> Result<Vec<Vector3<T>>, AlgorithmsError> {
    let root = BodyId::new(WORLD_ID as u32);
    let r_world = state.transform_to_root_cached(body).rotation().apply(&location_in_body_frame);
    let jac = relative_jacobian(state, root, body)?;
    Ok((0..jac.ncols())
        .map(|col| {
            let column = jac.column(col);
            column.linear() + column.angular().cross(&r_world)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mechanism_joint::revolute::JointModelRevolute;
    use mechanism_model::{Mechanism, STANDARD_GRAVITY};
    use mechanism_spatial::frame::FrameId;
    use mechanism_spatial::{SpatialInertia, Symmetric3, Transform, Vector3};

    #[test]
    fn point_jacobian_at_body_origin_matches_linear_twist() {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let inertia = SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::zeros(),
            Symmetric3::identity(),
        );
        let (link, _) = mechanism
            .attach(
                root,
                "link",
                mechanism_joint::JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::new(root_frame, root_frame, mechanism_spatial::Rotation3::identity(), Vector3::new(1.0, 0.0, 0.0)),
                Some(inertia),
            )
            .unwrap();
        let mut state = MechanismState::zero(mechanism);
        state.set_velocity(&[0.7]).unwrap();
        let columns = point_jacobian(&mut state, link, Vector3::zeros()).unwrap();
        let predicted: Vector3<f64> = columns[0].scale(0.7);
        let twist = state.twist_wrt_world(link).unwrap();
        assert_relative_eq!(predicted.x(), twist.vector().linear().x(), epsilon = 1e-9);
        assert_relative_eq!(predicted.y(), twist.vector().linear().y(), epsilon = 1e-9);
    }

    #[test]
    fn geometric_jacobian_matches_relative_jacobian_from_root() {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let inertia = SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::zeros(),
            Symmetric3::identity(),
        );
        let (link, _) = mechanism
            .attach(
                root,
                "link",
                mechanism_joint::JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(root_frame),
                Some(inertia),
            )
            .unwrap();
        let mut state = MechanismState::zero(mechanism);
        let jac = geometric_jacobian(&mut state, link).unwrap();
        let direct = relative_jacobian(&mut state, BodyId::new(mechanism_model::WORLD_ID as u32), link).unwrap();
        assert_eq!(jac.column(0).angular().z(), direct.column(0).angular().z());
    }

    #[test]
    fn relative_jacobian_to_root_matches_own_twist() {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let inertia = SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::zeros(),
            Symmetric3::identity(),
        );
        let (link, _) = mechanism
            .attach(
                root,
                "link",
                mechanism_joint::JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(root_frame),
                Some(inertia),
            )
            .unwrap();
        let mut state = MechanismState::zero(mechanism);
        state.set_velocity(&[0.7]).unwrap();
        let jac = relative_jacobian(&mut state, root, link).unwrap();
        let twist = state.twist_wrt_world(link).unwrap();
        let predicted = jac.mul_vector(state.velocity());
        assert_relative_eq!(predicted.angular().z(), twist.vector().angular().z(), epsilon = 1e-9);
    }
}
