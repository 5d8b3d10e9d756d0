//! Invariant: a body's twist with respect to the world equals the sum, along its path
//! from the root, of each joint's motion subspace applied to that joint's own velocity
//! slice and carried into the world frame.

use approx::assert_relative_eq;
use mechanism_joint::revolute::JointModelRevolute;
use mechanism_joint::{JointModel, JointWrapper};
use mechanism_model::{BodyId, Mechanism, STANDARD_GRAVITY, WORLD_ID};
use mechanism_spatial::{FrameId, Rotation3, SpatialInertia, SpatialVector, Symmetric3, Transform, Vector3};
use mechanism_state::MechanismState;

fn double_pendulum() -> Mechanism<f64> {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let root = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    let inertia = SpatialInertia::from_com_inertia(FrameId::new(0), 1.0, Vector3::new(0.0, 0.0, -0.5), Symmetric3::identity());

    let (link1, _) = mechanism
        .attach(
            root,
            "link1",
            JointWrapper::revolute(JointModelRevolute::new_ry()),
            Transform::identity(root_frame),
            Some(inertia),
        )
        .unwrap();
    mechanism
        .attach(
            link1,
            "link2",
            JointWrapper::revolute(JointModelRevolute::new_ry()),
            Transform::new(root_frame, root_frame, Rotation3::identity(), Vector3::new(0.0, 0.0, -1.0)),
            Some(inertia),
        )
        .unwrap();
    mechanism
}

#[test]
fn world_twist_equals_the_accumulated_subspace_contributions() {
    let mechanism = double_pendulum();
    let mut state = MechanismState::zero(mechanism);
    state.set_configuration(&[0.2, -0.5]).unwrap();
    state.set_velocity(&[0.7, -1.1]).unwrap();

    let leaf = BodyId::new(2);
    let twist = state.twist_wrt_world(leaf).unwrap();

    let mut expected = SpatialVector::<f64>::zero();
    let mut body = leaf;
    loop {
        let Some(joint) = state.mechanism().parent_joint(body).cloned() else {
            break;
        };
        let q = &state.configuration()[state.q_layout().range(joint.id.index())];
        let v = &state.velocity()[state.v_layout().range(joint.id.index())];
        let subspace = joint.variant.motion_subspace(q);
        let local = subspace.mul_vector(v);
        let transform = state.transform_to_root(body).unwrap();
        expected = expected + transform.act_motion(&local);

        let parent = joint.predecessor.index();
        if parent == WORLD_ID {
            break;
        }
        body = BodyId::new(parent as u32);
    }

    assert_relative_eq!(twist.vector().angular().x(), expected.angular().x(), epsilon = 1e-9);
    assert_relative_eq!(twist.vector().angular().y(), expected.angular().y(), epsilon = 1e-9);
    assert_relative_eq!(twist.vector().angular().z(), expected.angular().z(), epsilon = 1e-9);
    assert_relative_eq!(twist.vector().linear().x(), expected.linear().x(), epsilon = 1e-9);
    assert_relative_eq!(twist.vector().linear().y(), expected.linear().y(), epsilon = 1e-9);
    assert_relative_eq!(twist.vector().linear().z(), expected.linear().z(), epsilon = 1e-9);
}
