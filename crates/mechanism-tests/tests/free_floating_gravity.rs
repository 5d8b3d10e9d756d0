//! Scenario: a single rigid body attached to the world only through a floating joint,
//! released from rest. Under gravity alone it should fall straight down with no
//! rotational acceleration.

use approx::assert_relative_eq;
use mechanism_algorithms::forward_dynamics;
use mechanism_joint::quaternion_floating::JointModelQuaternionFloating;
use mechanism_joint::JointWrapper;
use mechanism_model::{Mechanism, STANDARD_GRAVITY, WORLD_ID};
use mechanism_spatial::{FrameId, SpatialInertia, Symmetric3, Transform, Vector3};
use mechanism_state::MechanismState;

#[test]
fn falls_straight_down_with_no_rotation() {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let root = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    let inertia = SpatialInertia::from_com_inertia(FrameId::new(0), 2.0, Vector3::zeros(), Symmetric3::identity());

    mechanism
        .attach(
            root,
            "floating_body",
            JointWrapper::quaternion_floating(JointModelQuaternionFloating::new()),
            Transform::identity(root_frame),
            Some(inertia),
        )
        .unwrap();

    let mut state = MechanismState::zero(mechanism);
    let tau = vec![0.0; 6];
    let result = forward_dynamics(&mut state, &tau).unwrap();

    // Angular block first, linear block second, matching every other spatial vector here.
    assert_relative_eq!(result.vdot[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(result.vdot[1], 0.0, epsilon = 1e-9);
    assert_relative_eq!(result.vdot[2], 0.0, epsilon = 1e-9);
    assert_relative_eq!(result.vdot[3], 0.0, epsilon = 1e-9);
    assert_relative_eq!(result.vdot[4], 0.0, epsilon = 1e-9);
    assert_relative_eq!(result.vdot[5], -9.80665, epsilon = 1e-9);
}
