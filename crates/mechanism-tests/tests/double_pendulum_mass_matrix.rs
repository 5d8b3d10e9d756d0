//! Scenario: a planar double pendulum with unit link inertias, unit link length, and
//! the second link's center of mass placed at its own joint, checked against the
//! closed-form mass matrix for that configuration.

use approx::assert_relative_eq;
use mechanism_algorithms::mass_matrix;
use mechanism_joint::revolute::JointModelRevolute;
use mechanism_joint::JointWrapper;
use mechanism_model::{Mechanism, STANDARD_GRAVITY, WORLD_ID};
use mechanism_spatial::{FrameId, SpatialInertia, Symmetric3, Transform, Vector3};
use mechanism_state::MechanismState;

/// Each link's own inertia is referenced at its own joint (zero center-of-mass offset),
/// so the mass matrix below reduces to the textbook point-mass-at-distance-`l1` case.
fn double_pendulum() -> Mechanism<f64> {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let root = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    let inertia = SpatialInertia::from_com_inertia(FrameId::new(0), 1.0, Vector3::zeros(), Symmetric3::identity());

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
            Transform::new(root_frame, root_frame, mechanism_spatial::Rotation3::identity(), Vector3::new(0.0, 0.0, -1.0)),
            Some(inertia),
        )
        .unwrap();
    mechanism
}

#[test]
fn matches_the_closed_form_mass_matrix_at_a_right_angle() {
    let mechanism = double_pendulum();
    let mut state = MechanismState::zero(mechanism);
    state.set_configuration(&[0.0, std::f64::consts::FRAC_PI_2]).unwrap();

    let m = mass_matrix(&mut state).unwrap();
    // I1 + I2 + m2*l1^2, I2, I2, I2 with I1=I2=m2=l1=1, cos(q2)=0.
    assert_relative_eq!(m[0], 3.0, epsilon = 1e-9);
    assert_relative_eq!(m[1], 1.0, epsilon = 1e-9);
    assert_relative_eq!(m[2], 1.0, epsilon = 1e-9);
    assert_relative_eq!(m[3], 1.0, epsilon = 1e-9);
}
