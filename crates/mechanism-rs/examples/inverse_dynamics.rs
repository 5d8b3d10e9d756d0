//! Computes the joint torques needed to hold a two-link pendulum at a given
//! configuration and velocity with a requested joint acceleration.

use mechanism_rs::joint::revolute::JointModelRevolute;
use mechanism_rs::prelude::*;

fn build_double_pendulum() -> Mechanism<f64> {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let root = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    let link_inertia = SpatialInertia::from_com_inertia(
        FrameId::new(0),
        1.0,
        Vector3::new(0.0, 0.0, -0.5),
        Symmetric3::identity(),
    );
    let (upper_arm, _) = mechanism
        .attach(
            root,
            "shoulder",
            JointWrapper::revolute(JointModelRevolute::new_ry()),
            Transform::identity(root_frame),
            Some(link_inertia),
        )
        .unwrap();
    mechanism
        .attach(
            upper_arm,
            "elbow",
            JointWrapper::revolute(JointModelRevolute::new_ry()),
            Transform::new(root_frame, root_frame, Rotation3::identity(), Vector3::new(0.0, 0.0, -1.0)),
            Some(link_inertia),
        )
        .unwrap();
    mechanism
}

fn main() {
    let mechanism = build_double_pendulum();
    let mut state = MechanismState::zero(mechanism);
    state.set_configuration(&[0.3, -0.6]).unwrap();
    state.set_velocity(&[0.1, -0.2]).unwrap();

    let vdot = [0.0, 0.0];
    let tau = inverse_dynamics(&mut state, &vdot, None).expect("inverse dynamics failed");
    println!("Joint torques holding this configuration/velocity at vdot={vdot:?}: {tau:?}");
}
