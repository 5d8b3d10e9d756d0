//! Scenario: differentiating `momentum(state)` with respect to each velocity coordinate,
//! via the dual-number scalar, reproduces `momentum_matrix(state)` column by column.
//! `momentum` is linear in `v` at fixed `q`, so evaluating at `v = 0` with one component
//! held as the differentiation variable isolates exactly that column.

use approx::assert_relative_eq;
use mechanism_algorithms::{momentum, momentum_matrix};
use mechanism_joint::revolute::JointModelRevolute;
use mechanism_joint::JointWrapper;
use mechanism_model::{Mechanism, STANDARD_GRAVITY, WORLD_ID};
use mechanism_spatial::scalar::Dual;
use mechanism_spatial::{FrameId, Rotation3, SpatialInertia, Symmetric3, Transform, Vector3};
use mechanism_state::MechanismState;

fn double_pendulum<T: mechanism_spatial::scalar::Scalar>() -> Mechanism<T> {
    let mut mechanism = Mechanism::new(Vector3::new(T::zero(), T::zero(), T::from_f64(-9.80665)));
    let root = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    let inertia = SpatialInertia::from_com_inertia(
        FrameId::new(0),
        T::from_f64(1.0),
        Vector3::new(T::zero(), T::zero(), T::from_f64(-0.5)),
        Symmetric3::identity(),
    );

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
            Transform::new(root_frame, root_frame, Rotation3::identity(), Vector3::new(T::zero(), T::zero(), T::from_f64(-1.0))),
            Some(inertia),
        )
        .unwrap();
    mechanism
}

#[test]
fn momentum_gradient_matches_the_momentum_matrix() {
    let q = [0.4, -0.7];

    let mut state = MechanismState::zero(double_pendulum::<f64>());
    state.set_configuration(&q).unwrap();
    let a = momentum_matrix(&mut state).unwrap();

    for k in 0..2 {
        let mut dual_state = MechanismState::zero(double_pendulum::<Dual<f64>>());
        let dual_q: Vec<Dual<f64>> = q.iter().map(|qi| Dual::constant(*qi)).collect();
        dual_state.set_configuration(&dual_q).unwrap();
        let mut v = [Dual::constant(0.0), Dual::constant(0.0)];
        v[k] = Dual::variable(0.0);
        dual_state.set_velocity(&v).unwrap();

        let h = momentum(&mut dual_state).unwrap();
        let column = a.column(k);

        assert_relative_eq!(h.angular().x().tangent, column.angular().x(), epsilon = 1e-10);
        assert_relative_eq!(h.angular().y().tangent, column.angular().y(), epsilon = 1e-10);
        assert_relative_eq!(h.angular().z().tangent, column.angular().z(), epsilon = 1e-10);
        assert_relative_eq!(h.linear().x().tangent, column.linear().x(), epsilon = 1e-10);
        assert_relative_eq!(h.linear().y().tangent, column.linear().y(), epsilon = 1e-10);
        assert_relative_eq!(h.linear().z().tangent, column.linear().z(), epsilon = 1e-10);
    }
}
