//! Benchmarks RNEA on the same hand-built chain as `forward_kinematics.rs`.

use criterion::{criterion_group, criterion_main, Criterion};
use mechanism_algorithms::inverse_dynamics;
use mechanism_joint::revolute::JointModelRevolute;
use mechanism_model::{Mechanism, STANDARD_GRAVITY};
use mechanism_spatial::frame::FrameId;
use mechanism_spatial::{Rotation3, Symmetric3, Transform, Vector3};
use mechanism_spatial::SpatialInertia;
use mechanism_state::MechanismState;
use std::hint::black_box;

fn build_chain(nlinks: usize) -> Mechanism<f64> {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let mut parent = mechanism.root_body();
    let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
    for i in 0..nlinks {
        let inertia = SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::new(0.0, 0.0, -0.5),
            Symmetric3::identity(),
        );
        let joint = if i % 2 == 0 {
            JointModelRevolute::new_ry()
        } else {
            JointModelRevolute::new_rx()
        };
        let (next, _) = mechanism
            .attach(
                parent,
                &format!("link{i}"),
                mechanism_joint::JointWrapper::revolute(joint),
                Transform::new(root_frame, root_frame, Rotation3::identity(), Vector3::new(0.0, 0.0, -1.0)),
                Some(inertia),
            )
            .unwrap();
        parent = next;
    }
    mechanism
}

fn bench_inverse_dynamics(c: &mut Criterion) {
    let mechanism = build_chain(8);
    c.bench_function("inverse_dynamics_chain8", |b| {
        b.iter(|| {
            let mut state = MechanismState::zero(mechanism.clone());
            let nv = state.velocity().len();
            state.set_velocity(&vec![0.3; nv]).unwrap();
            black_box(inverse_dynamics(&mut state, &vec![1.0; nv], None).unwrap());
        });
    });
}

criterion_group!(benches, bench_inverse_dynamics);
criterion_main!(benches);
