//! Benchmarks a whole forward-dynamics step (mass matrix assembly, bias forces, and the
//! LDLT solve) on a longer chain than `mechanism-algorithms`' own per-function
//! microbenchmarks use, closer to what a simulation loop actually pays per tick.

use criterion::{criterion_group, criterion_main, Criterion};
use mechanism_algorithms::forward_dynamics;
use mechanism_joint::revolute::JointModelRevolute;
use mechanism_joint::JointWrapper;
use mechanism_model::{Mechanism, STANDARD_GRAVITY, WORLD_ID};
use mechanism_spatial::{FrameId, Rotation3, SpatialInertia, Symmetric3, Transform, Vector3};
use mechanism_state::MechanismState;
use std::hint::black_box;

fn build_chain(nlinks: usize) -> Mechanism<f64> {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let mut parent = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    for i in 0..nlinks {
        let inertia = SpatialInertia::from_com_inertia(FrameId::new(0), 1.0, Vector3::new(0.0, 0.0, -0.5), Symmetric3::identity());
        let joint = if i % 2 == 0 { JointModelRevolute::new_ry() } else { JointModelRevolute::new_rx() };
        let placement = if i == 0 {
            Transform::identity(root_frame)
        } else {
            Transform::new(root_frame, root_frame, Rotation3::identity(), Vector3::new(0.0, 0.0, -1.0))
        };
        let (next, _) = mechanism.attach(parent, format!("link{i}"), JointWrapper::revolute(joint), placement, Some(inertia)).unwrap();
        parent = next;
    }
    mechanism
}

fn bench_forward_dynamics_step(c: &mut Criterion) {
    let mechanism = build_chain(16);
    c.bench_function("forward_dynamics_chain16", |b| {
        b.iter(|| {
            let mut state = MechanismState::zero(mechanism.clone());
            let nv = state.velocity().len();
            state.set_velocity(&vec![0.2; nv]).unwrap();
            black_box(forward_dynamics(&mut state, &vec![0.5; nv]).unwrap());
        });
    });
}

criterion_group!(benches, bench_forward_dynamics_step);
criterion_main!(benches);
