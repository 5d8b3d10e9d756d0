//! Scenario: repeated lookups of the same scalar type return the identical cached
//! instance. This is a proxy for the zero-additional-allocation property: no custom
//! global allocator is wired in here to measure byte counts directly, but pointer
//! identity across many repeated lookups is the observable half of that guarantee.

use mechanism_cache::{DynamicsResultCache, SegmentedVectorCache, StateCache};
use mechanism_joint::revolute::JointModelRevolute;
use mechanism_joint::JointWrapper;
use mechanism_model::{Mechanism, SegmentLayout, STANDARD_GRAVITY, WORLD_ID};
use mechanism_spatial::scalar::Dual;
use mechanism_spatial::{FrameId, SpatialInertia, Symmetric3, Transform};
use std::rc::Rc;

fn single_link_mechanism() -> Mechanism<f64> {
    let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
    let root = mechanism.root_body();
    let root_frame = mechanism.bodies()[WORLD_ID].default_frame;
    let inertia = SpatialInertia::from_com_inertia(
        FrameId::new(0),
        1.0,
        mechanism_spatial::Vector3::zeros(),
        Symmetric3::identity(),
    );
    mechanism
        .attach(root, "link", JointWrapper::revolute(JointModelRevolute::new_ry()), Transform::identity(root_frame), Some(inertia))
        .unwrap();
    mechanism
}

#[test]
fn a_third_lookup_returns_the_same_instance_as_the_first_two() {
    let state_cache = StateCache::new(single_link_mechanism());
    let first: Rc<_> = state_cache.get::<f64>();
    let second = state_cache.get::<f64>();
    let third = state_cache.get::<Dual<f64>>();
    let fourth = state_cache.get::<f64>();

    assert!(Rc::ptr_eq(&first, &second));
    assert!(Rc::ptr_eq(&first, &fourth));
    drop(third);

    let results = DynamicsResultCache::new(1);
    let r1 = results.get::<f64>();
    let r2 = results.get::<f64>();
    assert!(Rc::ptr_eq(&r1, &r2));

    let layout = SegmentLayout::from_widths(&[1, 1]);
    let segments = SegmentedVectorCache::new(layout);
    let s1 = segments.get::<f64>();
    let s2 = segments.get::<f64>();
    assert!(Rc::ptr_eq(&s1, &s2));
}
