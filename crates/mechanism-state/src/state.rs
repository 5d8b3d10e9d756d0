//! `MechanismState`: the mutable, lazily-cached state of one mechanism under one scalar
//! type, holding an owned, scalar-cast copy of the mechanism alongside its configuration,
//! velocity, and cached derived quantities.

use crate::cache::StateCache;
use mechanism_joint::JointModel;
use mechanism_model::{Mechanism, SegmentLayout, SegmentedVector};
use mechanism_spatial::scalar::Scalar;
use rand::rngs::ThreadRng;

/// Mutable state of a mechanism: configuration, velocity, per-contact-point additional
/// state, and the lazily-populated per-body scratch arrays in [`StateCache`].
pub struct MechanismState<T: Scalar> {
    pub(crate) mechanism: Mechanism<T>,
    /// The mechanism generation this state was built for; checked on every query against
    /// the owning mechanism's current generation to detect stale reuse.
    pub(crate) generation: u64,
    pub(crate) q_layout: SegmentLayout,
    pub(crate) v_layout: SegmentLayout,
    pub(crate) q: SegmentedVector<T>,
    pub(crate) v: SegmentedVector<T>,
    pub(crate) s: Vec<T>,
    pub(crate) cache: StateCache<T>,
}

impl<T: Scalar> MechanismState<T> {
    /// Builds a fresh state over `mechanism`, zero configuration, zero velocity, and
    /// empty contact state, allocating (but not yet populating) every cache array.
    #[must_use]
    pub fn zero(mechanism: Mechanism<T>) -> Self {
        let q_layout = mechanism.configuration_layout();
        let v_layout = mechanism.velocity_layout();
        let mut q = SegmentedVector::zeros(&q_layout);
        for (index, joint) in mechanism.tree_joints().iter().enumerate() {
            joint
                .variant
                .zero_configuration(q.segment_mut(&q_layout, index));
        }
        let v = SegmentedVector::zeros(&v_layout);
        let world_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let cache = StateCache::new(mechanism.njoints(), mechanism.nbodies(), world_frame);
        let generation = mechanism.generation();
        Self {
            mechanism,
            generation,
            q_layout,
            v_layout,
            q,
            v,
            s: Vec::new(),
            cache,
        }
    }

    /// Builds a fresh state with a uniformly sampled configuration (respecting joint
    /// limits where present) and zero velocity.
    #[must_use]
    pub fn rand(mechanism: Mechanism<T>, rng: &mut ThreadRng) -> Self {
        let mut state = Self::zero(mechanism);
        for index in 0..state.mechanism.tree_joints().len() {
            let joint = state.mechanism.tree_joints()[index].variant.clone();
            let q = state.q.segment_mut(&state.q_layout, index);
            joint.random_configuration(q, rng);
        }
        state
    }

    #[must_use]
    pub fn mechanism(&self) -> &Mechanism<T> {
        &self.mechanism
    }

    #[must_use]
    pub fn configuration(&self) -> &[T] {
        self.q.as_slice()
    }

    #[must_use]
    pub fn velocity(&self) -> &[T] {
        self.v.as_slice()
    }

    #[must_use]
    pub fn additional_state(&self) -> &[T] {
        &self.s
    }

    #[must_use]
    pub fn q_layout(&self) -> &SegmentLayout {
        &self.q_layout
    }

    #[must_use]
    pub fn v_layout(&self) -> &SegmentLayout {
        &self.v_layout
    }
}
