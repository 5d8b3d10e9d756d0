//! Lazy update protocol: on demand of a cached quantity, walk the spanning tree from the
//! root, skipping already-valid arrays, populating the requested quantity and its
//! transitive dependencies. Joint ids increase away from the root, so a single
//! `split_at_mut`-driven pass over the body array suffices.

use crate::errors::StateError;
use crate::state::MechanismState;
use mechanism_joint::JointModel;
use mechanism_model::BodyId;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{SpatialAcceleration, Transform, Twist};

impl<T: Scalar> MechanismState<T> {
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since this state
    /// was built.
    pub fn check_fresh(&self) -> Result<(), StateError> {
        if self.generation != self.mechanism.generation() {
            return Err(StateError::Stale(mechanism_model::StaleState {
                expected_generation: self.mechanism.generation(),
                got_generation: self.generation,
            }));
        }
        Ok(())
    }

    /// Overwrites the configuration and invalidates every configuration-dependent array.
    ///
    /// # Errors
    /// Returns [`StateError::WrongSize`] if `q.len() != self.configuration().len()`.
    pub fn set_configuration(&mut self, q: &[T]) -> Result<(), StateError> {
        if q.len() != self.q.len() {
            return Err(mechanism_model::DimensionMismatch {
                name: "q",
                expected: self.q.len(),
                got: q.len(),
            }
            .into());
        }
        self.q.as_mut_slice().copy_from_slice(q);
        self.cache.invalidate_configuration_dependent();
        Ok(())
    }

    /// Overwrites the velocity and invalidates every velocity-dependent array.
    ///
    /// # Errors
    /// Returns [`StateError::WrongSize`] if `v.len() != self.velocity().len()`.
    pub fn set_velocity(&mut self, v: &[T]) -> Result<(), StateError> {
        if v.len() != self.v.len() {
            return Err(mechanism_model::DimensionMismatch {
                name: "v",
                expected: self.v.len(),
                got: v.len(),
            }
            .into());
        }
        self.v.as_mut_slice().copy_from_slice(v);
        self.cache.invalidate_velocity_dependent();
        Ok(())
    }

    /// Overwrites the additional (e.g. contact) state without touching kinematic caches.
    pub fn set_additional_state(&mut self, s: &[T]) {
        self.s = s.to_vec();
    }

    fn ensure_joint_transforms(&mut self) {
        if self.cache.joint_transforms_valid() {
            return;
        }
        for joint in self.mechanism.tree_joints() {
            let index = joint.id.index();
            let q = self.q.segment(&self.q_layout, index);
            // A self-transform tagged `frame_after <- frame_after`: the joint's
            // configuration-dependent offset, expressed entirely in the successor's
            // frame so it composes directly with the joint's fixed `placement`
            // (`frame_before <- frame_after`) below.
            self.cache.joint_transforms[index] =
                joint
                    .variant
                    .joint_transform(joint.frame_after, joint.frame_after, q);
        }
        self.cache.mark_joint_transforms_valid();
    }

    fn ensure_transforms_to_root(&mut self) {
        self.ensure_joint_transforms();
        if self.cache.transforms_to_root_valid() {
            return;
        }
        let world_frame = self.mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        self.cache.transforms_to_root[mechanism_model::WORLD_ID] = Transform::identity(world_frame);
        for body_index in 1..self.mechanism.nbodies() {
            let body = BodyId::new(body_index as u32);
            let Some(joint) = self.mechanism.parent_joint(body) else {
                continue;
            };
            let predecessor_to_root = self.cache.transforms_to_root[joint.predecessor.index()];
            let joint_transform = self.cache.joint_transforms[joint.id.index()];
            // `frame_before <- frame_after`: fixed placement composed with the joint's
            // configuration-dependent offset.
            let local = joint
                .placement
                .compose(&joint_transform)
                .unwrap_or(joint_transform);
            // `world <- frame_after`: predecessor's world transform composed with `local`.
            self.cache.transforms_to_root[body_index] =
                predecessor_to_root.compose(&local).unwrap_or(predecessor_to_root);
        }
        self.cache.mark_transforms_to_root_valid();
    }

    fn ensure_twists(&mut self) {
        self.ensure_transforms_to_root();
        if self.cache.twists_valid() {
            return;
        }
        let world_frame = self.mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        self.cache.twist_wrt_world[mechanism_model::WORLD_ID] =
            Twist::zero(world_frame, world_frame, world_frame);
        for body_index in 1..self.mechanism.nbodies() {
            let body = BodyId::new(body_index as u32);
            let Some(joint) = self.mechanism.parent_joint(body) else {
                continue;
            };
            let index = joint.id.index();
            let v = self.v.segment(&self.v_layout, index);
            let q = self.q.segment(&self.q_layout, index);
            let subspace = joint.variant.motion_subspace(q);
            let joint_twist_local = subspace.mul_vector(v);
            let transform_to_root = self.cache.transforms_to_root[body_index];
            let joint_twist_world = transform_to_root.act_motion(&joint_twist_local);
            let parent_twist = self.cache.twist_wrt_world[joint.predecessor.index()];
            self.cache.twist_wrt_world[body_index] = Twist::new(
                transform_to_root.before(),
                world_frame,
                world_frame,
                parent_twist.vector() + joint_twist_world,
            );
        }
        self.cache.mark_twists_valid();
    }

    fn ensure_biases(&mut self) {
        self.ensure_twists();
        if self.cache.biases_valid() {
            return;
        }
        let world_frame = self.mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        self.cache.bias_acceleration[mechanism_model::WORLD_ID] =
            SpatialAcceleration::zero(world_frame, world_frame, world_frame);
        for body_index in 1..self.mechanism.nbodies() {
            let body = BodyId::new(body_index as u32);
            let Some(joint) = self.mechanism.parent_joint(body) else {
                continue;
            };
            let index = joint.id.index();
            let v = self.v.segment(&self.v_layout, index);
            let q = self.q.segment(&self.q_layout, index);
            let bias_local = joint.variant.bias_acceleration(q, v);
            let joint_twist_local = joint.variant.motion_subspace(q).mul_vector(v);
            let transform_to_root = self.cache.transforms_to_root[body_index];
            let parent_twist_world = self.cache.twist_wrt_world[joint.predecessor.index()].vector();
            // Body's own total twist expressed in `frame_after`, to form the `v x Sqdot`
            // Coriolis term alongside the joint's local contribution.
            let parent_twist_local = transform_to_root.act_motion_inv(&parent_twist_world);
            let total_twist_local = parent_twist_local + joint_twist_local;
            let coriolis = total_twist_local.cross(&joint_twist_local);
            let bias_world = transform_to_root.act_motion(&(bias_local + coriolis));
            let parent_bias = self.cache.bias_acceleration[joint.predecessor.index()];
            self.cache.bias_acceleration[body_index] = SpatialAcceleration::new(
                transform_to_root.before(),
                world_frame,
                world_frame,
                parent_bias.vector() + bias_world,
            );
        }
        self.cache.mark_biases_valid();
    }

    fn ensure_inertias_in_world(&mut self) {
        self.ensure_transforms_to_root();
        if self.cache.inertias_in_world_valid() {
            return;
        }
        for body_index in 0..self.mechanism.nbodies() {
            let Some(inertia) = self.mechanism.bodies()[body_index].inertia else {
                continue;
            };
            let transform_to_root = self.cache.transforms_to_root[body_index];
            self.cache.inertia_in_world[body_index] = inertia
                .transform_by(&transform_to_root)
                .unwrap_or(inertia);
        }
        self.cache.mark_inertias_in_world_valid();
    }

    fn ensure_crb(&mut self) {
        self.ensure_inertias_in_world();
        if self.cache.crb_valid() {
            return;
        }
        for body_index in 0..self.mechanism.nbodies() {
            self.cache.crb_inertia[body_index] = self.cache.inertia_in_world[body_index];
        }
        for body_index in (1..self.mechanism.nbodies()).rev() {
            let body = BodyId::new(body_index as u32);
            let Some(joint) = self.mechanism.parent_joint(body) else {
                continue;
            };
            let child_crb = self.cache.crb_inertia[body_index];
            let parent_index = joint.predecessor.index();
            self.cache.crb_inertia[parent_index] = self.cache.crb_inertia[parent_index]
                .checked_add(&child_crb)
                .unwrap_or(self.cache.crb_inertia[parent_index]);
        }
        self.cache.mark_crb_valid();
    }

    /// Raw cache accessor: populates `transforms_to_root` if needed and returns `body`'s
    /// entry, without checking staleness. Dynamics algorithms that query many bodies per
    /// call use this directly to avoid repeating the generation check on every body;
    /// callers should invoke [`MechanismState::check_fresh`] once up front instead.
    pub fn transform_to_root_cached(&mut self, body: BodyId) -> Transform<T> {
        self.ensure_transforms_to_root();
        self.cache.transforms_to_root[body.index()]
    }

    /// Raw cache accessor, see [`Self::transform_to_root_cached`].
    pub fn twist_wrt_world_cached(&mut self, body: BodyId) -> Twist<T> {
        self.ensure_twists();
        self.cache.twist_wrt_world[body.index()]
    }

    /// Raw cache accessor, see [`Self::transform_to_root_cached`].
    pub fn bias_acceleration_cached(&mut self, body: BodyId) -> SpatialAcceleration<T> {
        self.ensure_biases();
        self.cache.bias_acceleration[body.index()]
    }

    /// Raw cache accessor, see [`Self::transform_to_root_cached`]. `None` if `body` carries
    /// no inertia (e.g. the world body, or a massless intermediate frame body).
    pub fn inertia_in_world_cached(&mut self, body: BodyId) -> Option<mechanism_spatial::SpatialInertia<T>> {
        self.ensure_inertias_in_world();
        self.mechanism.bodies()[body.index()]
            .inertia
            .map(|_| self.cache.inertia_in_world[body.index()])
    }

    /// Raw cache accessor, see [`Self::transform_to_root_cached`].
    pub fn crb_inertia_cached(&mut self, body: BodyId) -> mechanism_spatial::SpatialInertia<T> {
        self.ensure_crb();
        self.cache.crb_inertia[body.index()]
    }
}
