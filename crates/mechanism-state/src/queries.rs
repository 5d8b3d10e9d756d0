//! Public read queries built on the lazy update protocol in `update.rs`.

use crate::errors::StateError;
use crate::state::MechanismState;
use mechanism_joint::JointModel;
use mechanism_model::BodyId;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{Momentum, Transform, Twist};

impl<T: Scalar> MechanismState<T> {
    /// The transform carrying quantities expressed in `body`'s own default frame into
    /// the world frame.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn transform_to_root(&mut self, body: BodyId) -> Result<Transform<T>, StateError> {
        self.check_fresh()?;
        Ok(self.transform_to_root_cached(body))
    }

    /// `body`'s twist with respect to the world, expressed in the world frame.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn twist_wrt_world(&mut self, body: BodyId) -> Result<Twist<T>, StateError> {
        self.check_fresh()?;
        Ok(self.twist_wrt_world_cached(body))
    }

    /// The twist of `body_b` relative to `body_a`, expressed in the world frame:
    /// `twist(b) - twist(a)` composed through their common twist tags.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn relative_twist(&mut self, body_a: BodyId, body_b: BodyId) -> Result<Twist<T>, StateError> {
        self.check_fresh()?;
        let twist_a = self.twist_wrt_world_cached(body_a);
        let twist_b = self.twist_wrt_world_cached(body_b);
        Ok(Twist::new(
            twist_b.body(),
            twist_a.body(),
            twist_b.expressed_in(),
            twist_b.vector() - twist_a.vector(),
        ))
    }

    /// Momentum of the whole mechanism (sum over bodies), expressed in the world frame.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn momentum(&mut self) -> Result<Momentum<T>, StateError> {
        self.check_fresh()?;
        let world_frame = self.mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let mut total = Momentum::zero(world_frame, world_frame, world_frame);
        for body_index in 0..self.mechanism.nbodies() {
            let body = BodyId::new(body_index as u32);
            let Some(inertia) = self.inertia_in_world_cached(body) else {
                continue;
            };
            let twist = self.twist_wrt_world_cached(body);
            let local_twist = Twist::new(world_frame, world_frame, world_frame, twist.vector());
            if let Ok(contribution) = inertia.apply(&local_twist) {
                total = total.checked_add(&contribution).unwrap_or(total);
            }
        }
        Ok(total)
    }

    /// Total kinetic energy `sum_b (1/2) twist_b^T I_b twist_b`.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn kinetic_energy(&mut self) -> Result<T, StateError> {
        self.check_fresh()?;
        let world_frame = self.mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let half = T::from_f64(0.5);
        let mut energy = T::zero();
        for body_index in 0..self.mechanism.nbodies() {
            let body = BodyId::new(body_index as u32);
            let Some(inertia) = self.inertia_in_world_cached(body) else {
                continue;
            };
            let twist = self.twist_wrt_world_cached(body);
            let local_twist = Twist::new(world_frame, world_frame, world_frame, twist.vector());
            if let Ok(momentum) = inertia.apply(&local_twist) {
                energy = energy + half * momentum.vector().inner(&twist.vector());
            }
        }
        Ok(energy)
    }

    /// Gravitational potential energy `-sum_b m_b g . com_b`, with `com_b` expressed in
    /// the world frame.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn gravitational_potential_energy(&mut self) -> Result<T, StateError> {
        self.check_fresh()?;
        let gravity = self.mechanism.gravity();
        let mut energy = T::zero();
        for body_index in 0..self.mechanism.nbodies() {
            let body = BodyId::new(body_index as u32);
            let Some(local_inertia) = self.mechanism.bodies()[body_index].inertia else {
                continue;
            };
            let transform = self.transform_to_root_cached(body);
            let com_local = local_inertia.center_of_mass();
            let com_world = transform.translation() + transform.rotation().apply(&com_local);
            energy = energy - local_inertia.mass() * gravity.dot(&com_world);
        }
        Ok(energy)
    }

    /// `q̇` for the current configuration and velocity, per joint variant (identity for
    /// most joints; quaternion kinematics for floating joints).
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn configuration_derivative(&mut self) -> Result<Vec<T>, StateError> {
        self.check_fresh()?;
        let mut qdot = vec![T::zero(); self.q.len()];
        for joint in self.mechanism.tree_joints() {
            let index = joint.id.index();
            let q = self.q.segment(&self.q_layout, index);
            let v = self.v.segment(&self.v_layout, index);
            let derivative = joint.variant.configuration_derivative(q, v);
            qdot[self.q_layout.range(index)].copy_from_slice(&derivative);
        }
        Ok(qdot)
    }

    /// Integrates `configuration_derivative` in place by `dt` and renormalizes every
    /// joint's configuration onto its valid manifold.
    ///
    /// # Errors
    /// Returns [`StateError::Stale`] if the owning mechanism was mutated since.
    pub fn configuration_derivative_integrate(&mut self, dt: T) -> Result<(), StateError> {
        let qdot = self.configuration_derivative()?;
        for (q, dq) in self.q.as_mut_slice().iter_mut().zip(qdot.iter()) {
            *q = *q + *dq * dt;
        }
        for (index, joint) in self.mechanism.tree_joints().iter().enumerate() {
            joint
                .variant
                .normalize_configuration(self.q.segment_mut(&self.q_layout, index));
        }
        self.cache.invalidate_configuration_dependent();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mechanism_joint::revolute::JointModelRevolute;
    use mechanism_model::{Mechanism, STANDARD_GRAVITY};
    use mechanism_spatial::{frame::FrameId, Symmetric3, Transform, Vector3};

    fn single_pendulum() -> Mechanism<f64> {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        // `attach` retags this inertia to the newly allocated successor frame, so the
        // frame id passed here is irrelevant.
        let inertia = mechanism_spatial::SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::new(0.0, 0.0, -1.0),
            Symmetric3::identity(),
        );
        let (_, _) = mechanism
            .attach(
                root,
                "link",
                mechanism_joint::JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(root_frame),
                Some(inertia),
            )
            .unwrap();
        mechanism
    }

    #[test]
    fn zero_velocity_has_zero_kinetic_energy() {
        let mechanism = single_pendulum();
        let mut state = MechanismState::zero(mechanism);
        assert_relative_eq!(state.kinetic_energy().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn hanging_link_has_expected_potential_energy() {
        let mechanism = single_pendulum();
        let mut state = MechanismState::zero(mechanism);
        let energy = state.gravitational_potential_energy().unwrap();
        assert_relative_eq!(energy, -9.806_65, epsilon = 1e-6);
    }

    #[test]
    fn stale_state_is_rejected_after_mutation() {
        let mut mechanism = single_pendulum();
        let state = MechanismState::zero(mechanism.clone());
        let _ = mechanism.attach(
            state.mechanism().root_body(),
            "extra",
            mechanism_joint::JointWrapper::fixed(mechanism_joint::fixed::JointModelFixed::default()),
            Transform::identity(state.mechanism().bodies()[mechanism_model::WORLD_ID].default_frame),
            None,
        );
        assert!(state.check_fresh().is_err());
    }
}
