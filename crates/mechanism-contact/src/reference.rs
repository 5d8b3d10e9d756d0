//! The ambient default contact model: Hunt-Crossley for the normal force, driving a
//! bounded viscoelastic Coulomb model for friction. Most callers that need "a contact
//! model" without an opinion reach for this rather than composing the two pieces by
//! hand.

use crate::coulomb::{CoulombFriction, STATE_SIZE};
use crate::hunt_crossley::hunt_crossley_force;
use crate::model::ContactModel;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::Vector3;

pub struct HuntCrossleyCoulombModel<T: Scalar> {
    pub normal_stiffness: T,
    pub normal_dissipation: T,
    pub friction: CoulombFriction<T>,
}

impl<T: Scalar> HuntCrossleyCoulombModel<T> {
    #[must_use]
    pub fn new(
        normal_stiffness: T,
        normal_dissipation: T,
        friction_coefficient: T,
        tangential_stiffness: T,
        tangential_damping: T,
    ) -> Self {
        Self {
            normal_stiffness,
            normal_dissipation,
            friction: CoulombFriction::new(friction_coefficient, tangential_stiffness, tangential_damping),
        }
    }
}

impl<T: Scalar> ContactModel<T> for HuntCrossleyCoulombModel<T> {
    fn state_size(&self) -> usize {
        STATE_SIZE
    }

    fn force(
        &self,
        penetration: T,
        penetration_rate: T,
        tangential_velocity: Vector3<T>,
        state: &[T],
    ) -> (T, Vector3<T>, Vec<T>) {
        let normal = hunt_crossley_force(
            self.normal_stiffness,
            self.normal_dissipation,
            penetration,
            penetration_rate,
        );
        let (friction, rate) = self.friction.update(normal, tangential_velocity, state);
        (normal, friction, rate.to_vec())
    }
}
