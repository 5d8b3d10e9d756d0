//! Viscoelastic Coulomb friction: a tangential spring-damper (the "bristle") whose
//! deflection tracks relative sliding, with the resulting force clipped to the Coulomb
//! cone `|f| <= mu * normal_force`. Below the cone the contact sticks and the bristle
//! deflects at the full relative velocity; at the cone boundary it slips, and the
//! bristle's own deflection rate is scaled back so it does not keep winding up while
//! saturated.

use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::Vector3;

/// Bristle deflection state is three scalars (a `Vector3`, packed flat); see
/// [`CoulombFriction::update`].
pub const STATE_SIZE: usize = 3;

pub struct CoulombFriction<T: Scalar> {
    pub friction_coefficient: T,
    pub stiffness: T,
    pub damping: T,
}

impl<T: Scalar> CoulombFriction<T> {
    #[must_use]
    pub fn new(friction_coefficient: T, stiffness: T, damping: T) -> Self {
        Self {
            friction_coefficient,
            stiffness,
            damping,
        }
    }

    /// `(friction_force, bristle_deflection_rate)` given the current normal force, the
    /// tangential relative velocity, and the current bristle deflection `z` (read out
    /// of the caller-owned flat state slice; must be `STATE_SIZE` long).
    #[must_use]
    pub fn update(
        &self,
        normal_force: T,
        tangential_velocity: Vector3<T>,
        state: &[T],
    ) -> (Vector3<T>, [T; STATE_SIZE]) {
        let z = Vector3::new(state[0], state[1], state[2]);
        let trial = (z.scale(self.stiffness) + tangential_velocity.scale(self.damping)).scale(-T::one());
        let bound = self.friction_coefficient * normal_force;
        let bound = if bound < T::zero() { T::zero() } else { bound };
        let magnitude = trial.norm();
        if magnitude > bound && magnitude > T::from_f64(1e-12) {
            let scale = bound / magnitude;
            (trial.scale(scale), [
                tangential_velocity.x() * scale,
                tangential_velocity.y() * scale,
                tangential_velocity.z() * scale,
            ])
        } else {
            (trial, [
                tangential_velocity.x(),
                tangential_velocity.y(),
                tangential_velocity.z(),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticking_bristle_deflects_at_the_relative_velocity() {
        let model = CoulombFriction::new(0.8, 1e3, 10.0);
        let state = [0.0, 0.0, 0.0];
        let (force, rate) = model.update(100.0, Vector3::new(0.01, 0.0, 0.0), &state);
        assert!(force.norm() > 0.0);
        assert_eq!(rate, [0.01, 0.0, 0.0]);
    }

    #[test]
    fn slipping_force_never_exceeds_the_coulomb_cone() {
        let model = CoulombFriction::new(0.5, 1e6, 1e4);
        let state = [0.0, 0.0, 0.0];
        let (force, _) = model.update(10.0, Vector3::new(5.0, 0.0, 0.0), &state);
        assert!(force.norm() <= 0.5 * 10.0 + 1e-9);
    }

    #[test]
    fn zero_normal_force_bounds_friction_to_zero() {
        let model = CoulombFriction::new(0.5, 1e3, 10.0);
        let state = [0.1, 0.0, 0.0];
        let (force, _) = model.update(0.0, Vector3::new(1.0, 0.0, 0.0), &state);
        assert_eq!(force, Vector3::zeros());
    }
}
