//! The contact force-law contract every pluggable model satisfies: a plain object-safe
//! trait, no associated constants, state owned by the caller rather than the model.

use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::Vector3;

/// A per-contact-point force law.
///
/// `force` is queried once per contact point per dynamics step, after kinematics have
/// been brought up to date, with the point's current penetration depth, penetration
/// rate, and world-frame tangential velocity. It returns the normal force magnitude
/// (along the outward contact normal), the friction force (in the tangent plane, i.e.
/// already orthogonal to the normal), and the rate of change of the model's own
/// per-point state (e.g. a friction bristle deflection), which the caller integrates
/// alongside `q`/`v`.
///
/// Object-safe by construction (no generic methods, `&self` receivers only), so a
/// mechanism can hold a heterogeneous `Vec<Box<dyn ContactModel<T>>>` across its
/// contact points.
pub trait ContactModel<T: Scalar> {
    /// Width of this model's own per-point state vector.
    fn state_size(&self) -> usize;

    /// The state a freshly-added contact point starts at (no prior deflection).
    fn zero_state(&self) -> Vec<T> {
        vec![T::zero(); self.state_size()]
    }

    /// `(normal_force, friction_force, state_rate)` for the given kinematic inputs and
    /// current per-point state. `state_rate` has the same width as `state`.
    fn force(
        &self,
        penetration: T,
        penetration_rate: T,
        tangential_velocity: Vector3<T>,
        state: &[T],
    ) -> (T, Vector3<T>, Vec<T>);
}
