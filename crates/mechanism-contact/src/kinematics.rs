//! Resolves a contact point's world-frame position offset and velocity from the
//! mechanism's own cached kinematics. Deliberately stops there: penetration depth,
//! contact normal, and tangential direction depend on collision geometry, which is an
//! external collaborator this crate does not provide (see the crate's non-goals).

use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{SpatialVector, Transform, Twist, Vector3};

/// `(r_world, point_velocity_world)`: the vector from the body's origin to the contact
/// point, and the point's velocity, both expressed in world-frame coordinates.
#[must_use]
pub fn point_kinematics<T: Scalar>(
    transform_to_root: &Transform<T>,
    twist_wrt_world: &Twist<T>,
    location_in_body_frame: Vector3<T>,
) -> (Vector3<T>, Vector3<T>) {
    let r_world = transform_to_root.rotation().apply(&location_in_body_frame);
    let twist = twist_wrt_world.vector();
    let point_velocity = twist.linear() + twist.angular().cross(&r_world);
    (r_world, point_velocity)
}

/// The world-frame wrench, referred to the body's own origin, equivalent to a point
/// force `force_world` applied at offset `r_world` from that origin.
#[must_use]
pub fn wrench_at_origin<T: Scalar>(r_world: Vector3<T>, force_world: Vector3<T>) -> SpatialVector<T> {
    SpatialVector::from_parts(r_world.cross(&force_world), force_world)
}
