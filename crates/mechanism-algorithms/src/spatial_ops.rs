//! Small spatial-algebra helpers shared by the dynamics algorithms that are not tied to a
//! single tagged quantity type (`Twist` vs `SpatialAcceleration`), mirroring
//! [`mechanism_spatial::inertia::SpatialInertia::apply`]'s formula without its
//! `Twist`-only restriction.

use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::{SpatialInertia, SpatialVector};

/// `h = I*v` in the common frame `inertia` and `v` are both expressed in. Used for both
/// momenta (`v` a twist) and net wrenches (`v` a spatial acceleration), which RNEA applies
/// with the same bilinear formula.
pub(crate) fn apply_inertia<T: Scalar>(
    inertia: &SpatialInertia<T>,
    v: SpatialVector<T>,
) -> SpatialVector<T> {
    let w = v.angular();
    let v0 = v.linear();
    let angular = inertia.moment() * w + inertia.first_moment().cross(&v0);
    let linear = v0.scale(inertia.mass()) - inertia.first_moment().cross(&w);
    SpatialVector::from_parts(angular, linear)
}
