//! The untagged six-component spatial vector shared by twists, accelerations, wrenches
//! and momenta (angular half first, linear half second), with the cross/cross-star
//! operations spatial algebra needs.
//!
//! This type itself carries no frame tags; [`crate::twist::Twist`] and its siblings wrap
//! it with the three frame tags the operation signatures in the data model require.

use crate::scalar::Scalar;
use crate::vector3::Vector3;
use std::ops::{Add, Neg, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SpatialVector<T: Scalar> {
    angular: Vector3<T>,
    linear: Vector3<T>,
}

impl<T: Scalar> SpatialVector<T> {
    #[must_use]
    pub fn from_parts(angular: Vector3<T>, linear: Vector3<T>) -> Self {
        Self { angular, linear }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::from_parts(Vector3::zeros(), Vector3::zeros())
    }

    #[must_use]
    pub fn angular(&self) -> Vector3<T> {
        self.angular
    }

    #[must_use]
    pub fn linear(&self) -> Vector3<T> {
        self.linear
    }

    /// The spatial cross product for motion vectors: `v x m = (w x m.w, w x m.v + v x m.w)`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::from_parts(
            self.angular.cross(&other.angular),
            self.angular.cross(&other.linear) + self.linear.cross(&other.angular),
        )
    }

    /// The dual (force) cross product `v x* f = (w x f.w + v x f.v, w x f.v)`, used to
    /// propagate wrenches under a moving frame in inverse dynamics.
    #[must_use]
    pub fn cross_star(&self, other: &Self) -> Self {
        Self::from_parts(
            self.angular.cross(&other.angular) + self.linear.cross(&other.linear),
            self.angular.cross(&other.linear),
        )
    }

    #[must_use]
    pub fn inner(&self, other: &Self) -> T {
        self.angular.dot(&other.angular) + self.linear.dot(&other.linear)
    }

    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self::from_parts(self.angular.scale(factor), self.linear.scale(factor))
    }
}

impl<T: Scalar> Add for SpatialVector<T> {
    type Output = SpatialVector<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_parts(self.angular + rhs.angular, self.linear + rhs.linear)
    }
}

impl<T: Scalar> Sub for SpatialVector<T> {
    type Output = SpatialVector<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_parts(self.angular - rhs.angular, self.linear - rhs.linear)
    }
}

impl<T: Scalar> Neg for SpatialVector<T> {
    type Output = SpatialVector<T>;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.angular, -self.linear)
    }
}
