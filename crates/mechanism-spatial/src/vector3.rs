//! A scalar-generic 3-vector: a newtype over a fixed array rather than a
//! dynamically-sized or matrix-library-backed vector.

use crate::scalar::Scalar;
use std::ops::{Add, Index, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T: Scalar> {
    data: [T; 3],
}

impl<T: Scalar> Vector3<T> {
    #[must_use]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    #[must_use]
    pub fn zeros() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.data[0]
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.data[1]
    }

    #[must_use]
    pub fn z(&self) -> T {
        self.data[2]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T; 3] {
        &self.data
    }

    #[must_use]
    pub fn dot(&self, other: &Self) -> T {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        )
    }

    #[must_use]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[must_use]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    #[must_use]
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x() * factor, self.y() * factor, self.z() * factor)
    }

    /// Converts this vector to another scalar type, component-wise.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Vector3<U> {
        Vector3::new(self.x().cast(), self.y().cast(), self.z().cast())
    }

    /// The 3x3 cross-product (skew-symmetric) matrix such that `skew(a) * b == a.cross(&b)`.
    #[must_use]
    pub fn skew(&self) -> crate::matrix3::Matrix3<T> {
        let z = T::zero();
        crate::matrix3::Matrix3::new(
            [z, -self.z(), self.y()],
            [self.z(), z, -self.x()],
            [-self.y(), self.x(), z],
        )
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Vector3<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x() + rhs.x(), self.y() + rhs.y(), self.z() + rhs.z())
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x() - rhs.x(), self.y() - rhs.y(), self.z() - rhs.z())
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Vector3<T>;

    fn neg(self) -> Self::Output {
        Self::new(-self.x(), -self.y(), -self.z())
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}
