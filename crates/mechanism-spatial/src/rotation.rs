//! Scalar-generic 3D rotations, stored as a matrix rather than a quaternion and built
//! via Rodrigues' formula.

use crate::matrix3::Matrix3;
use crate::scalar::Scalar;
use crate::vector3::Vector3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation3<T: Scalar> {
    matrix: Matrix3<T>,
}

impl<T: Scalar> Rotation3<T> {
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    #[must_use]
    pub fn from_matrix(matrix: Matrix3<T>) -> Self {
        Self { matrix }
    }

    /// Builds a rotation of `angle` radians about `axis` via Rodrigues' formula.
    /// `axis` is assumed unit-norm; callers normalise joint axes at construction time.
    #[must_use]
    pub fn from_axis_angle(axis: &Vector3<T>, angle: T) -> Self {
        let k = axis.skew();
        let kk = k * k;
        let matrix = Matrix3::identity() + k * angle.sin() + kk * (T::one() - angle.cos());
        Self { matrix }
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3<T> {
        &self.matrix
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    #[must_use]
    pub fn apply(&self, v: &Vector3<T>) -> Vector3<T> {
        self.matrix * *v
    }

    /// Converts this rotation to another scalar type, component-wise.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Rotation3<U> {
        let m = self.matrix;
        Rotation3::from_matrix(Matrix3::new(
            [m.get(0, 0).cast(), m.get(0, 1).cast(), m.get(0, 2).cast()],
            [m.get(1, 0).cast(), m.get(1, 1).cast(), m.get(1, 2).cast()],
            [m.get(2, 0).cast(), m.get(2, 1).cast(), m.get(2, 2).cast()],
        ))
    }

    /// The rotation angle recovered from the trace, per `acos((tr(R) - 1) / 2)`.
    /// Exact only for exactly-orthogonal `matrix`; used in tests and logging, not
    /// on a hot numeric path.
    #[must_use]
    pub fn angle(&self) -> T {
        let cos_theta = (self.matrix.trace() - T::one()) / T::from_f64(2.0);
        // acos is not part of the Scalar contract; approximate via atan2 through sin.
        // cos_theta in [-1, 1]; sin_theta = sqrt(1 - cos^2) (unsigned, sufficient for tests).
        let sin_theta = (T::one() - cos_theta * cos_theta).sqrt();
        sin_theta.atan2(cos_theta)
    }
}

impl<T: Scalar> Default for Rotation3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> std::ops::Mul for Rotation3<T> {
    type Output = Rotation3<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_has_zero_angle() {
        let r = Rotation3::<f64>::identity();
        assert_relative_eq!(r.angle(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let axis = Vector3::new(0.0_f64, 0.0, 1.0);
        let r = Rotation3::from_axis_angle(&axis, std::f64::consts::FRAC_PI_2);
        let mapped = r.apply(&Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(mapped.x(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(mapped.y(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn transpose_is_inverse_for_pure_rotation() {
        let axis = Vector3::new(0.0_f64, 1.0, 0.0);
        let r = Rotation3::from_axis_angle(&axis, 0.9);
        let v = Vector3::new(1.0, 2.0, 3.0);
        let roundtrip = r.transpose().apply(&r.apply(&v));
        assert_relative_eq!(roundtrip.x(), v.x(), epsilon = 1e-9);
        assert_relative_eq!(roundtrip.y(), v.y(), epsilon = 1e-9);
        assert_relative_eq!(roundtrip.z(), v.z(), epsilon = 1e-9);
    }
}
