//! Floating (six-degree-of-freedom) joint parameterised by a unit quaternion and a
//! position, with `nq = 7` and `nv = 6`.

use crate::joint::{JointModel, JointType};
use mechanism_spatial::{
    frame::FrameId, jacobian::GeometricJacobian, matrix3::Matrix3, rotation::Rotation3,
    scalar::Scalar, spatial::SpatialVector, transform::Transform, vector3::Vector3,
};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Model of a quaternion-parameterised floating joint.
#[derive(Clone, Debug, Default)]
pub struct JointModelQuaternionFloating<T: Scalar> {
    _scalar: std::marker::PhantomData<T>,
}

impl<T: Scalar> JointModelQuaternionFloating<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _scalar: std::marker::PhantomData,
        }
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelQuaternionFloating<U> {
        JointModelQuaternionFloating::new()
    }
}

fn quaternion_to_matrix<T: Scalar>(w: T, x: T, y: T, z: T) -> Matrix3<T> {
    let two = T::from_f64(2.0);
    let one = T::one();
    Matrix3::new(
        [
            one - two * (y * y + z * z),
            two * (x * y - w * z),
            two * (x * z + w * y),
        ],
        [
            two * (x * y + w * z),
            one - two * (x * x + z * z),
            two * (y * z - w * x),
        ],
        [
            two * (x * z - w * y),
            two * (y * z + w * x),
            one - two * (x * x + y * y),
        ],
    )
}

impl<T: Scalar> JointModel<T> for JointModelQuaternionFloating<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::QuaternionFloating
    }

    fn nq(&self) -> usize {
        7
    }

    fn nv(&self) -> usize {
        6
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert_eq!(q.len(), 7, "quaternion floating joint expects 7 configuration values");
        let rotation = Rotation3::from_matrix(quaternion_to_matrix(q[0], q[1], q[2], q[3]));
        let translation = Vector3::new(q[4], q[5], q[6]);
        Transform::new(before, after, rotation, translation)
    }

    fn motion_subspace(&self, _q: &[T]) -> GeometricJacobian<T> {
        let mut jacobian = GeometricJacobian::zero(6);
        let (zero, one) = (T::zero(), T::one());
        let basis = [
            Vector3::new(one, zero, zero),
            Vector3::new(zero, one, zero),
            Vector3::new(zero, zero, one),
        ];
        for (i, axis) in basis.iter().enumerate() {
            jacobian.update_column(i, SpatialVector::from_parts(*axis, Vector3::zeros()));
            jacobian.update_column(i + 3, SpatialVector::from_parts(Vector3::zeros(), *axis));
        }
        jacobian
    }

    fn bias_acceleration(&self, _q: &[T], _v: &[T]) -> SpatialVector<T> {
        // The free-floating motion subspace (identity on the tangent space) is constant,
        // so the joint itself contributes no bias term; Coriolis effects show up through
        // the body's own spatial velocity in the dynamics algorithms, not here.
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, q: &[T], v: &[T]) -> Vec<T> {
        debug_assert_eq!(q.len(), 7);
        debug_assert_eq!(v.len(), 6);
        let (w, x, y, z) = (q[0], q[1], q[2], q[3]);
        let (wx, wy, wz) = (v[0], v[1], v[2]);
        let half = T::from_f64(0.5);
        // Quaternion kinematics: q_dot = 1/2 * q * (0, w_body).
        let dw = -half * (x * wx + y * wy + z * wz);
        let dx = half * (w * wx + y * wz - z * wy);
        let dy = half * (w * wy + z * wx - x * wz);
        let dz = half * (w * wz + x * wy - y * wx);
        let rotation = quaternion_to_matrix(w, x, y, z);
        let position_rate = rotation * Vector3::new(v[3], v[4], v[5]);
        vec![dw, dx, dy, dz, position_rate.x(), position_rate.y(), position_rate.z()]
    }

    fn velocity_to_configuration_derivative_jacobian(&self, q: &[T]) -> Vec<T> {
        debug_assert_eq!(q.len(), 7);
        let (w, x, y, z) = (q[0], q[1], q[2], q[3]);
        let half = T::from_f64(0.5);
        let zero = T::zero();
        // Rows 0..4 are the quaternion rate's angular-velocity coefficients (see
        // `configuration_derivative`); rows 4..7 are the position rate's coefficients,
        // zero against angular velocity and the body-to-world rotation against linear.
        let rotation = quaternion_to_matrix(w, x, y, z);
        let mut out = vec![zero; 7 * 6];
        let mut row = |r: usize, cols: [T; 6]| {
            out[r * 6..r * 6 + 6].copy_from_slice(&cols);
        };
        row(0, [-half * x, -half * y, -half * z, zero, zero, zero]);
        row(1, [half * w, -half * z, half * y, zero, zero, zero]);
        row(2, [half * z, half * w, -half * x, zero, zero, zero]);
        row(3, [-half * y, half * x, half * w, zero, zero, zero]);
        row(4, [zero, zero, zero, rotation.get(0, 0), rotation.get(0, 1), rotation.get(0, 2)]);
        row(5, [zero, zero, zero, rotation.get(1, 0), rotation.get(1, 1), rotation.get(1, 2)]);
        row(6, [zero, zero, zero, rotation.get(2, 0), rotation.get(2, 1), rotation.get(2, 2)]);
        out
    }

    fn zero_configuration(&self, q: &mut [T]) {
        q[0] = T::one();
        for value in q.iter_mut().skip(1) {
            *value = T::zero();
        }
    }

    fn normalize_configuration(&self, q: &mut [T]) {
        let norm_sq = q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3];
        let norm = norm_sq.sqrt();
        for value in q.iter_mut().take(4) {
            *value = *value / norm;
        }
    }

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        // Sample an unnormalised quaternion then project, avoiding a non-uniform bias
        // from sampling angle/axis separately.
        for value in q.iter_mut().take(4) {
            *value = T::from_f64(rng.random_range(-1.0..=1.0));
        }
        self.normalize_configuration(q);
        for value in q.iter_mut().skip(4) {
            *value = T::from_f64(rng.random_range(-1.0..=1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_configuration_is_identity() {
        let joint: JointModelQuaternionFloating<f64> = JointModelQuaternionFloating::new();
        let mut q = vec![0.0; 7];
        joint.zero_configuration(&mut q);
        let transform = joint.joint_transform(FrameId::new(0), FrameId::new(1), &q);
        assert_relative_eq!(transform.rotation().angle(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn normalize_configuration_restores_unit_norm() {
        let joint: JointModelQuaternionFloating<f64> = JointModelQuaternionFloating::new();
        let mut q = vec![2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        joint.normalize_configuration(&mut q);
        let norm_sq = q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3];
        assert_relative_eq!(norm_sq, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn velocity_jacobian_matches_configuration_derivative() {
        let joint: JointModelQuaternionFloating<f64> = JointModelQuaternionFloating::new();
        let mut q = vec![0.0; 7];
        joint.zero_configuration(&mut q);
        q[1] = 0.2;
        joint.normalize_configuration(&mut q);
        let v = [0.1, -0.2, 0.3, 1.0, -1.0, 0.5];
        let direct = joint.configuration_derivative(&q, &v);
        let jac = joint.velocity_to_configuration_derivative_jacobian(&q);
        for row in 0..7 {
            let mut acc = 0.0;
            for col in 0..6 {
                acc += jac[row * 6 + col] * v[col];
            }
            assert_relative_eq!(acc, direct[row], epsilon = 1e-9);
        }
    }
}
