//! Floating joint parameterised by a stereographic-projection quaternion (SPQuat) and a
//! position: `nq = 6`, `nv = 6`. Unlike [`crate::quaternion_floating`], the orientation
//! parameters are unconstrained (no unit-norm manifold), at the cost of a singularity at
//! the antipodal rotation, and `normalize_configuration!` is a no-op.

use crate::joint::{JointModel, JointType};
use mechanism_spatial::{
    frame::FrameId, jacobian::GeometricJacobian, rotation::Rotation3, scalar::Scalar,
    spatial::SpatialVector, transform::Transform, vector3::Vector3,
};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Model of an SPQuat-parameterised floating joint.
#[derive(Clone, Debug, Default)]
pub struct JointModelSPQuatFloating<T: Scalar> {
    _scalar: std::marker::PhantomData<T>,
}

impl<T: Scalar> JointModelSPQuatFloating<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _scalar: std::marker::PhantomData,
        }
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelSPQuatFloating<U> {
        JointModelSPQuatFloating::new()
    }
}

/// Maps the stereographic-projection parameters `(x, y, z)` to a quaternion `(w, x, y, z)`.
fn spquat_to_quaternion<T: Scalar>(p: Vector3<T>) -> (T, T, T, T) {
    let one = T::one();
    let n2 = p.norm_squared();
    let denom = one + n2;
    (
        (one - n2) / denom,
        (T::from_f64(2.0) * p.x()) / denom,
        (T::from_f64(2.0) * p.y()) / denom,
        (T::from_f64(2.0) * p.z()) / denom,
    )
}

fn quaternion_to_matrix<T: Scalar>(w: T, x: T, y: T, z: T) -> mechanism_spatial::matrix3::Matrix3<T> {
    let two = T::from_f64(2.0);
    let one = T::one();
    mechanism_spatial::matrix3::Matrix3::new(
        [one - two * (y * y + z * z), two * (x * y - w * z), two * (x * z + w * y)],
        [two * (x * y + w * z), one - two * (x * x + z * z), two * (y * z - w * x)],
        [two * (x * z - w * y), two * (y * z + w * x), one - two * (x * x + y * y)],
    )
}

impl<T: Scalar> JointModel<T> for JointModelSPQuatFloating<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::SPQuatFloating
    }

    fn nq(&self) -> usize {
        6
    }

    fn nv(&self) -> usize {
        6
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert_eq!(q.len(), 6, "spquat floating joint expects 6 configuration values");
        let spquat = Vector3::new(q[0], q[1], q[2]);
        let (w, x, y, z) = spquat_to_quaternion(spquat);
        let rotation = Rotation3::from_matrix(quaternion_to_matrix(w, x, y, z));
        let translation = Vector3::new(q[3], q[4], q[5]);
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
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, q: &[T], v: &[T]) -> Vec<T> {
        debug_assert_eq!(q.len(), 6);
        debug_assert_eq!(v.len(), 6);
        let p = Vector3::new(q[0], q[1], q[2]);
        let (w, x, y, z) = spquat_to_quaternion(p);
        let (wx, wy, wz) = (v[0], v[1], v[2]);
        let half = T::from_f64(0.5);
        // Quaternion kinematics composed with p = (x, y, z) / (1 + w), the inverse of
        // `spquat_to_quaternion`.
        let dw = -half * (x * wx + y * wy + z * wz);
        let dx = half * (w * wx + y * wz - z * wy);
        let dy = half * (w * wy + z * wx - x * wz);
        let dz = half * (w * wz + x * wy - y * wx);
        let one = T::one();
        let onew = one + w;
        let denom = onew * onew;
        let dp_x = (dx * onew - x * dw) / denom;
        let dp_y = (dy * onew - y * dw) / denom;
        let dp_z = (dz * onew - z * dw) / denom;
        let rotation = quaternion_to_matrix(w, x, y, z);
        let position_rate = rotation * Vector3::new(v[3], v[4], v[5]);
        vec![dp_x, dp_y, dp_z, position_rate.x(), position_rate.y(), position_rate.z()]
    }

    fn velocity_to_configuration_derivative_jacobian(&self, q: &[T]) -> Vec<T> {
        debug_assert_eq!(q.len(), 6);
        let p = Vector3::new(q[0], q[1], q[2]);
        let (w, x, y, z) = spquat_to_quaternion(p);
        let one = T::one();
        let half = T::from_f64(0.5);
        let onew = one + w;
        let denom = onew * onew;
        let m00 = half * (w * onew + x * x) / denom;
        let m01 = half * (x * y - z * onew) / denom;
        let m02 = half * (x * z + y * onew) / denom;
        let m10 = half * (x * y + z * onew) / denom;
        let m11 = half * (w * onew + y * y) / denom;
        let m12 = half * (y * z - x * onew) / denom;
        let m20 = half * (x * z - y * onew) / denom;
        let m21 = half * (y * z + x * onew) / denom;
        let m22 = half * (w * onew + z * z) / denom;
        let rotation = quaternion_to_matrix(w, x, y, z);
        let zero = T::zero();
        let mut out = vec![zero; 6 * 6];
        let mut row = |r: usize, cols: [T; 6]| {
            out[r * 6..r * 6 + 6].copy_from_slice(&cols);
        };
        row(0, [m00, m01, m02, zero, zero, zero]);
        row(1, [m10, m11, m12, zero, zero, zero]);
        row(2, [m20, m21, m22, zero, zero, zero]);
        row(3, [zero, zero, zero, rotation.get(0, 0), rotation.get(0, 1), rotation.get(0, 2)]);
        row(4, [zero, zero, zero, rotation.get(1, 0), rotation.get(1, 1), rotation.get(1, 2)]);
        row(5, [zero, zero, zero, rotation.get(2, 0), rotation.get(2, 1), rotation.get(2, 2)]);
        out
    }

    fn zero_configuration(&self, q: &mut [T]) {
        for value in q.iter_mut() {
            *value = T::zero();
        }
    }

    fn normalize_configuration(&self, _q: &mut [T]) {
        // SPQuat parameters are unconstrained by construction; nothing to project.
    }

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        for value in q.iter_mut().take(3) {
            *value = T::from_f64(rng.random_range(-1.0..=1.0));
        }
        for value in q.iter_mut().skip(3) {
            *value = T::from_f64(rng.random_range(-1.0..=1.0));
        }
    }
}
