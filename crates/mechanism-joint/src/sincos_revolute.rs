//! Revolute joint parameterised by `(sin(theta), cos(theta))` instead of the bare angle:
//! `nq = 2`, `nv = 1`. Avoids the angle-wrapping discontinuity of [`crate::revolute`] at
//! the cost of a `normalize_configuration!` that rescales to unit norm.

use crate::{
    joint::{JointModel, JointType},
    limits::JointLimits,
};
use mechanism_spatial::{
    frame::FrameId, jacobian::GeometricJacobian, rotation::Rotation3, scalar::Scalar,
    spatial::SpatialVector, transform::Transform, vector3::Vector3,
};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Model of a sin/cos-parameterised revolute joint.
#[derive(Clone, Debug)]
pub struct JointModelSinCosRevolute<T: Scalar> {
    pub axis: Vector3<T>,
    pub limits: JointLimits<T>,
}

impl<T: Scalar> JointModelSinCosRevolute<T> {
    #[must_use]
    pub fn new(axis: Vector3<T>) -> Self {
        Self {
            axis,
            limits: JointLimits::new_unbounded(2),
        }
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelSinCosRevolute<U> {
        JointModelSinCosRevolute {
            axis: self.axis.cast(),
            limits: self.limits.cast(),
        }
    }
}

impl<T: Scalar> JointModel<T> for JointModelSinCosRevolute<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::SinCosRevolute
    }

    fn nq(&self) -> usize {
        2
    }

    fn nv(&self) -> usize {
        1
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert_eq!(q.len(), 2, "sin/cos revolute joint expects (sin, cos)");
        let angle = q[0].atan2(q[1]);
        let rotation = Rotation3::from_axis_angle(&self.axis, angle);
        Transform::new(before, after, rotation, Vector3::zeros())
    }

    fn motion_subspace(&self, _q: &[T]) -> GeometricJacobian<T> {
        let mut jacobian = GeometricJacobian::zero(1);
        jacobian.update_column(0, SpatialVector::from_parts(self.axis, Vector3::zeros()));
        jacobian
    }

    fn bias_acceleration(&self, _q: &[T], _v: &[T]) -> SpatialVector<T> {
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, q: &[T], v: &[T]) -> Vec<T> {
        // d/dt sin(theta) = cos(theta) * theta_dot, d/dt cos(theta) = -sin(theta) * theta_dot
        vec![q[1] * v[0], -q[0] * v[0]]
    }

    fn velocity_to_configuration_derivative_jacobian(&self, q: &[T]) -> Vec<T> {
        // 2x1: rows (d(sin)/d(theta_dot), d(cos)/d(theta_dot)) = (cos(theta), -sin(theta))
        vec![q[1], -q[0]]
    }

    fn zero_configuration(&self, q: &mut [T]) {
        q[0] = T::zero();
        q[1] = T::one();
    }

    fn normalize_configuration(&self, q: &mut [T]) {
        let norm = (q[0] * q[0] + q[1] * q[1]).sqrt();
        q[0] = q[0] / norm;
        q[1] = q[1] / norm;
    }

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        let angle: f64 = rng.random_range(-std::f64::consts::PI..=std::f64::consts::PI);
        q[0] = T::from_f64(angle.sin());
        q[1] = T::from_f64(angle.cos());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_rescales_to_unit_norm() {
        let joint: JointModelSinCosRevolute<f64> = JointModelSinCosRevolute::new(Vector3::new(0.0, 0.0, 1.0));
        let mut q = [3.0, 4.0];
        joint.normalize_configuration(&mut q);
        assert_relative_eq!(q[0] * q[0] + q[1] * q[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn transform_angle_matches_atan2() {
        let joint: JointModelSinCosRevolute<f64> = JointModelSinCosRevolute::new(Vector3::new(0.0, 0.0, 1.0));
        let transform = joint.joint_transform(FrameId::new(0), FrameId::new(1), &[1.0, 0.0]);
        assert_relative_eq!(transform.rotation().angle(), std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn velocity_jacobian_matches_configuration_derivative() {
        let joint: JointModelSinCosRevolute<f64> = JointModelSinCosRevolute::new(Vector3::new(0.0, 0.0, 1.0));
        let q = [0.6_f64.sin(), 0.6_f64.cos()];
        let v = [0.9];
        let direct = joint.configuration_derivative(&q, &v);
        let jac = joint.velocity_to_configuration_derivative_jacobian(&q);
        assert_relative_eq!(jac[0] * v[0], direct[0], epsilon = 1e-9);
        assert_relative_eq!(jac[1] * v[0], direct[1], epsilon = 1e-9);
    }
}
