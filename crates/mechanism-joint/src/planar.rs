//! Planar joint: translation within a plane plus rotation about its normal.
//! `nq = nv = 3` (x, y, theta).

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

/// Model of a planar joint, spanned by `xaxis` and `yaxis` (assumed orthonormal).
#[derive(Clone, Debug)]
pub struct JointModelPlanar<T: Scalar> {
    pub xaxis: Vector3<T>,
    pub yaxis: Vector3<T>,
    pub limits: JointLimits<T>,
}

impl<T: Scalar> JointModelPlanar<T> {
    #[must_use]
    pub fn new(xaxis: Vector3<T>, yaxis: Vector3<T>) -> Self {
        Self {
            xaxis,
            yaxis,
            limits: JointLimits::new_unbounded(3),
        }
    }

    fn normal(&self) -> Vector3<T> {
        self.xaxis.cross(&self.yaxis)
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelPlanar<U> {
        JointModelPlanar {
            xaxis: self.xaxis.cast(),
            yaxis: self.yaxis.cast(),
            limits: self.limits.cast(),
        }
    }
}

impl<T: Scalar> JointModel<T> for JointModelPlanar<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::Planar
    }

    fn nq(&self) -> usize {
        3
    }

    fn nv(&self) -> usize {
        3
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert_eq!(q.len(), 3, "planar joint expects (x, y, theta)");
        let translation = self.xaxis.scale(q[0]) + self.yaxis.scale(q[1]);
        let rotation = Rotation3::from_axis_angle(&self.normal(), q[2]);
        Transform::new(before, after, rotation, translation)
    }

    fn motion_subspace(&self, _q: &[T]) -> GeometricJacobian<T> {
        let mut jacobian = GeometricJacobian::zero(3);
        jacobian.update_column(0, SpatialVector::from_parts(Vector3::zeros(), self.xaxis));
        jacobian.update_column(1, SpatialVector::from_parts(Vector3::zeros(), self.yaxis));
        jacobian.update_column(2, SpatialVector::from_parts(self.normal(), Vector3::zeros()));
        jacobian
    }

    fn bias_acceleration(&self, _q: &[T], _v: &[T]) -> SpatialVector<T> {
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, _q: &[T], v: &[T]) -> Vec<T> {
        v.to_vec()
    }

    fn zero_configuration(&self, q: &mut [T]) {
        for value in q.iter_mut() {
            *value = T::zero();
        }
    }

    fn normalize_configuration(&self, _q: &mut [T]) {}

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        for (i, value) in q.iter_mut().enumerate() {
            let lo = self.limits.min_configuration[i].to_f64();
            let hi = self.limits.max_configuration[i].to_f64();
            let sample = if lo.is_finite() && hi.is_finite() {
                rng.random_range(lo..=hi)
            } else {
                rng.random_range(-1.0..=1.0)
            };
            *value = T::from_f64(sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_combines_both_axes() {
        let joint: JointModelPlanar<f64> = JointModelPlanar::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let transform = joint.joint_transform(FrameId::new(0), FrameId::new(1), &[2.0, 3.0, 0.0]);
        assert_eq!(transform.translation().x(), 2.0);
        assert_eq!(transform.translation().y(), 3.0);
    }
}
