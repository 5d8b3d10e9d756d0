//! Prismatic joint, constraining two bodies to translate along a given axis.

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

/// Model of a prismatic joint.
///
/// This joint constrains two bodies to translate relative to one another along a given axis.
#[derive(Clone, Debug)]
pub struct JointModelPrismatic<T: Scalar> {
    /// The axis of translation, expressed in the joint's `before` frame.
    pub axis: Vector3<T>,
    /// The joint limits.
    pub limits: JointLimits<T>,
}

impl<T: Scalar> JointModelPrismatic<T> {
    #[must_use]
    pub fn new(axis: Vector3<T>) -> Self {
        JointModelPrismatic {
            axis,
            limits: JointLimits::new_unbounded(1),
        }
    }

    #[must_use]
    pub fn new_px() -> Self {
        Self::new(Vector3::new(T::one(), T::zero(), T::zero()))
    }

    #[must_use]
    pub fn new_py() -> Self {
        Self::new(Vector3::new(T::zero(), T::one(), T::zero()))
    }

    #[must_use]
    pub fn new_pz() -> Self {
        Self::new(Vector3::new(T::zero(), T::zero(), T::one()))
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelPrismatic<U> {
        JointModelPrismatic {
            axis: self.axis.cast(),
            limits: self.limits.cast(),
        }
    }
}

impl<T: Scalar> JointModel<T> for JointModelPrismatic<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::Prismatic
    }

    fn nq(&self) -> usize {
        1
    }

    fn nv(&self) -> usize {
        1
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert_eq!(q.len(), 1, "prismatic joint expects a single offset");
        Transform::new(before, after, Rotation3::identity(), self.axis.scale(q[0]))
    }

    fn motion_subspace(&self, _q: &[T]) -> GeometricJacobian<T> {
        let mut jacobian = GeometricJacobian::zero(1);
        jacobian.update_column(0, SpatialVector::from_parts(Vector3::zeros(), self.axis));
        jacobian
    }

    fn bias_acceleration(&self, _q: &[T], _v: &[T]) -> SpatialVector<T> {
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, _q: &[T], v: &[T]) -> Vec<T> {
        vec![v[0]]
    }

    fn zero_configuration(&self, q: &mut [T]) {
        q[0] = T::zero();
    }

    fn normalize_configuration(&self, _q: &mut [T]) {}

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        let lo = self.limits.min_configuration[0].to_f64();
        let hi = self.limits.max_configuration[0].to_f64();
        let sample = if lo.is_finite() && hi.is_finite() {
            rng.random_range(lo..=hi)
        } else {
            rng.random_range(-1.0..=1.0)
        };
        q[0] = T::from_f64(sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_translates_along_axis() {
        let joint: JointModelPrismatic<f64> = JointModelPrismatic::new_px();
        let transform = joint.joint_transform(FrameId::new(0), FrameId::new(1), &[2.0]);
        assert_eq!(transform.translation().x(), 2.0);
    }
}
