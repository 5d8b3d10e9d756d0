//! Revolute joint, constraining two bodies to rotate around a given axis.

use crate::{
    joint::{JointModel, JointType},
    limits::JointLimits,
};
use mechanism_spatial::{
    frame::FrameId,
    jacobian::GeometricJacobian,
    rotation::Rotation3,
    scalar::Scalar,
    spatial::SpatialVector,
    transform::Transform,
    vector3::Vector3,
};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Model of a revolute joint.
///
/// This joint constrains two bodies to rotate relative to one another around a given axis.
#[derive(Clone, Debug)]
pub struct JointModelRevolute<T: Scalar> {
    /// The axis of rotation, expressed in the joint's `before` frame.
    pub axis: Vector3<T>,
    /// The joint limits.
    pub limits: JointLimits<T>,
}

impl<T: Scalar> JointModelRevolute<T> {
    #[must_use]
    pub fn new(axis: Vector3<T>) -> Self {
        JointModelRevolute {
            axis,
            limits: JointLimits::new_unbounded(1),
        }
    }

    #[must_use]
    pub fn new_rx() -> Self {
        Self::new(Vector3::new(T::one(), T::zero(), T::zero()))
    }

    #[must_use]
    pub fn new_ry() -> Self {
        Self::new(Vector3::new(T::zero(), T::one(), T::zero()))
    }

    #[must_use]
    pub fn new_rz() -> Self {
        Self::new(Vector3::new(T::zero(), T::zero(), T::one()))
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelRevolute<U> {
        JointModelRevolute {
            axis: self.axis.cast(),
            limits: self.limits.cast(),
        }
    }
}

impl<T: Scalar> JointModel<T> for JointModelRevolute<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::Revolute
    }

    fn nq(&self) -> usize {
        1
    }

    fn nv(&self) -> usize {
        1
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert_eq!(q.len(), 1, "revolute joint expects a single angle");
        let rotation = Rotation3::from_axis_angle(&self.axis, q[0]);
        Transform::new(before, after, rotation, Vector3::zeros())
    }

    fn motion_subspace(&self, _q: &[T]) -> GeometricJacobian<T> {
        let mut jacobian = GeometricJacobian::zero(1);
        jacobian.update_column(0, SpatialVector::from_parts(self.axis, Vector3::zeros()));
        jacobian
    }

    fn bias_acceleration(&self, _q: &[T], _v: &[T]) -> SpatialVector<T> {
        // The motion subspace of a revolute joint is constant in the `after` frame, so
        // it contributes no bias acceleration of its own.
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, _q: &[T], v: &[T]) -> Vec<T> {
        vec![v[0]]
    }

    fn zero_configuration(&self, q: &mut [T]) {
        q[0] = T::zero();
    }

    fn normalize_configuration(&self, _q: &mut [T]) {
        // A single angle has no manifold constraint to re-project onto.
    }

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        let lo = self.limits.min_configuration[0].to_f64();
        let hi = self.limits.max_configuration[0].to_f64();
        let sample = if lo.is_finite() && hi.is_finite() {
            rng.random_range(lo..=hi)
        } else {
            rng.random_range(-std::f64::consts::PI..=std::f64::consts::PI)
        };
        q[0] = T::from_f64(sample);
    }
}
