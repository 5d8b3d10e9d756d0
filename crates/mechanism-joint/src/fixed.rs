//! Fixed joint, without any degree of freedom.

use crate::joint::{JointModel, JointType};
use mechanism_spatial::{
    frame::FrameId, jacobian::GeometricJacobian, rotation::Rotation3, scalar::Scalar,
    spatial::SpatialVector, transform::Transform, vector3::Vector3,
};
use rand::rngs::ThreadRng;
use std::marker::PhantomData;

/// Model of a fixed joint: no position, velocity, or motion subspace.
#[derive(Clone, Debug, Default)]
pub struct JointModelFixed<T: Scalar> {
    _scalar: PhantomData<T>,
}

impl<T: Scalar> JointModelFixed<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _scalar: PhantomData,
        }
    }

    /// Converts this joint model to another scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointModelFixed<U> {
        JointModelFixed::new()
    }
}

impl<T: Scalar> JointModel<T> for JointModelFixed<T> {
    fn get_joint_type(&self) -> JointType {
        JointType::Fixed
    }

    fn nq(&self) -> usize {
        0
    }

    fn nv(&self) -> usize {
        0
    }

    fn joint_transform(&self, before: FrameId, after: FrameId, q: &[T]) -> Transform<T> {
        debug_assert!(q.is_empty(), "fixed joint expects no configuration");
        Transform::new(before, after, Rotation3::identity(), Vector3::zeros())
    }

    fn motion_subspace(&self, _q: &[T]) -> GeometricJacobian<T> {
        GeometricJacobian::zero(0)
    }

    fn bias_acceleration(&self, _q: &[T], _v: &[T]) -> SpatialVector<T> {
        SpatialVector::zero()
    }

    fn configuration_derivative(&self, _q: &[T], _v: &[T]) -> Vec<T> {
        Vec::new()
    }

    fn zero_configuration(&self, _q: &mut [T]) {}

    fn normalize_configuration(&self, _q: &mut [T]) {}

    fn random_configuration(&self, _q: &mut [T], _rng: &mut ThreadRng) {}
}
