//! Defines a generic joint model trait and a struct to wrap different joint types.
//!
//! This module provides both:
//! * The `JointModel` trait, which defines the common interface for different joint types.
//! * The `JointWrapper` struct, which encapsulates different joint model implementations and provides a
//!   unified interface to interact with them.

use crate::{
    fixed::JointModelFixed, planar::JointModelPlanar, prismatic::JointModelPrismatic,
    quaternion_floating::JointModelQuaternionFloating, revolute::JointModelRevolute,
    sincos_revolute::JointModelSinCosRevolute, spquat_floating::JointModelSPQuatFloating,
};
use mechanism_spatial::jacobian::GeometricJacobian;
use mechanism_spatial::scalar::Scalar;
use rand::rngs::ThreadRng;

#[derive(Clone, Debug)]
/// Enum encapsulating different joint model implementations.
///
/// It serves as the inner representation for the `JointWrapper` struct.
/// As such, users should interact with joints through the `JointWrapper` interface,
/// and avoid using this enum directly.
enum JointModelImpl<T: Scalar> {
    Revolute(JointModelRevolute<T>),
    Prismatic(JointModelPrismatic<T>),
    Planar(JointModelPlanar<T>),
    Fixed(JointModelFixed<T>),
    QuaternionFloating(JointModelQuaternionFloating<T>),
    SPQuatFloating(JointModelSPQuatFloating<T>),
    SinCosRevolute(JointModelSinCosRevolute<T>),
}

#[derive(Clone, Debug)]
/// Wrapper struct for different joint model implementations.
///
/// This struct provides a unified interface to interact with different joint types
/// through the `JointModel` trait. It serves as the main entry point for users of
/// the library to work with joints.
pub struct JointWrapper<T: Scalar> {
    inner: JointModelImpl<T>,
}

macro_rules! forward {
    ($self:expr, $method:ident $(, $arg:expr )* ) => {
        match &$self.inner {
            JointModelImpl::Revolute(joint) => joint.$method($($arg),*),
            JointModelImpl::Prismatic(joint) => joint.$method($($arg),*),
            JointModelImpl::Planar(joint) => joint.$method($($arg),*),
            JointModelImpl::Fixed(joint) => joint.$method($($arg),*),
            JointModelImpl::QuaternionFloating(joint) => joint.$method($($arg),*),
            JointModelImpl::SPQuatFloating(joint) => joint.$method($($arg),*),
            JointModelImpl::SinCosRevolute(joint) => joint.$method($($arg),*),
        }
    };
}

impl<T: Scalar> JointWrapper<T> {
    pub fn revolute(joint: JointModelRevolute<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::Revolute(joint),
        }
    }

    pub fn prismatic(joint: JointModelPrismatic<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::Prismatic(joint),
        }
    }

    pub fn planar(joint: JointModelPlanar<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::Planar(joint),
        }
    }

    pub fn fixed(joint: JointModelFixed<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::Fixed(joint),
        }
    }

    pub fn quaternion_floating(joint: JointModelQuaternionFloating<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::QuaternionFloating(joint),
        }
    }

    pub fn spquat_floating(joint: JointModelSPQuatFloating<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::SPQuatFloating(joint),
        }
    }

    pub fn sincos_revolute(joint: JointModelSinCosRevolute<T>) -> Self {
        JointWrapper {
            inner: JointModelImpl::SinCosRevolute(joint),
        }
    }

    /// Converts this joint to another scalar type, used by the cache registry when it
    /// instantiates a mechanism's canonical parameters under a new scalar type.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointWrapper<U> {
        match &self.inner {
            JointModelImpl::Revolute(joint) => JointWrapper::revolute(joint.cast()),
            JointModelImpl::Prismatic(joint) => JointWrapper::prismatic(joint.cast()),
            JointModelImpl::Planar(joint) => JointWrapper::planar(joint.cast()),
            JointModelImpl::Fixed(joint) => JointWrapper::fixed(joint.cast()),
            JointModelImpl::QuaternionFloating(joint) => {
                JointWrapper::quaternion_floating(joint.cast())
            }
            JointModelImpl::SPQuatFloating(joint) => JointWrapper::spquat_floating(joint.cast()),
            JointModelImpl::SinCosRevolute(joint) => JointWrapper::sincos_revolute(joint.cast()),
        }
    }
}

// The following is boilerplate to forward JointModel trait methods to the inner joint model.
impl<T: Scalar> JointModel<T> for JointWrapper<T> {
    fn get_joint_type(&self) -> JointType {
        forward!(self, get_joint_type)
    }

    fn nq(&self) -> usize {
        forward!(self, nq)
    }

    fn nv(&self) -> usize {
        forward!(self, nv)
    }

    fn joint_transform(
        &self,
        before: mechanism_spatial::frame::FrameId,
        after: mechanism_spatial::frame::FrameId,
        q: &[T],
    ) -> mechanism_spatial::transform::Transform<T> {
        forward!(self, joint_transform, before, after, q)
    }

    fn motion_subspace(&self, q: &[T]) -> GeometricJacobian<T> {
        forward!(self, motion_subspace, q)
    }

    fn bias_acceleration(&self, q: &[T], v: &[T]) -> mechanism_spatial::spatial::SpatialVector<T> {
        forward!(self, bias_acceleration, q, v)
    }

    fn configuration_derivative(&self, q: &[T], v: &[T]) -> Vec<T> {
        forward!(self, configuration_derivative, q, v)
    }

    fn velocity_to_configuration_derivative_jacobian(&self, q: &[T]) -> Vec<T> {
        forward!(self, velocity_to_configuration_derivative_jacobian, q)
    }

    fn zero_configuration(&self, q: &mut [T]) {
        forward!(self, zero_configuration, q)
    }

    fn normalize_configuration(&self, q: &mut [T]) {
        forward!(self, normalize_configuration, q)
    }

    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng) {
        forward!(self, random_configuration, q, rng)
    }
}

/// Joint trait for defining joints in a mechanism.
///
/// This trait provides a common interface for different joint types,
/// allowing for polymorphic behavior when working with various joint models.
/// Per-instance state (the current `q`/`v` slices) does not live on the joint model
/// itself; it lives in the owning `MechanismState`, and is passed in by slice.
pub trait JointModel<T: Scalar> {
    /// Returns the joint type.
    fn get_joint_type(&self) -> JointType;

    /// Returns the number of position variables.
    fn nq(&self) -> usize;

    /// Returns the number of velocity variables.
    fn nv(&self) -> usize;

    /// The transform `after <- before` induced by this joint's `q` slice. The frame ids
    /// are supplied by the owning mechanism, since a joint model has no frame identity
    /// of its own.
    fn joint_transform(
        &self,
        before: mechanism_spatial::frame::FrameId,
        after: mechanism_spatial::frame::FrameId,
        q: &[T],
    ) -> mechanism_spatial::transform::Transform<T>;

    /// The motion subspace (6×nv) expressed in `after`, as a function of `q`.
    fn motion_subspace(&self, q: &[T]) -> GeometricJacobian<T>;

    /// The bias acceleration contributed by this joint, zero for joints whose motion
    /// subspace does not vary with configuration.
    fn bias_acceleration(&self, q: &[T], v: &[T]) -> mechanism_spatial::spatial::SpatialVector<T>;

    /// `q̇` given the current configuration and velocity slices.
    fn configuration_derivative(&self, q: &[T], v: &[T]) -> Vec<T>;

    /// The `nq x nv` Jacobian (row-major) of [`Self::configuration_derivative`] with
    /// respect to `v`, at the given configuration. `configuration_derivative(q, v)` is
    /// linear in `v` for every variant this trait covers, so this is well defined even
    /// though `configuration_derivative` itself takes `v` rather than returning a matrix.
    ///
    /// The default covers every variant whose configuration and velocity coordinates
    /// coincide one-for-one (`nq == nv`, identity map); [`crate::sincos_revolute`] and
    /// [`crate::quaternion_floating`] override it since their `nq != nv`.
    fn velocity_to_configuration_derivative_jacobian(&self, _q: &[T]) -> Vec<T> {
        let nq = self.nq();
        let nv = self.nv();
        let mut out = vec![T::zero(); nq * nv];
        for i in 0..nq.min(nv) {
            out[i * nv + i] = T::one();
        }
        out
    }

    /// Writes the identity/neutral configuration into `q`.
    fn zero_configuration(&self, q: &mut [T]);

    /// Idempotently projects `q` back onto the joint's valid manifold (e.g. renormalising
    /// a unit quaternion).
    fn normalize_configuration(&self, q: &mut [T]);

    /// Writes a uniformly sampled configuration (respecting position limits where present)
    /// into `q`.
    fn random_configuration(&self, q: &mut [T], rng: &mut ThreadRng);
}

/// Enum representing the type of joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JointType {
    Revolute,
    Prismatic,
    Planar,
    Fixed,
    QuaternionFloating,
    SPQuatFloating,
    SinCosRevolute,
}
