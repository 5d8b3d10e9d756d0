//! Rigid transforms between tagged frames: rotation plus translation, with `act`/
//! `act_inv` spatial-vector actions, carrying the `before`/`after` frame tags so a
//! transform can only ever be composed or applied where the frames actually line up.

use crate::errors::FrameMismatch;
use crate::frame::FrameId;
use crate::rotation::Rotation3;
use crate::scalar::Scalar;
use crate::spatial::SpatialVector;
use crate::vector3::Vector3;

/// A rigid transform carrying a vector expressed in `before` into one expressed in `after`:
/// `Transform(after <- before)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform<T: Scalar> {
    before: FrameId,
    after: FrameId,
    rotation: Rotation3<T>,
    translation: Vector3<T>,
}

impl<T: Scalar> Transform<T> {
    #[must_use]
    pub fn new(
        before: FrameId,
        after: FrameId,
        rotation: Rotation3<T>,
        translation: Vector3<T>,
    ) -> Self {
        Self {
            before,
            after,
            rotation,
            translation,
        }
    }

    #[must_use]
    pub fn identity(frame: FrameId) -> Self {
        Self::new(frame, frame, Rotation3::identity(), Vector3::zeros())
    }

    #[must_use]
    pub fn before(&self) -> FrameId {
        self.before
    }

    #[must_use]
    pub fn after(&self) -> FrameId {
        self.after
    }

    #[must_use]
    pub fn rotation(&self) -> &Rotation3<T> {
        &self.rotation
    }

    #[must_use]
    pub fn translation(&self) -> Vector3<T> {
        self.translation
    }

    #[must_use]
    pub fn inverse(&self) -> Self {
        let r_inv = self.rotation.transpose();
        Self::new(
            self.after,
            self.before,
            r_inv,
            -r_inv.apply(&self.translation),
        )
    }

    /// Composes `self: after <- before` with `other: before <- earlier` into `after <- earlier`.
    ///
    /// # Errors
    /// Returns [`FrameMismatch`] if `self.before() != other.after()`.
    pub fn compose(&self, other: &Self) -> Result<Self, FrameMismatch> {
        if self.before != other.after {
            return Err(FrameMismatch {
                operation: "Transform::compose",
                expected: self.before,
                got: other.after,
            });
        }
        Ok(Self::new(
            other.before,
            self.after,
            self.rotation * other.rotation,
            self.translation + self.rotation.apply(&other.translation),
        ))
    }

    /// Applies the adjoint action to a motion-type spatial vector (twist or acceleration)
    /// expressed in `before`, returning it expressed in `after`:
    /// `w' = R w`, `v' = R v + p x R w`.
    #[must_use]
    pub fn act_motion(&self, m: &SpatialVector<T>) -> SpatialVector<T> {
        let angular = self.rotation.apply(&m.angular());
        let linear = self.rotation.apply(&m.linear()) + self.translation.cross(&angular);
        SpatialVector::from_parts(angular, linear)
    }

    /// Applies the dual (force) action to a force-type spatial vector (wrench or momentum)
    /// expressed in `before`, returning it expressed in `after`:
    /// `n' = R n + p x R f`, `f' = R f`.
    #[must_use]
    pub fn act_force(&self, w: &SpatialVector<T>) -> SpatialVector<T> {
        let linear = self.rotation.apply(&w.linear());
        let angular = self.rotation.apply(&w.angular()) + self.translation.cross(&linear);
        SpatialVector::from_parts(angular, linear)
    }

    /// `self.inverse().act_motion(m)`, exposed directly to avoid rebuilding the inverse
    /// transform on every call in a hot loop.
    #[must_use]
    pub fn act_motion_inv(&self, m: &SpatialVector<T>) -> SpatialVector<T> {
        self.inverse().act_motion(m)
    }

    #[must_use]
    pub fn act_force_inv(&self, w: &SpatialVector<T>) -> SpatialVector<T> {
        self.inverse().act_force(w)
    }

    /// Converts this transform to another scalar type, component-wise.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Transform<U> {
        Transform::new(self.before, self.after, self.rotation.cast(), self.translation.cast())
    }
}
