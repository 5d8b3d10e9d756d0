//! Frame-tagged spatial quantities: twists, spatial accelerations, wrenches and momenta.
//!
//! Each wraps the untagged [`SpatialVector`] with the three frame tags the data model
//! requires (body frame, base frame, expressed-in frame) and checks them on every
//! operation that composes two quantities, raising [`FrameMismatch`] on disagreement.
//! Each quantity gets its own type instead of reusing one alias for four different
//! things, so a twist can never be added to a wrench by accident.

use crate::errors::FrameMismatch;
use crate::frame::FrameId;
use crate::scalar::Scalar;
use crate::spatial::SpatialVector;
use crate::transform::Transform;

macro_rules! tagged_spatial_quantity {
    ($name:ident, $act:ident, $act_inv:ident) => {
        #[derive(Copy, Clone, Debug, PartialEq)]
        pub struct $name<T: Scalar> {
            body: FrameId,
            base: FrameId,
            expressed_in: FrameId,
            vector: SpatialVector<T>,
        }

        impl<T: Scalar> $name<T> {
            #[must_use]
            pub fn new(
                body: FrameId,
                base: FrameId,
                expressed_in: FrameId,
                vector: SpatialVector<T>,
            ) -> Self {
                Self {
                    body,
                    base,
                    expressed_in,
                    vector,
                }
            }

            #[must_use]
            pub fn zero(body: FrameId, base: FrameId, expressed_in: FrameId) -> Self {
                Self::new(body, base, expressed_in, SpatialVector::zero())
            }

            #[must_use]
            pub fn body(&self) -> FrameId {
                self.body
            }

            #[must_use]
            pub fn base(&self) -> FrameId {
                self.base
            }

            #[must_use]
            pub fn expressed_in(&self) -> FrameId {
                self.expressed_in
            }

            #[must_use]
            pub fn vector(&self) -> SpatialVector<T> {
                self.vector
            }

            /// Adds two quantities of the same body/base pair expressed in the same frame.
            ///
            /// # Errors
            /// Returns [`FrameMismatch`] if body, base, or expressed-in frames disagree.
            pub fn checked_add(&self, other: &Self) -> Result<Self, FrameMismatch> {
                self.require_same_tags("add", other)?;
                Ok(Self::new(self.body, self.base, self.expressed_in, self.vector + other.vector))
            }

            fn require_same_tags(&self, operation: &'static str, other: &Self) -> Result<(), FrameMismatch> {
                if self.expressed_in != other.expressed_in {
                    return Err(FrameMismatch {
                        operation,
                        expected: self.expressed_in,
                        got: other.expressed_in,
                    });
                }
                if self.body != other.body || self.base != other.base {
                    return Err(FrameMismatch {
                        operation,
                        expected: self.body,
                        got: other.body,
                    });
                }
                Ok(())
            }

            /// Re-expresses this quantity in `transform.after()`.
            ///
            /// # Errors
            /// Returns [`FrameMismatch`] if `transform.before() != self.expressed_in()`.
            pub fn transform_by(&self, transform: &Transform<T>) -> Result<Self, FrameMismatch> {
                if transform.before() != self.expressed_in {
                    return Err(FrameMismatch {
                        operation: concat!(stringify!($name), "::transform_by"),
                        expected: transform.before(),
                        got: self.expressed_in,
                    });
                }
                Ok(Self::new(
                    self.body,
                    self.base,
                    transform.after(),
                    transform.$act(&self.vector),
                ))
            }

            #[must_use]
            #[allow(dead_code)]
            fn transform_by_inverse(&self, transform: &Transform<T>) -> Self {
                Self::new(self.body, self.base, transform.before(), transform.$act_inv(&self.vector))
            }
        }
    };
}

tagged_spatial_quantity!(Twist, act_motion, act_motion_inv);
tagged_spatial_quantity!(SpatialAcceleration, act_motion, act_motion_inv);
tagged_spatial_quantity!(Wrench, act_force, act_force_inv);
tagged_spatial_quantity!(Momentum, act_force, act_force_inv);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Rotation3;
    use crate::vector3::Vector3;

    #[test]
    fn checked_add_rejects_differing_expressed_in() {
        let body = FrameId::new(1);
        let base = FrameId::new(0);
        let a = Twist::zero(body, base, FrameId::new(0));
        let b = Twist::zero(body, base, FrameId::new(1));
        assert!(a.checked_add(&b).is_err());
    }

    #[test]
    fn transform_by_rejects_frame_mismatch() {
        let twist = Twist::zero(FrameId::new(1), FrameId::new(0), FrameId::new(2));
        let transform = Transform::<f64>::identity(FrameId::new(0));
        assert!(twist.transform_by(&transform).is_err());
    }

    #[test]
    fn transform_by_moves_expressed_in_tag() {
        let before = FrameId::new(0);
        let after = FrameId::new(1);
        let transform = Transform::new(
            before,
            after,
            Rotation3::identity(),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let twist = Twist::new(
            FrameId::new(2),
            FrameId::new(3),
            before,
            SpatialVector::zero(),
        );
        let moved = twist.transform_by(&transform).unwrap();
        assert_eq!(moved.expressed_in(), after);
    }
}
