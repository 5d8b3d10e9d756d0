//! Spatial inertia: mass, first moment of mass, and rotational moment about the frame
//! origin, stored compactly per the Featherstone spatial-inertia convention, tagged
//! with the frame it is expressed in.

use crate::errors::FrameMismatch;
use crate::frame::FrameId;
use crate::matrix3::Symmetric3;
use crate::scalar::Scalar;
use crate::tagged::{Momentum, Twist};
use crate::transform::Transform;
use crate::vector3::Vector3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpatialInertia<T: Scalar> {
    frame: FrameId,
    mass: T,
    /// First moment of mass, `mass * center_of_mass`, expressed in `frame`.
    first_moment: Vector3<T>,
    /// Rotational moment about `frame`'s origin (not about the center of mass).
    moment: Symmetric3<T>,
}

impl<T: Scalar> SpatialInertia<T> {
    #[must_use]
    pub fn new(frame: FrameId, mass: T, first_moment: Vector3<T>, moment: Symmetric3<T>) -> Self {
        Self {
            frame,
            mass,
            first_moment,
            moment,
        }
    }

    #[must_use]
    pub fn zero(frame: FrameId) -> Self {
        Self::new(frame, T::zero(), Vector3::zeros(), Symmetric3::zeros())
    }

    /// Builds a spatial inertia from a mass, center of mass (relative to `frame`'s
    /// origin), and rotational inertia about that center of mass.
    #[must_use]
    pub fn from_com_inertia(
        frame: FrameId,
        mass: T,
        center_of_mass: Vector3<T>,
        inertia_about_com: Symmetric3<T>,
    ) -> Self {
        // Parallel-axis theorem: moment about the origin = moment about the COM plus
        // the point-mass contribution of the COM offset.
        let c = center_of_mass;
        let shift = Symmetric3::from_diagonal(
            mass * (c.y() * c.y() + c.z() * c.z()),
            mass * (c.x() * c.x() + c.z() * c.z()),
            mass * (c.x() * c.x() + c.y() * c.y()),
        ) + Symmetric3::new(
            T::zero(),
            -mass * c.x() * c.y(),
            -mass * c.x() * c.z(),
            T::zero(),
            -mass * c.y() * c.z(),
            T::zero(),
        );
        Self::new(frame, mass, c.scale(mass), inertia_about_com + shift)
    }

    #[must_use]
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    #[must_use]
    pub fn mass(&self) -> T {
        self.mass
    }

    #[must_use]
    pub fn first_moment(&self) -> Vector3<T> {
        self.first_moment
    }

    #[must_use]
    pub fn moment(&self) -> Symmetric3<T> {
        self.moment
    }

    /// Converts this spatial inertia to another scalar type, component-wise.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> SpatialInertia<U> {
        SpatialInertia::new(self.frame, self.mass.cast(), self.first_moment.cast(), self.moment.cast())
    }

    #[must_use]
    pub fn center_of_mass(&self) -> Vector3<T> {
        if self.mass == T::zero() {
            Vector3::zeros()
        } else {
            self.first_moment.scale(T::one() / self.mass)
        }
    }

    /// Adds two inertias expressed in the same frame (e.g. composite rigid body accumulation).
    ///
    /// # Errors
    /// Returns [`FrameMismatch`] if the two inertias are not expressed in the same frame.
    pub fn checked_add(&self, other: &Self) -> Result<Self, FrameMismatch> {
        if self.frame != other.frame {
            return Err(FrameMismatch {
                operation: "SpatialInertia::add",
                expected: self.frame,
                got: other.frame,
            });
        }
        Ok(Self::new(
            self.frame,
            self.mass + other.mass,
            self.first_moment + other.first_moment,
            self.moment + other.moment,
        ))
    }

    /// Applies this inertia to a twist to produce the corresponding momentum,
    /// `h = I*v` in the shared frame.
    ///
    /// # Errors
    /// Returns [`FrameMismatch`] if the twist is not expressed in `self.frame()`.
    pub fn apply(&self, twist: &Twist<T>) -> Result<Momentum<T>, FrameMismatch> {
        if twist.expressed_in() != self.frame {
            return Err(FrameMismatch {
                operation: "SpatialInertia::apply",
                expected: self.frame,
                got: twist.expressed_in(),
            });
        }
        let v = twist.vector();
        let w = v.angular();
        let v0 = v.linear();
        let angular = self.moment * w + self.first_moment.cross(&v0);
        let linear = v0.scale(self.mass) - self.first_moment.cross(&w);
        Ok(Momentum::new(
            twist.body(),
            twist.base(),
            self.frame,
            crate::spatial::SpatialVector::from_parts(angular, linear),
        ))
    }

    /// Re-expresses this spatial inertia in the frame `transform.after()`.
    ///
    /// # Errors
    /// Returns [`FrameMismatch`] if `transform.before() != self.frame()`.
    pub fn transform_by(&self, transform: &Transform<T>) -> Result<Self, FrameMismatch> {
        if transform.before() != self.frame {
            return Err(FrameMismatch {
                operation: "SpatialInertia::transform_by",
                expected: transform.before(),
                got: self.frame,
            });
        }
        let r = *transform.rotation().matrix();
        let p = transform.translation();
        let rh = r * self.first_moment;
        let h_new = rh + p.scale(self.mass);
        let ic_rotated = r * self.moment.to_matrix3() * r.transpose();
        let moment_new = ic_rotated - p.skew() * rh.skew() - h_new.skew() * p.skew();
        Ok(Self::new(
            transform.after(),
            self.mass,
            h_new,
            symmetrize(moment_new),
        ))
    }
}

/// Averages off-diagonal pairs to recover an exactly symmetric matrix from one that is
/// symmetric in exact arithmetic but may drift under scalar rounding.
fn symmetrize<T: Scalar>(m: crate::matrix3::Matrix3<T>) -> Symmetric3<T> {
    let half = T::from_f64(0.5);
    Symmetric3::new(
        m.get(0, 0),
        (m.get(0, 1) + m.get(1, 0)) * half,
        (m.get(0, 2) + m.get(2, 0)) * half,
        m.get(1, 1),
        (m.get(1, 2) + m.get(2, 1)) * half,
        m.get(2, 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::Rotation3;
    use approx::assert_relative_eq;

    #[test]
    fn point_mass_at_origin_has_zero_angular_momentum_from_linear_velocity() {
        let frame = FrameId::new(0);
        let inertia = SpatialInertia::from_com_inertia(
            frame,
            2.0,
            Vector3::zeros(),
            Symmetric3::identity(),
        );
        let twist = Twist::new(
            FrameId::new(1),
            FrameId::new(0),
            frame,
            crate::spatial::SpatialVector::from_parts(Vector3::zeros(), Vector3::new(3.0, 0.0, 0.0)),
        );
        let momentum = inertia.apply(&twist).unwrap();
        assert_relative_eq!(momentum.vector().angular().norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(momentum.vector().linear().x(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn mass_is_invariant_under_transform() {
        let frame_a = FrameId::new(0);
        let frame_b = FrameId::new(1);
        let inertia = SpatialInertia::from_com_inertia(
            frame_a,
            1.5,
            Vector3::new(0.1, 0.0, 0.0),
            Symmetric3::from_diagonal(1.0, 2.0, 3.0),
        );
        let transform = Transform::new(
            frame_a,
            frame_b,
            Rotation3::from_axis_angle(&Vector3::new(0.0, 0.0, 1.0), 0.4),
            Vector3::new(1.0, 0.0, 0.0),
        );
        let moved = inertia.transform_by(&transform).unwrap();
        assert_relative_eq!(moved.mass(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn checked_add_rejects_frame_mismatch() {
        let a = SpatialInertia::<f64>::zero(FrameId::new(0));
        let b = SpatialInertia::<f64>::zero(FrameId::new(1));
        assert!(a.checked_add(&b).is_err());
    }
}
