//! Defines **joint limits** and related operations.

use mechanism_spatial::scalar::Scalar;

/// A joint limit, defining the physical constraints and dynamical properties of a joint.
#[derive(Clone, Debug, PartialEq)]
pub struct JointLimits<T: Scalar> {
    /// Maximum torque/force that can be applied by the joint.
    pub effort: f64,
    /// Maximum velocity of the joint.
    pub velocity: f64,
    /// Minimum configuration of the joint.
    pub min_configuration: Vec<T>,
    /// Maximum configuration of the joint.
    pub max_configuration: Vec<T>,
    /// Joint friction coefficient.
    pub friction: f64,
    /// Joint damping coefficient.
    pub damping: f64,
    /// Dry friction loss.
    pub friction_loss: f64,
}

impl<T: Scalar> JointLimits<T> {
    /// Creates a new [`JointLimits`] with the given parameters.
    #[must_use]
    pub fn new(
        effort: f64,
        velocity: f64,
        min_configuration: Vec<T>,
        max_configuration: Vec<T>,
        friction: f64,
        damping: f64,
        friction_loss: f64,
    ) -> Self {
        Self {
            effort,
            velocity,
            min_configuration,
            max_configuration,
            friction,
            damping,
            friction_loss,
        }
    }

    /// Creates a new unbounded [`JointLimits`], with infinite limits and zero friction/damping.
    #[must_use]
    pub fn new_unbounded(nq: usize) -> Self {
        Self {
            effort: f64::INFINITY,
            velocity: f64::INFINITY,
            min_configuration: vec![T::from_f64(f64::NEG_INFINITY); nq],
            max_configuration: vec![T::from_f64(f64::INFINITY); nq],
            friction: 0.0,
            damping: 0.0,
            friction_loss: 0.0,
        }
    }

    /// Converts this limit set to another scalar type, component-wise.
    #[must_use]
    pub fn cast<U: Scalar>(&self) -> JointLimits<U> {
        JointLimits {
            effort: self.effort,
            velocity: self.velocity,
            min_configuration: self.min_configuration.iter().map(|v| v.cast()).collect(),
            max_configuration: self.max_configuration.iter().map(|v| v.cast()).collect(),
            friction: self.friction,
            damping: self.damping,
            friction_loss: self.friction_loss,
        }
    }
}
