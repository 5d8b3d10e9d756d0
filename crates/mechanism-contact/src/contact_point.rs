//! A contact point attached to a body, paired with the force law it evaluates under.

use crate::model::ContactModel;
use mechanism_model::BodyId;
use mechanism_spatial::scalar::Scalar;
use mechanism_spatial::Vector3;

/// A point fixed in `body`'s default frame, at `location`, evaluated under `model`
/// during each dynamics step.
pub struct ContactPoint<T: Scalar> {
    pub body: BodyId,
    pub location: Vector3<T>,
    pub model: Box<dyn ContactModel<T>>,
}

impl<T: Scalar> ContactPoint<T> {
    #[must_use]
    pub fn new(body: BodyId, location: Vector3<T>, model: Box<dyn ContactModel<T>>) -> Self {
        Self {
            body,
            location,
            model,
        }
    }

    #[must_use]
    pub fn state_size(&self) -> usize {
        self.model.state_size()
    }

    #[must_use]
    pub fn zero_state(&self) -> Vec<T> {
        self.model.zero_state()
    }
}
