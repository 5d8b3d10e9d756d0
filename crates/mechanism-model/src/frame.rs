//! Named frames attached to a rigid body, in addition to the body's own default frame.

use mechanism_spatial::{scalar::Scalar, transform::Transform};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameType {
    /// Operational frames for task space control.
    Operational,
    /// Frames directly associated to joints.
    Joint,
    /// Frames for fixed joints.
    Fixed,
    /// Frames attached to mechanism bodies.
    Body,
    /// Frames for sensor locations.
    Sensor,
}

#[derive(Clone, Debug)]
pub struct Frame<T: Scalar> {
    /// Name of the frame.
    pub name: String,
    /// Index of the body this frame is attached to.
    pub parent_body: usize,
    /// Type of the frame.
    pub frame_type: FrameType,
    /// Placement of the frame with respect to the parent body's default frame.
    pub placement: Transform<T>,
}

impl<T: Scalar> Frame<T> {
    #[must_use]
    pub fn new(
        name: String,
        parent_body: usize,
        frame_type: FrameType,
        placement: Transform<T>,
    ) -> Self {
        Frame {
            name,
            parent_body,
            frame_type,
            placement,
        }
    }

    #[must_use]
    pub fn cast<U: Scalar>(&self) -> Frame<U> {
        Frame {
            name: self.name.clone(),
            parent_body: self.parent_body,
            frame_type: self.frame_type,
            placement: self.placement.cast(),
        }
    }
}
