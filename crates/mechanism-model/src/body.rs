//! Rigid bodies: the vertices of the mechanism graph.

use mechanism_spatial::{frame::FrameId, scalar::Scalar, SpatialInertia};

/// Dense identifier for a body, assigned by the owning [`crate::mechanism::Mechanism`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(u32);

impl BodyId {
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct RigidBody<T: Scalar> {
    pub id: BodyId,
    pub name: String,
    /// The frame attached to this body by default (what joint placements and spatial
    /// quantities are expressed relative to before any additional attached frame).
    pub default_frame: FrameId,
    /// Spatial inertia expressed in `default_frame`. `None` for the (massless) root body.
    pub inertia: Option<SpatialInertia<T>>,
    /// Indices into the owning mechanism's `frames` vector for frames attached to this body.
    pub attached_frames: Vec<usize>,
    /// Indices into the owning mechanism's `contact_points` vector for contact points on
    /// this body.
    pub contact_points: Vec<usize>,
}

impl<T: Scalar> RigidBody<T> {
    #[must_use]
    pub fn new(id: BodyId, name: String, default_frame: FrameId, inertia: Option<SpatialInertia<T>>) -> Self {
        Self {
            id,
            name,
            default_frame,
            inertia,
            attached_frames: Vec::new(),
            contact_points: Vec::new(),
        }
    }

    #[must_use]
    pub fn root(default_frame: FrameId) -> Self {
        Self::new(BodyId::new(0), "world".to_string(), default_frame, None)
    }

    #[must_use]
    pub fn cast<U: Scalar>(&self) -> RigidBody<U> {
        RigidBody {
            id: self.id,
            name: self.name.clone(),
            default_frame: self.default_frame,
            inertia: self.inertia.as_ref().map(SpatialInertia::cast),
            attached_frames: self.attached_frames.clone(),
            contact_points: self.contact_points.clone(),
        }
    }
}
