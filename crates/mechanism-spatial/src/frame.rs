//! Opaque frame identifiers, tagging every spatial quantity so that operations between
//! quantities expressed in disagreeing frames are caught rather than silently computed.

/// A dense identifier for a coordinate frame, allocated by the owning `Mechanism`.
///
/// A dense `u32` id wrapped in a newtype so a frame id can never be confused with a
/// body or joint id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u32);

impl FrameId {
    #[must_use]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for FrameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}
