//! Hand-written error enums for spatial algebra, with manual `Display`/`Debug`/
//! `std::error::Error` impls rather than a derive macro.

use crate::frame::FrameId;

/// A spatial operation composed two quantities whose frame tags disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameMismatch {
    pub operation: &'static str,
    pub expected: FrameId,
    pub got: FrameId,
}

impl std::fmt::Display for FrameMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame mismatch in {}: expected {}, got {}",
            self.operation, self.expected, self.got
        )
    }
}

impl std::error::Error for FrameMismatch {}
