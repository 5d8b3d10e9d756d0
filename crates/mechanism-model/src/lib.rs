//! The mechanism graph built on top of the scalar-generic spatial algebra and joint
//! crates: rigid bodies, named frames, and the tree/non-tree joints connecting them.

pub mod body;
pub mod errors;
pub mod frame;
pub mod mechanism;
pub mod segmented_vector;

pub use body::{BodyId, RigidBody};
pub use errors::{ArgumentError, DimensionMismatch, StaleState, TopologyError};
pub use frame::{Frame, FrameType};
pub use mechanism::{Joint, JointId, Mechanism, STANDARD_GRAVITY, WORLD_ID};
pub use segmented_vector::{SegmentLayout, SegmentedVector};
