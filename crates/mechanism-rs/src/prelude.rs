//! The common entry points, re-exported flat so a caller can `use mechanism_rs::prelude::*;`
//! instead of reaching into each sub-crate individually.

// Model
pub use crate::model::{BodyId, JointId, Mechanism, STANDARD_GRAVITY, WORLD_ID};

// Joints
pub use crate::joint::{JointLimits, JointModel, JointType, JointWrapper};

// State
pub use crate::state::{MechanismState, StateError};

// Algorithms
pub use crate::algorithms::{
    bias_forces, bias_forces_with_external, forward_dynamics, forward_dynamics_with_external,
    geometric_jacobian, inverse_dynamics, mass_matrix, momentum, momentum_matrix, point_jacobian,
    relative_jacobian, AlgorithmsError, DynamicsResult,
};

// Cache registry
pub use crate::cache::{DynamicsResultCache, SegmentedVectorCache, StateCache};

// Contact
pub use crate::contact::{ContactModel, ContactPoint, HuntCrossleyCoulombModel};

// Combined contact + dynamics step
pub use crate::dynamics::{dynamics, ContactInput};

// Spatial
pub use crate::spatial::scalar::{Dual, Scalar};
pub use crate::spatial::{FrameId, Rotation3, SpatialInertia, Symmetric3, Transform, Twist, Vector3, Wrench};
