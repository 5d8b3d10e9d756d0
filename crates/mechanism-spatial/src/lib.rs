//! Scalar-generic spatial algebra: frames, transforms, twists, wrenches, spatial
//! inertia, and the Jacobian type used to assemble them along a mechanism's tree path.
//!
//! Every quantity here is generic over [`scalar::Scalar`] rather than hard-coded to
//! `f64`, so the same mechanism topology can be evaluated under plain floating point or
//! under the forward-mode [`scalar::Dual`] scalar shipped in this crate, without
//! rewriting a single operation.

pub mod errors;
pub mod frame;
pub mod inertia;
pub mod jacobian;
pub mod matrix3;
pub mod rotation;
pub mod scalar;
pub mod spatial;
pub mod tagged;
pub mod transform;
pub mod vector3;

pub use errors::FrameMismatch;
pub use frame::FrameId;
pub use inertia::SpatialInertia;
pub use jacobian::GeometricJacobian;
pub use matrix3::{Matrix3, Symmetric3};
pub use rotation::Rotation3;
pub use scalar::{Dual, Scalar};
pub use spatial::SpatialVector;
pub use tagged::{Momentum, SpatialAcceleration, Twist, Wrench};
pub use transform::Transform;
pub use vector3::Vector3;
