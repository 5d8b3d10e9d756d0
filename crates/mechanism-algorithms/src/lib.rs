//! Dynamics algorithms over [`mechanism_state::MechanismState`]: inverse dynamics (RNEA),
//! the composite rigid body mass matrix, bias forces, forward dynamics (mass matrix
//! solved via [`linalg::Cholesky`], falling back to [`linalg::Ldlt`] on a near-singular
//! pivot, with Lagrange-multiplier loop-closure handling), the momentum matrix, and
//! geometric Jacobians between two arbitrary bodies or at an arbitrary body-fixed point.

pub mod bias;
pub mod errors;
pub mod forward_dynamics;
pub mod inverse_dynamics;
pub mod jacobian;
pub mod linalg;
pub mod mass_matrix;
pub mod momentum;
pub mod result;
mod spatial_ops;

pub use bias::{bias_forces, bias_forces_with_external};
pub use errors::AlgorithmsError;
pub use forward_dynamics::{forward_dynamics, forward_dynamics_with_external};
pub use inverse_dynamics::inverse_dynamics;
pub use jacobian::{geometric_jacobian, point_jacobian, relative_jacobian};
pub use linalg::{Cholesky, Ldlt, MassMatrixSolve};
pub use mass_matrix::mass_matrix;
pub use momentum::{momentum, momentum_matrix};
pub use result::DynamicsResult;
