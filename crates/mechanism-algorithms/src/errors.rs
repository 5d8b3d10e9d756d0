//! Errors surfaced by the dynamics algorithms, layered on top of [`mechanism_model`]'s and
//! [`mechanism_state`]'s error kinds.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmsError {
    State(mechanism_state::StateError),
    WrongSize(mechanism_model::DimensionMismatch),
    /// The mass matrix's Cholesky/LDLT factorization hit a non-positive pivot: the
    /// mechanism's generalized inertia is not positive definite at this configuration.
    SingularMassMatrix,
    /// The loop-closure constraint Jacobian's Schur complement was not positive definite:
    /// the mechanism's non-tree joints impose redundant or conflicting constraints.
    RedundantConstraints,
}

impl Display for AlgorithmsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmsError::State(e) => Display::fmt(e, f),
            AlgorithmsError::WrongSize(e) => Display::fmt(e, f),
            AlgorithmsError::SingularMassMatrix => {
                write!(f, "mass matrix is not positive definite: Cholesky and LDLT factorization both failed")
            }
            AlgorithmsError::RedundantConstraints => {
                write!(f, "loop-closure constraint Jacobian is rank-deficient")
            }
        }
    }
}

impl std::error::Error for AlgorithmsError {}

impl From<mechanism_state::StateError> for AlgorithmsError {
    fn from(value: mechanism_state::StateError) -> Self {
        AlgorithmsError::State(value)
    }
}

impl From<mechanism_model::DimensionMismatch> for AlgorithmsError {
    fn from(value: mechanism_model::DimensionMismatch) -> Self {
        AlgorithmsError::WrongSize(value)
    }
}
