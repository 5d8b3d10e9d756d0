//! Errors for mechanism construction and topology queries: `TopologyError`,
//! `DimensionMismatch`, `ArgumentError`, and `StaleState`, each a hand-written
//! `Display`/`std::error::Error` impl rather than a derive macro.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// `attach!` would introduce a cycle in the spanning tree.
    WouldCreateCycle { predecessor: usize, successor: usize },
    /// A body id was not found in the mechanism.
    UnknownBody(usize),
    /// A joint id was not found in the mechanism.
    UnknownJoint(usize),
}

impl Display for TopologyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopologyError::WouldCreateCycle {
                predecessor,
                successor,
            } => write!(
                f,
                "attaching body {successor} to body {predecessor} would create a cycle"
            ),
            TopologyError::UnknownBody(id) => write!(f, "unknown body id {id}"),
            TopologyError::UnknownJoint(id) => write!(f, "unknown joint id {id}"),
        }
    }
}

impl std::error::Error for TopologyError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub name: &'static str,
    pub expected: usize,
    pub got: usize,
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "incorrect size for '{}': expected {}, got {}",
            self.name, self.expected, self.got
        )
    }
}

impl std::error::Error for DimensionMismatch {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    NonPositiveSemidefiniteInertia,
    NegativeMass,
    NonContiguousSegmentRange,
}

impl Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentError::NonPositiveSemidefiniteInertia => {
                write!(f, "rotational moment is not positive semidefinite")
            }
            ArgumentError::NegativeMass => write!(f, "mass must be non-negative"),
            ArgumentError::NonContiguousSegmentRange => {
                write!(f, "segment ranges must cover [1..n] exactly once, in joint-id order")
            }
        }
    }
}

impl std::error::Error for ArgumentError {}

/// A `MechanismState` or `DynamicsResult` built for a prior topology generation was used
/// after the owning mechanism was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleState {
    pub expected_generation: u64,
    pub got_generation: u64,
}

impl Display for StaleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "state was built for mechanism generation {}, but the mechanism is now at generation {}",
            self.got_generation, self.expected_generation
        )
    }
}

impl std::error::Error for StaleState {}
