//! Errors surfaced by state queries and mutators.

use mechanism_model::{DimensionMismatch, StaleState};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The state was built for a mechanism generation that no longer matches the
    /// mechanism's current generation (the mechanism was mutated after the state was built).
    Stale(StaleState),
    /// A `set_configuration!`/`set_velocity!` argument had the wrong length.
    WrongSize(DimensionMismatch),
}

impl Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::Stale(e) => Display::fmt(e, f),
            StateError::WrongSize(e) => Display::fmt(e, f),
        }
    }
}

impl std::error::Error for StateError {}

impl From<StaleState> for StateError {
    fn from(value: StaleState) -> Self {
        StateError::Stale(value)
    }
}

impl From<DimensionMismatch> for StateError {
    fn from(value: DimensionMismatch) -> Self {
        StateError::WrongSize(value)
    }
}
