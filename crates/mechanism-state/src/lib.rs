//! Lazily-cached mutable mechanism state: configuration, velocity, additional (contact)
//! state, and the per-body kinematic/inertial scratch arrays that dynamics algorithms
//! read through.

pub mod cache;
pub mod errors;
pub mod queries;
pub mod state;
pub mod update;

pub use errors::StateError;
pub use state::MechanismState;
