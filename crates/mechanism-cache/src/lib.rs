//! Scalar-generic cache registries, one per kind of per-type instance a mechanism
//! needs to amortise across scalar types: [`MechanismState`](mechanism_state::MechanismState)
//! via [`StateCache`], [`DynamicsResult`](mechanism_algorithms::DynamicsResult) via
//! [`DynamicsResultCache`], and [`SegmentedVector`](mechanism_model::SegmentedVector) via
//! [`SegmentedVectorCache`].
//!
//! This is what lets a caller re-evaluate a mechanism under `Dual<f64>` to extract a
//! Jacobian column, then under `Dual<Dual<f64>>` for a second derivative, without
//! rebuilding the spanning tree, joint layouts, or segment ranges each time: the first
//! lookup for a scalar type pays for the cast and allocation, every later lookup for
//! that same type is a hash lookup and a clone of an `Rc`.

mod dynamics_result_cache;
mod registry;
mod segmented_vector_cache;
mod state_cache;

pub use dynamics_result_cache::DynamicsResultCache;
pub use segmented_vector_cache::SegmentedVectorCache;
pub use state_cache::StateCache;
