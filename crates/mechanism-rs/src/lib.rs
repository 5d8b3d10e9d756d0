//! # **`mechanism`**: a scalar-generic rigid-body dynamics core
//!
//! `mechanism` computes forward and inverse dynamics, kinematic transforms, Jacobians,
//! momentum, and energy for a tree (or tree plus loop-closure) of rigid bodies
//! connected by joints. Every algorithm is generic over the scalar type a mechanism is
//! evaluated under: plain `f64` for simulation, or the shipped forward-mode dual
//! number for automatic differentiation, without touching the algorithm code itself.
//!
//! This crate is the facade: it re-exports the workspace's other crates under short
//! names and collects the common entry points into [`prelude`].
//!
//! ## Crates
//! - [`spatial`]: frames, transforms, twists, wrenches, spatial inertia, the scalar
//!   contract ([`spatial::scalar::Scalar`]) and its reference dual-number
//!   implementation ([`spatial::scalar::Dual`]).
//! - [`joint`]: joint variants (revolute, prismatic, fixed, floating, planar) and
//!   their configuration/velocity kinematics.
//! - [`model`]: the mechanism graph, its spanning tree and loop closures, and
//!   segmented-vector indexing.
//! - [`state`]: [`state::MechanismState`], the lazily-cached per-body kinematic and
//!   inertial state a mechanism is evaluated at.
//! - [`algorithms`]: inverse dynamics (RNEA), the composite rigid body mass matrix,
//!   bias forces, forward dynamics, momentum, and Jacobians.
//! - [`cache`]: the scalar-generic registry that amortises a mechanism's topology
//!   across the several scalar types it gets evaluated under.
//! - [`contact`]: the pluggable contact force-law interface and a reference
//!   Hunt-Crossley/Coulomb implementation.
//! - [`dynamics`]: [`dynamics::dynamics`], which folds contact force evaluation into
//!   forward dynamics for mechanisms carrying contact points.
//!
//! Parsing a model description (e.g. URDF) into a [`model::Mechanism`] and driving a
//! time-stepping simulation loop around [`dynamics::dynamics`] are both external
//! collaborators this crate does not provide.

pub use mechanism_algorithms as algorithms;
pub use mechanism_cache as cache;
pub use mechanism_contact as contact;
pub use mechanism_joint as joint;
pub use mechanism_model as model;
pub use mechanism_spatial as spatial;
pub use mechanism_state as state;

pub mod dynamics;
pub mod prelude;
