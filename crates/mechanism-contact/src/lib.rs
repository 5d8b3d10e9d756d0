//! Pluggable contact force models: the force-law contract ([`ContactModel`]), a
//! contact point that pairs a body location with a model ([`ContactPoint`]), and a
//! reference Hunt-Crossley-normal/Coulomb-friction implementation
//! ([`HuntCrossleyCoulombModel`]) shipped as the ambient default.

pub mod contact_point;
pub mod coulomb;
pub mod hunt_crossley;
pub mod kinematics;
pub mod model;
pub mod reference;

pub use contact_point::ContactPoint;
pub use coulomb::CoulombFriction;
pub use hunt_crossley::hunt_crossley_force;
pub use kinematics::{point_kinematics, wrench_at_origin};
pub use model::ContactModel;
pub use reference::HuntCrossleyCoulombModel;
