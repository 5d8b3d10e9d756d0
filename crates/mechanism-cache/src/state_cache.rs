use crate::registry::TypeMap;
use mechanism_model::Mechanism;
use mechanism_spatial::scalar::Scalar;
use mechanism_state::MechanismState;
use std::cell::RefCell;
use std::rc::Rc;

/// Per-mechanism registry of `MechanismState<T>`, one per scalar type `T`.
///
/// Holds the mechanism's canonical `f64` parameters and casts them into `T` on first
/// lookup for that type, via [`Mechanism::cast`] (itself built on [`Scalar::cast`]).
pub struct StateCache {
    mechanism: Mechanism<f64>,
    entries: TypeMap,
}

impl StateCache {
    #[must_use]
    pub fn new(mechanism: Mechanism<f64>) -> Self {
        Self {
            mechanism,
            entries: TypeMap::new(),
        }
    }

    /// Returns the cached `MechanismState<T>`, building it at zero configuration and
    /// velocity on first lookup for `T`.
    pub fn get<T: Scalar>(&self) -> Rc<RefCell<MechanismState<T>>> {
        let mechanism = &self.mechanism;
        self.entries
            .get_or_insert_with::<T, _>(|| MechanismState::zero(mechanism.cast::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechanism_joint::revolute::JointModelRevolute;
    use mechanism_model::STANDARD_GRAVITY;
    use mechanism_spatial::frame::FrameId;
    use mechanism_spatial::scalar::Dual;
    use mechanism_spatial::{SpatialInertia, Symmetric3, Transform, Vector3};

    fn single_link_mechanism() -> Mechanism<f64> {
        let mut mechanism = Mechanism::new(*STANDARD_GRAVITY);
        let root = mechanism.root_body();
        let root_frame = mechanism.bodies()[mechanism_model::WORLD_ID].default_frame;
        let inertia = SpatialInertia::from_com_inertia(
            FrameId::new(0),
            1.0,
            Vector3::new(0.0, 0.0, 0.0),
            Symmetric3::identity(),
        );
        mechanism
            .attach(
                root,
                "link",
                mechanism_joint::JointWrapper::revolute(JointModelRevolute::new_rz()),
                Transform::identity(root_frame),
                Some(inertia),
            )
            .unwrap();
        mechanism
    }

    #[test]
    fn repeated_lookup_for_the_same_type_returns_the_same_instance() {
        let cache = StateCache::new(single_link_mechanism());
        let a = cache.get::<f64>();
        let b = cache.get::<f64>();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn different_scalar_types_get_independent_instances() {
        let cache = StateCache::new(single_link_mechanism());
        let plain = cache.get::<f64>();
        let dual = cache.get::<Dual<f64>>();
        plain.borrow_mut().set_velocity(&[3.0]).unwrap();
        assert_eq!(dual.borrow().velocity()[0], Dual::constant(0.0));
    }
}
