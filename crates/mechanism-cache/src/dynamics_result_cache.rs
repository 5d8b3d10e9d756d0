use crate::registry::TypeMap;
use mechanism_algorithms::DynamicsResult;
use mechanism_spatial::scalar::Scalar;
use std::cell::RefCell;
use std::rc::Rc;

/// Per-mechanism registry of `DynamicsResult<T>`, one per scalar type `T`.
///
/// Sized by the velocity width `nv` at construction; the result is reset to an
/// all-zero, unconstrained `v̇` on first lookup for each `T`.
pub struct DynamicsResultCache {
    nv: usize,
    entries: TypeMap,
}

impl DynamicsResultCache {
    #[must_use]
    pub fn new(nv: usize) -> Self {
        Self {
            nv,
            entries: TypeMap::new(),
        }
    }

    pub fn get<T: Scalar>(&self) -> Rc<RefCell<DynamicsResult<T>>> {
        let nv = self.nv;
        self.entries
            .get_or_insert_with::<T, _>(|| DynamicsResult::unconstrained(vec![T::zero(); nv]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_sized_to_the_velocity_width() {
        let cache = DynamicsResultCache::new(3);
        let result = cache.get::<f64>();
        assert_eq!(result.borrow().vdot.len(), 3);
    }

    #[test]
    fn repeated_lookup_for_the_same_type_returns_the_same_instance() {
        let cache = DynamicsResultCache::new(2);
        let a = cache.get::<f64>();
        let b = cache.get::<f64>();
        assert!(Rc::ptr_eq(&a, &b));
    }
}
