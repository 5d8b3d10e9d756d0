use crate::registry::TypeMap;
use mechanism_model::{SegmentLayout, SegmentedVector};
use mechanism_spatial::scalar::Scalar;
use std::cell::RefCell;
use std::rc::Rc;

/// Per-layout registry of `SegmentedVector<T>`, one per scalar type `T`.
///
/// Unlike [`crate::StateCache`], which owns a whole mechanism, this caches a single
/// flat buffer against a fixed [`SegmentLayout`] (e.g. a `q` or `v` scratch buffer
/// shared by several joints of the same dimension), so it is keyed purely by the
/// layout passed at construction rather than by anything mechanism-specific.
pub struct SegmentedVectorCache {
    layout: SegmentLayout,
    entries: TypeMap,
}

impl SegmentedVectorCache {
    #[must_use]
    pub fn new(layout: SegmentLayout) -> Self {
        Self {
            layout,
            entries: TypeMap::new(),
        }
    }

    pub fn get<T: Scalar>(&self) -> Rc<RefCell<SegmentedVector<T>>> {
        let layout = &self.layout;
        self.entries
            .get_or_insert_with::<T, _>(|| SegmentedVector::zeros(layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_sized_to_the_layout() {
        let layout = SegmentLayout::from_widths(&[1, 2, 3]);
        let cache = SegmentedVectorCache::new(layout);
        let v = cache.get::<f64>();
        assert_eq!(v.borrow().len(), 6);
    }

    #[test]
    fn repeated_lookup_for_the_same_type_returns_the_same_instance() {
        let layout = SegmentLayout::from_widths(&[1]);
        let cache = SegmentedVectorCache::new(layout);
        let a = cache.get::<f64>();
        let b = cache.get::<f64>();
        assert!(Rc::ptr_eq(&a, &b));
    }
}
