//! `TypeId`-keyed registries of `Rc<RefCell<_>>` entries, one entry per scalar type.
//!
//! A mechanism is built once under `f64`, then evaluated under however many scalar
//! types a caller needs (plain `f64` for simulation, `Dual<f64>` for one derivative
//! lane, `Dual<Dual<f64>>` for a second, and so on). Rebuilding the topology, spanning
//! tree, joint layouts, segment ranges, for every one of those would be wasted work
//! that has nothing to do with the scalar type. A registry amortises that: the first
//! lookup for a given `T` builds and caches the `T`-flavoured instance; every later
//! lookup for that same `T` returns the same `Rc`, so repeated access is allocation-free
//! and mutation through one handle is visible through every other handle for that `T`.
//!
//! Single-threaded by construction (`Rc`, not `Arc`; `RefCell`, not `Mutex`): concurrent
//! first-lookup for the same `T` is caller-serialised.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Internal `TypeId -> Rc<RefCell<V>>` map, generic over the per-type value `V`.
///
/// Shared by [`crate::StateCache`], [`crate::DynamicsResultCache`], and
/// [`crate::SegmentedVectorCache`], which differ only in what they build on first miss.
pub(crate) struct TypeMap {
    entries: RefCell<HashMap<TypeId, Box<dyn Any>>>,
}

impl TypeMap {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the entry for `T`, building it with `build` on first lookup.
    ///
    /// # Panics
    /// Panics if an entry already exists under `T`'s `TypeId` but was stored as some
    /// other `V` — this cannot happen through the public API, since every registry in
    /// this crate fixes `V` at its own construction and keys purely on `T`.
    pub(crate) fn get_or_insert_with<T: 'static, V: 'static>(
        &self,
        build: impl FnOnce() -> V,
    ) -> Rc<RefCell<V>> {
        let mut entries = self.entries.borrow_mut();
        let boxed = entries
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                tracing::debug!(
                    scalar = std::any::type_name::<T>(),
                    "cache registry miss, building new instance"
                );
                Box::new(Rc::new(RefCell::new(build()))) as Box<dyn Any>
            });
        boxed
            .downcast_ref::<Rc<RefCell<V>>>()
            .expect("cache registry entry stored under the wrong value type")
            .clone()
    }
}
