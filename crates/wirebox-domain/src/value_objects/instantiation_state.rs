//! Instantiation State
//!
//! Immutable snapshot of which concrete type backs each abstract type and
//! which instances exist. The runtime engine builds a candidate state before
//! committing a rebinding and compares it to the previous one; any
//! difference is a resolution change to reconcile.

use std::collections::{HashMap, HashSet};

use super::object_handle::ObjectHandle;
use super::type_info::Type;

/// Abstract (interface) type to the concrete type implementing it
pub type ImplementedByMapping = HashMap<Type, Type>;

/// Type to the instance created for it
pub type Implementations = HashMap<Type, ObjectHandle>;

/// Value Object: Instantiation State
///
/// Equality is component-wise structural equality of both maps; object
/// handles compare by instance identity. A change never mutates a state in
/// place, the `with_*` builders return a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstantiationState {
    available_types: ImplementedByMapping,
    objects: Implementations,
}

impl InstantiationState {
    /// Snapshot the given bindings and instances
    pub fn new(available_types: ImplementedByMapping, objects: Implementations) -> Self {
        Self {
            available_types,
            objects,
        }
    }

    /// Abstract to concrete bindings
    pub fn available_types(&self) -> &ImplementedByMapping {
        &self.available_types
    }

    /// Created instances
    pub fn objects(&self) -> &Implementations {
        &self.objects
    }

    /// Concrete type bound to `interface`
    pub fn implementation_of(&self, interface: &Type) -> Option<&Type> {
        self.available_types.get(interface)
    }

    /// Instance created for `t`
    pub fn object_of(&self, t: &Type) -> Option<&ObjectHandle> {
        self.objects.get(t)
    }

    /// New state with `interface` bound to `implementation`
    #[must_use]
    pub fn with_implementation(&self, interface: Type, implementation: Type) -> Self {
        let mut available_types = self.available_types.clone();
        available_types.insert(interface, implementation);
        Self::new(available_types, self.objects.clone())
    }

    /// New state with `object` recorded as the instance of `t`
    #[must_use]
    pub fn with_object(&self, t: Type, object: ObjectHandle) -> Self {
        let mut objects = self.objects.clone();
        objects.insert(t, object);
        Self::new(self.available_types.clone(), objects)
    }

    /// Types whose binding or instance differs from `previous`
    ///
    /// Covers keys added, removed, or mapped to something else in either map.
    pub fn changed_types(&self, previous: &Self) -> HashSet<Type> {
        let mut changed = diff_keys(&self.available_types, &previous.available_types);
        changed.extend(diff_keys(&self.objects, &previous.objects));
        changed
    }
}

fn diff_keys<V: PartialEq>(current: &HashMap<Type, V>, previous: &HashMap<Type, V>) -> HashSet<Type> {
    let mut changed: HashSet<Type> = current
        .iter()
        .filter(|(key, value)| previous.get(*key) != Some(*value))
        .map(|(key, _)| key.clone())
        .collect();
    changed.extend(
        previous
            .keys()
            .filter(|key| !current.contains_key(*key))
            .cloned(),
    );
    changed
}
