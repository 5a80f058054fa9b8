//! Registry of known types keyed by name

use std::collections::HashMap;

use super::type_info::Type;

/// Value Object: Types By Name
///
/// Insertion-ordered, name-unique collection of the types a container knows
/// about. Lookups by name are the only way a dependency target is accepted
/// as "known".
///
/// ## Business Rules
///
/// - No two entries share a name; inserting a name twice keeps the first entry
/// - Iteration follows insertion order
#[derive(Debug, Clone, Default)]
pub struct TypesByName {
    types: Vec<Type>,
    index: HashMap<String, usize>,
}

impl TypesByName {
    /// Build a registry, keeping the first occurrence of every name
    pub fn new<I: IntoIterator<Item = Type>>(types: I) -> Self {
        let mut registry = Self::default();
        for t in types {
            registry.insert(t);
        }
        registry
    }

    /// Insert a type; returns `false` if its name was already present
    pub fn insert(&mut self, t: Type) -> bool {
        if self.index.contains_key(t.name()) {
            return false;
        }
        self.index.insert(t.name().to_string(), self.types.len());
        self.types.push(t);
        true
    }

    /// Look a type up by name
    pub fn get(&self, name: &str) -> Option<&Type> {
        self.index.get(name).map(|&position| &self.types[position])
    }

    /// Whether `t` is registered under its own name
    pub fn contains(&self, t: &Type) -> bool {
        self.get(t.name()).is_some_and(|known| known == t)
    }

    /// All types in insertion order
    pub fn all(&self) -> &[Type] {
        &self.types
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Type> {
        self.types.iter()
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<Type> for TypesByName {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a TypesByName {
    type Item = &'a Type;
    type IntoIter = std::slice::Iter<'a, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
