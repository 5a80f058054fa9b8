//! Type Descriptor
//!
//! Value object identifying a reflectable runtime type by its interned name,
//! together with the single-inheritance chain it descends through.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::constants::DEFAULT_ROOT_TYPE_NAME;

/// Unordered set of types
pub type TypeSet = HashSet<Type>;

/// Value Object: Runtime Type Handle
///
/// Cheap to clone and safe to share between threads. Two handles are equal
/// iff they carry the same name; a catalog guarantees names are unique, so
/// the name acts as the type identity.
///
/// Every hierarchy is a single chain ending at a root type (a type without
/// parent). The root is the "no dependency" sentinel and never a valid
/// dependency target.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::value_objects::Type;
///
/// let root = Type::root();
/// let base = Type::derive("Base", &root);
/// let derived = Type::derive("Derived", &base);
///
/// assert!(derived.is_a(&base));
/// assert!(!base.is_a(&derived));
/// assert_eq!(derived.ancestors().count(), 2);
/// ```
#[derive(Clone)]
pub struct Type {
    inner: Arc<TypeData>,
}

struct TypeData {
    name: String,
    parent: Option<Type>,
}

impl Type {
    /// Create the universal root type with the default name
    pub fn root() -> Self {
        Self::root_named(DEFAULT_ROOT_TYPE_NAME)
    }

    /// Create a root type with a custom name
    pub fn root_named<S: Into<String>>(name: S) -> Self {
        Self {
            inner: Arc::new(TypeData {
                name: name.into(),
                parent: None,
            }),
        }
    }

    /// Create a type directly inheriting from `parent`
    pub fn derive<S: Into<String>>(name: S, parent: &Type) -> Self {
        Self {
            inner: Arc::new(TypeData {
                name: name.into(),
                parent: Some(parent.clone()),
            }),
        }
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Direct parent, `None` for a root type
    pub fn parent(&self) -> Option<&Type> {
        self.inner.parent.as_ref()
    }

    /// Whether this is a root type
    pub fn is_root(&self) -> bool {
        self.inner.parent.is_none()
    }

    /// Root of this type's hierarchy
    pub fn root_type(&self) -> &Type {
        self.ancestors().last().unwrap_or(self)
    }

    /// Strict ancestors, nearest first, ending with the root
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Whether `self` is `other` or inherits from it
    pub fn is_a(&self, other: &Type) -> bool {
        self == other || self.ancestors().any(|ancestor| ancestor == other)
    }

    /// Whether `self` appears in the strict ancestor chain of `other`
    pub fn is_strict_ancestor_of(&self, other: &Type) -> bool {
        other.ancestors().any(|ancestor| ancestor == self)
    }

    /// Whether `self` and `other` lie on one inheritance line
    pub fn is_related_to(&self, other: &Type) -> bool {
        self.is_a(other) || other.is_a(self)
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner.name == other.inner.name
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.name.hash(state);
    }
}

impl PartialOrd for Type {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Type {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name().cmp(other.name())
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Type").field(&self.name()).finish()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Iterator over the strict ancestors of a [`Type`]
pub struct Ancestors<'a> {
    next: Option<&'a Type>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Type;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}
