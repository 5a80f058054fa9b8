//! Introspection Port
//!
//! Reflection backend consulted by dependency extraction and factory
//! resolution. The core never enumerates methods or resolves type tokens on
//! its own; everything it knows about a type comes through this trait.
//!
//! Implementations must answer consistently for the duration of a
//! resolution pass (no live redefinition of types).

use crate::value_objects::{MetaMethod, Type};

/// Reflection oracle over a closed set of types
pub trait TypeIntrospector: Send + Sync {
    /// Methods exposed by `t`
    ///
    /// Includes methods declared on every ancestor of `t` except the root
    /// type, each reported with the type that declares it. Ancestor methods
    /// come before descendant ones.
    fn methods(&self, t: &Type) -> Vec<MetaMethod>;

    /// Resolve a declared type token to a reflectable type
    ///
    /// Returns `None` for tokens naming primitives or unknown types.
    fn resolve_type(&self, type_token: &str) -> Option<Type>;

    /// Name of the backend, for diagnostics
    fn introspector_name(&self) -> &str;
}
