//! In-memory introspection provider
//!
//! Holds declared types and methods in plain maps. Suitable as the output
//! of a build-time metadata generator, for tests, and for catalogs loaded
//! from documents.

use std::collections::HashMap;

use tracing::trace;
use wirebox_domain::constants::DEFAULT_ROOT_TYPE_NAME;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{MetaMethod, Type, TypesByName};

use crate::constants::{IN_MEMORY_INTROSPECTOR_NAME, TYPE_TOKEN_DECORATIONS};

/// In-memory type catalog
///
/// Every declared type descends from the catalog's single root. A parent
/// must be declared before its children, which rules out inheritance cycles
/// by construction.
pub struct InMemoryTypeCatalog {
    root: Type,
    types: TypesByName,
    declared_methods: HashMap<Type, Vec<MetaMethod>>,
}

impl InMemoryTypeCatalog {
    /// Create an empty catalog rooted at the default root type
    pub fn new() -> Self {
        Self::with_root_name(DEFAULT_ROOT_TYPE_NAME)
    }

    /// Create an empty catalog rooted at a custom root type
    pub fn with_root_name<S: Into<String>>(root_name: S) -> Self {
        let root = Type::root_named(root_name);
        Self {
            types: TypesByName::new([root.clone()]),
            root,
            declared_methods: HashMap::new(),
        }
    }

    /// Declare a type inheriting from `parent`, or from the root when `None`
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCatalog`] when the name is taken,
    /// [`Error::InvalidType`] when the parent has not been declared.
    pub fn add_type(&mut self, name: &str, parent: Option<&str>) -> Result<Type> {
        if self.types.get(name).is_some() {
            return Err(Error::invalid_catalog(format!(
                "type {name} declared more than once"
            )));
        }
        let parent = match parent {
            Some(parent_name) => self.types.get(parent_name).cloned().ok_or_else(|| {
                Error::invalid_type(name, format!("parent {parent_name} is not declared"))
            })?,
            None => self.root.clone(),
        };

        let t = Type::derive(name, &parent);
        self.types.insert(t.clone());
        trace!(name, parent = %parent, "Declared type");
        Ok(t)
    }

    /// Declare a method on its enclosing type
    ///
    /// # Errors
    ///
    /// [`Error::InvalidType`] when the enclosing type is not declared here
    /// or is the root, [`Error::InvalidCatalog`] when the same signature is
    /// already declared.
    pub fn add_method(&mut self, method: MetaMethod) -> Result<()> {
        let owner = method.enclosing_type().clone();
        if !self.types.contains(&owner) {
            return Err(Error::invalid_type(
                owner.name(),
                "enclosing type is not declared",
            ));
        }
        if owner.is_root() {
            return Err(Error::invalid_type(
                owner.name(),
                "root type cannot declare methods",
            ));
        }

        let methods = self.declared_methods.entry(owner).or_default();
        if methods.contains(&method) {
            return Err(Error::invalid_catalog(format!(
                "method {method} declared more than once"
            )));
        }
        methods.push(method);
        Ok(())
    }

    /// Root type of the catalog
    pub fn root(&self) -> &Type {
        &self.root
    }

    /// Declared type by name, the root included
    pub fn type_named(&self, name: &str) -> Option<Type> {
        self.types.get(name).cloned()
    }

    /// Every declared type except the root, in declaration order
    ///
    /// This is the registry dependency targets are validated against.
    pub fn known_types(&self) -> TypesByName {
        self.types
            .iter()
            .filter(|t| !t.is_root())
            .cloned()
            .collect()
    }

    /// Methods declared directly on `t`
    pub fn declared_methods(&self, t: &Type) -> &[MetaMethod] {
        self.declared_methods
            .get(t)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for InMemoryTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeIntrospector for InMemoryTypeCatalog {
    fn methods(&self, t: &Type) -> Vec<MetaMethod> {
        let Some(declared) = self.types.get(t.name()) else {
            return Vec::new();
        };

        let mut chain: Vec<&Type> = std::iter::once(declared)
            .chain(declared.ancestors())
            .filter(|ancestor| !ancestor.is_root())
            .collect();
        chain.reverse();

        chain
            .into_iter()
            .flat_map(|owner| self.declared_methods(owner).iter().cloned())
            .collect()
    }

    fn resolve_type(&self, type_token: &str) -> Option<Type> {
        let name = type_token.trim().trim_end_matches(TYPE_TOKEN_DECORATIONS);
        self.type_named(name)
    }

    fn introspector_name(&self) -> &str {
        IN_MEMORY_INTROSPECTOR_NAME
    }
}

impl std::fmt::Debug for InMemoryTypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTypeCatalog")
            .field("root", &self.root)
            .field("types", &self.types.len())
            .field("methods", &self.declared_methods.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
