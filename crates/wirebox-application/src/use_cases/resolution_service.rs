//! Resolution Service Use Case
//!
//! Binds the resolution algorithms to one introspector and registry snapshot,
//! applies the configured duplicate policy, and optionally memoizes
//! dependency sets per type.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use wirebox_domain::error::Result;
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{Dependencies, FactoryMethod, Type, TypeSet, TypesByName};

use crate::domain_services::{
    extract_dependencies, extract_interfaces, make_factory_method, validate_unique_targets,
};
use crate::ports::services::ResolutionServiceInterface;

/// How distinct setters requiring the same type are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep every setter as its own dependency
    #[default]
    Permissive,
    /// Fail with `DependencyDuplicated`
    Strict,
}

/// Resolution service options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverOptions {
    /// Duplicate target handling
    pub duplicate_policy: DuplicatePolicy,
    /// Memoize successful dependency extraction per type
    pub cache_enabled: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Permissive,
            cache_enabled: true,
        }
    }
}

/// Resolution service implementation
///
/// Types are immutable for the process lifetime, so a cached dependency set
/// never goes stale. Failures are not cached and are recomputed (and
/// reported again) on every call.
pub struct ResolutionServiceImpl {
    introspector: Arc<dyn TypeIntrospector>,
    known_types: TypesByName,
    options: ResolverOptions,
    cache: DashMap<Type, Dependencies>,
}

impl ResolutionServiceImpl {
    /// Create a service with default options
    pub fn new(introspector: Arc<dyn TypeIntrospector>, known_types: TypesByName) -> Self {
        Self::with_options(introspector, known_types, ResolverOptions::default())
    }

    /// Create a service with explicit options
    pub fn with_options(
        introspector: Arc<dyn TypeIntrospector>,
        known_types: TypesByName,
        options: ResolverOptions,
    ) -> Self {
        Self {
            introspector,
            known_types,
            options,
            cache: DashMap::new(),
        }
    }

    /// Options in effect
    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Number of memoized dependency sets
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop every memoized dependency set
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn compute_dependencies(&self, t: &Type) -> Result<Dependencies> {
        let dependencies = extract_dependencies(self.introspector.as_ref(), &self.known_types, t)?;
        if self.options.duplicate_policy == DuplicatePolicy::Strict {
            validate_unique_targets(t, &dependencies)?;
        }
        Ok(dependencies)
    }
}

impl ResolutionServiceInterface for ResolutionServiceImpl {
    fn known_types(&self) -> &TypesByName {
        &self.known_types
    }

    fn interfaces(&self, t: &Type) -> TypeSet {
        extract_interfaces(t)
    }

    fn dependencies(&self, t: &Type) -> Result<Dependencies> {
        if !self.options.cache_enabled {
            return self.compute_dependencies(t);
        }
        if let Some(cached) = self.cache.get(t) {
            return Ok(cached.value().clone());
        }

        let dependencies = self.compute_dependencies(t)?;
        debug!(owner = %t, "Caching dependency set");
        self.cache.insert(t.clone(), dependencies.clone());
        Ok(dependencies)
    }

    fn factory_method(&self, target: &Type, factory_type: &Type) -> Result<FactoryMethod> {
        make_factory_method(self.introspector.as_ref(), target, factory_type)
    }
}

impl fmt::Debug for ResolutionServiceImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionServiceImpl")
            .field("introspector", &self.introspector.introspector_name())
            .field("known_types", &self.known_types.len())
            .field("options", &self.options)
            .field("cached", &self.cache.len())
            .finish()
    }
}
