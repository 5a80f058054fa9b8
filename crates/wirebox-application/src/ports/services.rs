//! Application Service Port Interfaces
//!
//! Contracts the container runtime programs against.

use std::collections::HashMap;

use wirebox_domain::error::Result;
use wirebox_domain::value_objects::{Dependencies, FactoryMethod, Type, TypeSet, TypesByName};

// ============================================================================
// Resolution Service Interface
// ============================================================================

/// Resolution Service Interface
///
/// Dependency extraction and factory resolution over one closed set of
/// known types.
pub trait ResolutionServiceInterface: Send + Sync {
    /// Types the service validates dependency targets against
    fn known_types(&self) -> &TypesByName;

    /// Types `t` implements, itself included
    fn interfaces(&self, t: &Type) -> TypeSet;

    /// Validated dependency set of `t`
    fn dependencies(&self, t: &Type) -> Result<Dependencies>;

    /// Dependency sets of every known type, stopping at the first failure
    fn all_dependencies(&self) -> Result<HashMap<Type, Dependencies>> {
        let mut all = HashMap::with_capacity(self.known_types().len());
        for t in self.known_types() {
            all.insert(t.clone(), self.dependencies(t)?);
        }
        Ok(all)
    }

    /// Unique factory method of `factory_type` producing a `target`
    fn factory_method(&self, target: &Type, factory_type: &Type) -> Result<FactoryMethod>;
}
