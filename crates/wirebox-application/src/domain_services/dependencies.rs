//! Dependency Extraction & Validation
//!
//! Walks every injection-marked method a type exposes (its own and the ones
//! it inherits) and turns them into a validated dependency set.
//!
//! ## Rules
//!
//! | Check | Failure |
//! |-------|---------|
//! | exactly one parameter | `InvalidSetter` ("invalid parameter count") |
//! | method or slot, never a signal | `InvalidSetter` ("setter is signal") |
//! | parameter resolves to a known, non-root type | `InvalidSetter` |
//! | parameter is not the owning type | `DependencyOnSelf` |
//! | parameter does not inherit from the owning type | `DependencyOnSubtype` |
//! | owning type does not inherit from the parameter | `DependencyOnSupertype` |
//!
//! Only the owning type's own inheritance line is forbidden: two dependencies
//! related to each other but not to the owner are fine.

use std::collections::BTreeMap;

use tracing::{debug, trace};
use wirebox_domain::constants::REASON_UNKNOWN_PARAMETER_TYPE;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{
    Dependencies, Dependency, MetaMethod, SetterMethod, Type, TypesByName,
};

/// Extract the validated dependency set of `t`
///
/// Stops at the first violation. A type without injection-marked methods,
/// the root type included, has an empty dependency set.
pub fn extract_dependencies(
    introspector: &dyn TypeIntrospector,
    known_types: &TypesByName,
    t: &Type,
) -> Result<Dependencies> {
    let mut dependencies = Dependencies::new();

    for method in introspector.methods(t) {
        if !method.is_injectable() || method.enclosing_type().is_root() {
            continue;
        }
        trace!(owner = %t, method = %method, "Validating injection setter");

        let setter = make_setter_method(introspector, known_types, method)?;
        let dependency = Dependency::from_setter(setter);
        validate_dependency(t, &dependency)?;
        dependencies.insert(dependency);
    }

    debug!(
        owner = %t,
        count = dependencies.len(),
        introspector = introspector.introspector_name(),
        "Extracted dependencies"
    );
    Ok(dependencies)
}

/// Resolve and validate an injection-marked method as a setter
///
/// The parameter must resolve through the introspector and be registered in
/// `known_types`.
pub fn make_setter_method(
    introspector: &dyn TypeIntrospector,
    known_types: &TypesByName,
    method: MetaMethod,
) -> Result<SetterMethod> {
    let parameter_type = match method.parameter_types() {
        [token] => introspector.resolve_type(token),
        _ => None,
    };
    let setter = SetterMethod::try_new(method, parameter_type)?;

    if !known_types.contains(setter.parameter_type()) {
        return Err(Error::invalid_setter(
            setter.method().qualified_signature(),
            REASON_UNKNOWN_PARAMETER_TYPE,
        ));
    }
    Ok(setter)
}

/// Check a dependency against the owning type's inheritance line
pub fn validate_dependency(owner: &Type, dependency: &Dependency) -> Result<()> {
    let required = dependency.required_type();
    let method = dependency.setter().method().qualified_signature();

    if required == owner {
        return Err(Error::dependency_on_self(owner.name(), method));
    }
    if owner.is_strict_ancestor_of(required) {
        return Err(Error::dependency_on_subtype(
            owner.name(),
            required.name(),
            method,
        ));
    }
    if required.is_strict_ancestor_of(owner) {
        return Err(Error::dependency_on_supertype(
            owner.name(),
            required.name(),
            method,
        ));
    }
    Ok(())
}

/// Reject dependency sets where two setters require the same type
///
/// Not part of default extraction, which accepts such sets; callers opting
/// into the strict policy run it afterwards. When several types are
/// duplicated the alphabetically first is reported.
pub fn validate_unique_targets(owner: &Type, dependencies: &Dependencies) -> Result<()> {
    let mut per_target: BTreeMap<&Type, usize> = BTreeMap::new();
    for dependency in dependencies {
        *per_target.entry(dependency.required_type()).or_default() += 1;
    }

    match per_target.into_iter().find(|(_, count)| *count > 1) {
        Some((required, _)) => Err(Error::dependency_duplicated(owner.name(), required.name())),
        None => Ok(()),
    }
}
