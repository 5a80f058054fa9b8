//! Factory Method Resolution
//!
//! Finds the single zero-argument method of a factory type whose product
//! implements a requested type. Ambiguity is an error; no priority rule
//! picks a winner.

use tracing::{debug, trace, warn};
use wirebox_domain::error::{Error, Result};
use wirebox_domain::ports::TypeIntrospector;
use wirebox_domain::value_objects::{FactoryMethod, Type};

use super::interfaces::extract_interfaces;

/// Resolve the factory method of `factory_type` producing a `target`
///
/// Every zero-parameter method whose declared return type resolves to a
/// type implementing `target` is a candidate. A candidate that is not a
/// valid factory (a signal, for instance) fails the whole resolution.
pub fn make_factory_method(
    introspector: &dyn TypeIntrospector,
    target: &Type,
    factory_type: &Type,
) -> Result<FactoryMethod> {
    let mut candidates = Vec::new();

    for method in introspector.methods(factory_type) {
        if method.parameter_count() != 0 {
            continue;
        }
        let Some(result_type) = method
            .return_type()
            .and_then(|token| introspector.resolve_type(token))
        else {
            continue;
        };
        if !extract_interfaces(&result_type).contains(target) {
            continue;
        }

        trace!(target = %target, method = %method, "Factory method candidate");
        let candidate = FactoryMethod::try_new(method, Some(result_type)).inspect_err(|e| {
            warn!(target = %target, error = %e, "Rejected factory method candidate");
        })?;
        candidates.push(candidate);
    }

    if candidates.len() > 1 {
        let mut signatures: Vec<String> = candidates
            .iter()
            .map(|candidate| candidate.method().qualified_signature())
            .collect();
        signatures.sort();
        return Err(Error::non_unique_factory(target.name(), signatures));
    }

    let factory_method = candidates
        .pop()
        .ok_or_else(|| Error::no_factory_method(target.name()))?;
    debug!(
        target = %target,
        factory = %factory_method,
        "Resolved factory method"
    );
    Ok(factory_method)
}
