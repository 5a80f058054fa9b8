//! Interface Extraction
//!
//! The set of types a type "implements": the type itself plus every type on
//! its inheritance chain. `X` satisfies a requirement `Y` iff `Y` is in the
//! interface set of `X`.

use wirebox_domain::value_objects::{Type, TypeSet};

/// Types implemented by `t`, itself included
///
/// The root type is part of every non-empty result since every chain ends
/// there.
pub fn extract_interfaces(t: &Type) -> TypeSet {
    std::iter::once(t)
        .chain(t.ancestors())
        .cloned()
        .collect()
}

/// Whether an instance of `candidate` satisfies a requirement for `required`
pub fn implements(candidate: &Type, required: &Type) -> bool {
    candidate.is_a(required)
}
