//! Dependency value object
//!
//! "Some type requires an instance of X through this injection point."

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::setter_method::SetterMethod;
use super::type_info::Type;

/// Set of dependencies of one owning type
///
/// Distinct setters requiring the same type are distinct entries.
pub type Dependencies = HashSet<Dependency>;

/// Mechanism through which a dependency is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DependencyKind {
    /// Supplied after construction through an injection setter
    Setter,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setter => f.write_str("setter"),
        }
    }
}

/// Value Object: Dependency
///
/// ## Business Rules
///
/// - Equal iff kind, required type and injection point are all equal
/// - Hash covers kind, required type name and injection point signature,
///   so it stays consistent with equality and stable across processes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    kind: DependencyKind,
    required_type: Type,
    setter: SetterMethod,
}

impl Dependency {
    /// Dependency supplied through `setter`, requiring its parameter type
    pub fn from_setter(setter: SetterMethod) -> Self {
        Self {
            kind: DependencyKind::Setter,
            required_type: setter.parameter_type().clone(),
            setter,
        }
    }

    /// Mechanism supplying the dependency
    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Type an instance of which is required
    pub fn required_type(&self) -> &Type {
        &self.required_type
    }

    /// Injection point supplying the dependency
    pub fn setter(&self) -> &SetterMethod {
        &self.setter
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} via {} {}", self.required_type, self.kind, self.setter)
    }
}
