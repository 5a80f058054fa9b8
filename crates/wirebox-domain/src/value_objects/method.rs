//! Introspected method metadata
//!
//! Inert descriptions of the methods a reflection backend exposes. The
//! resolution core only compares and inspects them; invoking one is the
//! business of a [`MethodInvoker`](crate::ports::MethodInvoker).

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::type_info::Type;

/// Kind of an introspected method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// Ordinary invokable method
    #[default]
    Method,
    /// Slot (invokable, connectable)
    Slot,
    /// Signal (emitted, never a valid injection point or factory)
    Signal,
    /// Constructor
    Constructor,
}

impl MethodKind {
    /// Whether a method of this kind can be invoked as a setter or factory
    pub fn is_invokable(self) -> bool {
        matches!(self, Self::Method | Self::Slot)
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Method => "method",
            Self::Slot => "slot",
            Self::Signal => "signal",
            Self::Constructor => "constructor",
        };
        f.write_str(name)
    }
}

/// Value Object: Introspected Method
///
/// Parameter and return types are kept as tokens (type names as declared);
/// turning a token into a [`Type`] is the introspector's job, and primitive
/// tokens such as `int` never resolve.
///
/// Two methods are the same method iff they are declared on the same type
/// with the same signature.
///
/// ## Example
///
/// ```rust
/// use wirebox_domain::value_objects::{MetaMethod, MethodKind, Type};
///
/// let root = Type::root();
/// let service = Type::derive("Service", &root);
/// let setter = MetaMethod::new(&service, "set_logger", MethodKind::Slot)
///     .with_parameter("Logger")
///     .injectable();
///
/// assert_eq!(setter.signature(), "set_logger(Logger)");
/// assert!(setter.is_injectable());
/// ```
#[derive(Debug, Clone)]
pub struct MetaMethod {
    enclosing_type: Type,
    name: String,
    kind: MethodKind,
    parameter_types: Vec<String>,
    return_type: Option<String>,
    injectable: bool,
}

impl MetaMethod {
    /// Describe a method declared on `enclosing_type`
    pub fn new<S: Into<String>>(enclosing_type: &Type, name: S, kind: MethodKind) -> Self {
        Self {
            enclosing_type: enclosing_type.clone(),
            name: name.into(),
            kind,
            parameter_types: Vec::new(),
            return_type: None,
            injectable: false,
        }
    }

    /// Append a parameter type token
    pub fn with_parameter<S: Into<String>>(mut self, type_token: S) -> Self {
        self.parameter_types.push(type_token.into());
        self
    }

    /// Append several parameter type tokens
    pub fn with_parameters<I, S>(mut self, type_tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parameter_types
            .extend(type_tokens.into_iter().map(Into::into));
        self
    }

    /// Set the declared return type token
    pub fn returning<S: Into<String>>(mut self, type_token: S) -> Self {
        self.return_type = Some(type_token.into());
        self
    }

    /// Mark the method as an injection setter
    pub fn injectable(self) -> Self {
        self.with_injectable(true)
    }

    /// Set or clear the injection marker
    pub fn with_injectable(mut self, injectable: bool) -> Self {
        self.injectable = injectable;
        self
    }

    /// Type declaring the method
    pub fn enclosing_type(&self) -> &Type {
        &self.enclosing_type
    }

    /// Method name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Method kind
    pub fn kind(&self) -> MethodKind {
        self.kind
    }

    /// Declared parameter type tokens
    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    /// Number of declared parameters
    pub fn parameter_count(&self) -> usize {
        self.parameter_types.len()
    }

    /// Declared return type token, `None` for `void`
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    /// Whether the method carries the injection marker
    pub fn is_injectable(&self) -> bool {
        self.injectable
    }

    /// Normalized signature, e.g. `set_logger(Logger)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.parameter_types.join(","))
    }

    /// Signature qualified with the declaring type, e.g. `Service::set_logger(Logger)`
    pub fn qualified_signature(&self) -> String {
        format!("{}::{}", self.enclosing_type, self.signature())
    }
}

impl PartialEq for MetaMethod {
    fn eq(&self, other: &Self) -> bool {
        self.enclosing_type == other.enclosing_type
            && self.name == other.name
            && self.parameter_types == other.parameter_types
    }
}

impl Eq for MetaMethod {}

impl Hash for MetaMethod {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.enclosing_type.hash(state);
        self.name.hash(state);
        self.parameter_types.hash(state);
    }
}

impl fmt::Display for MetaMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_signature())
    }
}
