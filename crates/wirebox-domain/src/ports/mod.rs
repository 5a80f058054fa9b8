//! Ports (interfaces) implemented outside the domain

pub mod introspection;
pub mod invocation;

pub use introspection::TypeIntrospector;
pub use invocation::MethodInvoker;
