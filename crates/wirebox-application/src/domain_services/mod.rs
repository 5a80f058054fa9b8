//! Domain Services
//!
//! Pure resolution algorithms over an introspector and a registry snapshot.

pub mod dependencies;
pub mod factory_methods;
pub mod interfaces;

pub use dependencies::{
    extract_dependencies, make_setter_method, validate_dependency, validate_unique_targets,
};
pub use factory_methods::make_factory_method;
pub use interfaces::{extract_interfaces, implements};
