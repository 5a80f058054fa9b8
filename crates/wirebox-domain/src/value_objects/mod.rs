//! Value Objects
//!
//! Immutable values the resolution core reasons about: type handles, the
//! registry of known types, introspected methods, validated injection points
//! and factories, and instantiation snapshots.

pub mod dependency;
pub mod factory_method;
pub mod instantiation_state;
pub mod method;
pub mod object_handle;
pub mod setter_method;
pub mod type_info;
pub mod types_by_name;

pub use dependency::{Dependencies, Dependency, DependencyKind};
pub use factory_method::FactoryMethod;
pub use instantiation_state::{ImplementedByMapping, Implementations, InstantiationState};
pub use method::{MetaMethod, MethodKind};
pub use object_handle::ObjectHandle;
pub use setter_method::SetterMethod;
pub use type_info::{Ancestors, Type, TypeSet};
pub use types_by_name::TypesByName;
