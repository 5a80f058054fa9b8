//! # Domain Layer
//!
//! Core types of the wirebox resolution core.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type handles, methods, setters, dependencies, factories, instantiation state |
//! | [`ports`] | Introspection and invocation traits implemented outside the domain |
//! | [`error`] | Resolution error taxonomy |
//! | [`constants`] | Root type name and rejection reasons |
//!
//! The domain has no knowledge of any concrete reflection mechanism: every
//! fact about a type's methods arrives through [`ports::TypeIntrospector`].

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::*;
