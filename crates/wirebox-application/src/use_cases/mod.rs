//! Use Cases

pub mod resolution_service;

pub use resolution_service::{DuplicatePolicy, ResolutionServiceImpl, ResolverOptions};
