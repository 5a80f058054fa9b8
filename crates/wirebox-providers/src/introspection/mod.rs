//! Introspection providers

pub mod document;
pub mod in_memory;

pub use document::{CatalogDocument, MethodDeclaration, TypeDeclaration};
pub use in_memory::InMemoryTypeCatalog;
