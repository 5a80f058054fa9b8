//! # wirebox - Provider Implementations
//!
//! Implementations of the ports defined in `wirebox-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Introspection | `TypeIntrospector` | InMemory (programmatic), declarative TOML/JSON documents |
//!
//! ## Usage
//!
//! ```ignore
//! use wirebox_providers::introspection::{CatalogDocument, InMemoryTypeCatalog};
//!
//! let catalog = CatalogDocument::from_path("types.toml")?.build()?;
//! let service = catalog.type_named("Service").unwrap();
//! ```

// Re-export wirebox-domain types commonly used with providers
pub use wirebox_domain::error::{Error, Result};
pub use wirebox_domain::ports::TypeIntrospector;

/// Provider-specific constants
pub mod constants;

/// Introspection provider implementations
///
/// Implements `TypeIntrospector` over catalogs of declared types.
pub mod introspection;
