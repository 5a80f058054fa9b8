//! # wirebox
//!
//! Resolution core of a reflection-driven dependency injection container.
//!
//! Given a type catalog, wirebox answers three questions for the container
//! runtime: which interfaces a type satisfies, which setter-injected
//! dependencies a type declares (and whether they are legal), and which
//! method of a factory type produces a requested type.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use wirebox::application::{ResolutionServiceImpl, ResolutionServiceInterface};
//! use wirebox::providers::introspection::CatalogDocument;
//!
//! let catalog = Arc::new(CatalogDocument::from_path("catalog.toml")?.build()?);
//! let service = ResolutionServiceImpl::new(catalog.clone(), catalog.known_types());
//! let dependencies = service.dependencies(&catalog.type_named("Service").unwrap())?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type model, value objects, ports and errors
//! - `application` - Extraction and resolution algorithms, resolution service
//! - `providers` - Introspection backends (in-memory catalog, catalog documents)
//! - `infrastructure` - Configuration, logging, bootstrap

/// Domain layer - type model and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirebox_domain::*;
}

/// Application layer - resolution algorithms and services
pub mod application {
    pub use wirebox_application::*;
}

/// Providers - introspection backends
pub mod providers {
    pub use wirebox_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use wirebox_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;
