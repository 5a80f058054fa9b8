//! Bootstrap
//!
//! Turns an [`AppConfig`] into a ready resolution service over a catalog
//! document.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;
use wirebox_application::use_cases::ResolutionServiceImpl;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::value_objects::Type;
use wirebox_providers::introspection::{CatalogDocument, InMemoryTypeCatalog};

use crate::config::AppConfig;

/// Catalog plus the resolution service built over it
#[derive(Debug)]
pub struct ResolverContext {
    catalog: Arc<InMemoryTypeCatalog>,
    resolver: ResolutionServiceImpl,
}

impl ResolverContext {
    /// Build from configuration
    ///
    /// `catalog_override` replaces `catalog.path` from the configuration.
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when no catalog path is known, any error
    /// from reading or building the document, and [`Error::InvalidCatalog`]
    /// when the document's root differs from the configured root type.
    pub fn from_config(config: &AppConfig, catalog_override: Option<&Path>) -> Result<Self> {
        let path = catalog_override
            .or(config.catalog.path.as_deref())
            .ok_or_else(|| Error::Configuration {
                message: "No catalog path configured".to_string(),
                source: None,
            })?;

        let document = CatalogDocument::from_path(path)?;
        Self::from_document(config, &document)
    }

    /// Build from an already parsed document
    pub fn from_document(config: &AppConfig, document: &CatalogDocument) -> Result<Self> {
        if document.root != config.catalog.root_type {
            return Err(Error::invalid_catalog(format!(
                "catalog root {} does not match configured root type {}",
                document.root, config.catalog.root_type
            )));
        }

        let catalog = Arc::new(document.build()?);
        let known_types = catalog.known_types();
        debug!(
            types = known_types.len(),
            policy = ?config.resolver.duplicate_policy,
            cache = config.resolver.cache_enabled,
            "Bootstrapped resolver"
        );
        let resolver = ResolutionServiceImpl::with_options(
            catalog.clone(),
            known_types,
            config.resolver.options(),
        );
        Ok(Self { catalog, resolver })
    }

    /// Loaded catalog
    pub fn catalog(&self) -> &Arc<InMemoryTypeCatalog> {
        &self.catalog
    }

    /// Resolution service over the catalog
    pub fn resolver(&self) -> &ResolutionServiceImpl {
        &self.resolver
    }

    /// Look a type up by name
    ///
    /// # Errors
    ///
    /// [`Error::InvalidType`] when the catalog has no type of that name.
    pub fn type_named(&self, name: &str) -> Result<Type> {
        self.catalog
            .type_named(name)
            .ok_or_else(|| Error::invalid_type(name, "type is not declared in the catalog"))
    }
}
