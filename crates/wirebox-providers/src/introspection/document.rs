//! Declarative catalog documents
//!
//! Describes types and their methods as data (TOML or JSON) so metadata
//! produced outside the process can be turned into an
//! [`InMemoryTypeCatalog`].
//!
//! ```toml
//! root = "Object"
//!
//! [[types]]
//! name = "Logger"
//!
//! [[types]]
//! name = "Service"
//!
//! [[types.methods]]
//! name = "set_logger"
//! kind = "slot"
//! parameters = ["Logger"]
//! inject = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wirebox_domain::constants::DEFAULT_ROOT_TYPE_NAME;
use wirebox_domain::error::{Error, Result};
use wirebox_domain::value_objects::{MetaMethod, MethodKind};

use super::in_memory::InMemoryTypeCatalog;

fn default_root() -> String {
    DEFAULT_ROOT_TYPE_NAME.to_string()
}

/// Whole catalog description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Name of the root type
    #[serde(default = "default_root")]
    pub root: String,
    /// Types in declaration order; parents come first
    #[serde(default)]
    pub types: Vec<TypeDeclaration>,
}

/// One declared type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Type name
    pub name: String,
    /// Parent type name, the root when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Methods declared directly on the type
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

/// One declared method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// Method name
    pub name: String,
    /// Method kind
    #[serde(default)]
    pub kind: MethodKind,
    /// Parameter type tokens
    #[serde(default)]
    pub parameters: Vec<String>,
    /// Return type token, `void` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
    /// Injection marker
    #[serde(default)]
    pub inject: bool,
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            root: default_root(),
            types: Vec::new(),
        }
    }
}

impl CatalogDocument {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::invalid_catalog(format!("malformed TOML catalog: {e}")))
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::invalid_catalog(format!("malformed JSON catalog: {e}")))
    }

    /// Read a document, choosing the format from the file extension
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io_with_source(format!("Failed to read catalog {}", path.display()), e)
        })?;

        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        let document = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        debug!(
            path = %path.display(),
            types = document.types.len(),
            "Loaded catalog document"
        );
        Ok(document)
    }

    /// Serialize as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_catalog(format!("cannot serialize catalog: {e}")))
    }

    /// Build the in-memory catalog this document describes
    ///
    /// All types are declared before any method, so method tokens may name
    /// types declared later in the document.
    pub fn build(&self) -> Result<InMemoryTypeCatalog> {
        if self.root.trim().is_empty() {
            return Err(Error::invalid_catalog("root type name is empty"));
        }

        let mut catalog = InMemoryTypeCatalog::with_root_name(self.root.as_str());
        for declaration in &self.types {
            catalog.add_type(&declaration.name, declaration.parent.as_deref())?;
        }

        for declaration in &self.types {
            let Some(owner) = catalog.type_named(&declaration.name) else {
                return Err(Error::invalid_type(&declaration.name, "type is not declared"));
            };
            for method in &declaration.methods {
                let mut meta_method = MetaMethod::new(&owner, method.name.as_str(), method.kind)
                    .with_parameters(method.parameters.iter().map(String::as_str))
                    .with_injectable(method.inject);
                if let Some(returns) = &method.returns {
                    meta_method = meta_method.returning(returns.as_str());
                }
                catalog.add_method(meta_method)?;
            }
        }
        Ok(catalog)
    }
}
