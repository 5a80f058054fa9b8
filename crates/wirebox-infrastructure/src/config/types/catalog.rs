//! Type catalog configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wirebox_domain::constants::DEFAULT_ROOT_TYPE_NAME;

/// Where the type catalog comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog document (TOML, or JSON by extension)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Name the catalog's root type must carry
    pub root_type: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            root_type: DEFAULT_ROOT_TYPE_NAME.to_string(),
        }
    }
}
