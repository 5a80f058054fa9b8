//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, LoggingConfig, ResolverConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resolution behavior
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Type catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}
