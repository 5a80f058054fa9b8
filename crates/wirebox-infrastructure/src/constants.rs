//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Configuration file looked up in the current directory
pub const DEFAULT_CONFIG_FILENAME: &str = "wirebox.toml";

/// Prefix of configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "WIREBOX";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "WIREBOX_LOG";
