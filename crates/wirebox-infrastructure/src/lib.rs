//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the resolution core.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment configuration: defaults, TOML file, `WIREBOX_` environment |
//! | [`logging`] | Structured logging with tracing |
//! | [`bootstrap`] | Builds a resolution service from configuration |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`constants`] | Configuration and logging constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::ResolverContext;
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
