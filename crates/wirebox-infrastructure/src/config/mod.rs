//! Configuration management
//!
//! Sources are merged with figment: defaults, then a TOML file, then
//! `WIREBOX_` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
