//! Configuration types module

pub mod app;
pub mod catalog;
pub mod logging;
pub mod resolver;

pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
