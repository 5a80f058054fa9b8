//! Bootstrap tests

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wirebox_application::ports::ResolutionServiceInterface;
use wirebox_application::use_cases::DuplicatePolicy;
use wirebox_domain::error::Error;
use wirebox_infrastructure::bootstrap::ResolverContext;
use wirebox_infrastructure::config::{ConfigBuilder, ResolverConfig};

const CATALOG: &str = r#"
[[types]]
name = "Logger"

[[types]]
name = "Service"

[[types.methods]]
name = "set_logger"
kind = "slot"
parameters = ["Logger*"]
inject = true

[[types.methods]]
name = "set_fallback_logger"
parameters = ["Logger*"]
inject = true
"#;

fn write_catalog(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("catalog.toml");
    fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn test_builds_resolver_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_catalog_path(write_catalog(temp_dir.path()))
        .build();

    let context = ResolverContext::from_config(&config, None).unwrap();
    let service = context.type_named("Service").unwrap();
    let dependencies = context.resolver().dependencies(&service).unwrap();

    assert_eq!(dependencies.len(), 2);
    assert!(
        dependencies
            .iter()
            .all(|dependency| dependency.required_type().name() == "Logger")
    );
    assert_eq!(context.resolver().known_types().len(), 2);
}

#[test]
fn test_resolver_options_follow_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigBuilder::new()
        .with_resolver(ResolverConfig {
            cache_enabled: false,
            duplicate_policy: DuplicatePolicy::Strict,
        })
        .build();

    let path = write_catalog(temp_dir.path());
    let context = ResolverContext::from_config(&config, Some(&path)).unwrap();
    let service = context.type_named("Service").unwrap();

    assert!(matches!(
        context.resolver().dependencies(&service),
        Err(Error::DependencyDuplicated { .. })
    ));
    assert_eq!(context.resolver().cached_len(), 0);
}

#[test]
fn test_missing_catalog_path() {
    let config = ConfigBuilder::new().build();
    assert!(matches!(
        ResolverContext::from_config(&config, None),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_root_type_mismatch() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = ConfigBuilder::new().build();
    config.catalog.root_type = "QObject".to_string();

    let path = write_catalog(temp_dir.path());
    assert!(matches!(
        ResolverContext::from_config(&config, Some(&path)),
        Err(Error::InvalidCatalog { .. })
    ));
}

#[test]
fn test_unknown_type_name() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_catalog(temp_dir.path());
    let context = ResolverContext::from_config(&ConfigBuilder::new().build(), Some(&path)).unwrap();

    assert!(matches!(
        context.type_named("Missing"),
        Err(Error::InvalidType { .. })
    ));
}
