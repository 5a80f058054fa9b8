//! Unit tests for domain error types

use wirebox_domain::Error;

#[test]
fn test_invalid_setter_error() {
    let error = Error::invalid_setter("T::setter_int(int)", "parameter type is empty");
    match &error {
        Error::InvalidSetter { method, reason } => {
            assert_eq!(method, "T::setter_int(int)");
            assert_eq!(reason, "parameter type is empty");
        }
        _ => panic!("Expected InvalidSetter error"),
    }
    let display_str = format!("{}", error);
    assert!(display_str.contains("setter_int"));
    assert!(display_str.contains("parameter type is empty"));
}

#[test]
fn test_dependency_shape_errors() {
    let error = Error::dependency_on_subtype("A", "B", "A::set_b(B)");
    match &error {
        Error::DependencyOnSubtype {
            type_name,
            dependency,
            method,
        } => {
            assert_eq!(type_name, "A");
            assert_eq!(dependency, "B");
            assert_eq!(method, "A::set_b(B)");
        }
        _ => panic!("Expected DependencyOnSubtype error"),
    }
    assert!(error.is_dependency_error());
    assert!(!error.is_factory_error());

    assert!(Error::dependency_on_self("A", "A::set_a(A)").is_dependency_error());
    assert!(Error::dependency_on_supertype("B", "A", "B::set_a(A)").is_dependency_error());
    assert!(Error::dependency_duplicated("A", "C").is_dependency_error());
}

#[test]
fn test_non_unique_factory_lists_candidates() {
    let error = Error::non_unique_factory(
        "Service",
        vec!["F::create_a()".to_string(), "F::create_b()".to_string()],
    );
    assert!(error.is_factory_error());
    let display_str = format!("{}", error);
    assert!(display_str.contains("Service"));
    assert!(display_str.contains("F::create_b()"));
}

#[test]
fn test_no_factory_method_error() {
    let error = Error::no_factory_method("Service");
    match error {
        Error::NoFactoryMethod { type_name } => assert_eq!(type_name, "Service"),
        _ => panic!("Expected NoFactoryMethod error"),
    }
}

#[test]
fn test_configuration_error_with_source() {
    let source = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad level");
    let error = Error::configuration_with_source("Failed to install logger", source);
    match &error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Failed to install logger");
            assert!(source.is_some());
        }
        _ => panic!("Expected Configuration error"),
    }
    assert_eq!(error.to_string(), "Configuration error: Failed to install logger");
}

#[test]
fn test_io_error_with_source() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error = Error::io_with_source("Failed to read catalog", source);
    match &error {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to read catalog");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
    assert!(std::error::Error::source(&error).is_some());
}
