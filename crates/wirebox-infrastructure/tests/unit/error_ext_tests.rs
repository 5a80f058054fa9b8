//! Error Extension Tests

use std::io;

use wirebox_domain::error::{Error, Result};
use wirebox_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context() {
    let result: Result<()> = not_found().io_context("failed to read catalog");

    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.starts_with("failed to read catalog: "));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = not_found().config_context("bad config");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_lazy_context() {
    let mut evaluated = false;
    let ok: Result<u8> = Ok::<u8, io::Error>(7).with_context(|| {
        evaluated = true;
        "never built"
    });
    assert_eq!(ok.unwrap(), 7);
    assert!(!evaluated);

    match not_found().with_context(|| format!("step {}", 3)) {
        Err(Error::Infrastructure { message, .. }) => assert!(message.starts_with("step 3: ")),
        other => panic!("Expected Infrastructure error, got {:?}", other),
    }
}

#[test]
fn test_plain_context() {
    assert!(matches!(
        not_found().context("plain"),
        Err(Error::Infrastructure { .. })
    ));
}
