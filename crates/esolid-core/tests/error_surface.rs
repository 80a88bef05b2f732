use esolid_core::errors::{ErrorInfo, SolidError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("cells", "0")
        .with_context("reason", "example")
}

#[test]
fn lattice_error_surface() {
    let err = SolidError::Lattice(sample_info("empty-lattice", "cell count must be positive"));
    assert_eq!(err.info().code, "empty-lattice");
    assert!(err.info().context.contains_key("cells"));
}

#[test]
fn sample_error_surface() {
    let err = SolidError::Sample(sample_info("empty-lattice", "cannot sample zero cells"));
    assert_eq!(err.info().code, "empty-lattice");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn config_error_surface() {
    let err = SolidError::Config(sample_info("zero-budget", "exchange budget must be positive"));
    assert_eq!(err.info().code, "zero-budget");
}

#[test]
fn io_error_surface() {
    let err = SolidError::Io(sample_info("manifest-write", "permission denied"));
    assert_eq!(err.info().code, "manifest-write");
}

#[test]
fn error_info_display_includes_hint() {
    let err = SolidError::Lattice(
        ErrorInfo::new("empty-lattice", "cell count must be positive")
            .with_hint("construct with at least one cell"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("empty-lattice"));
    assert!(rendered.contains("hint"));
}

#[test]
fn error_serde_roundtrip() {
    let err = SolidError::Config(sample_info("zero-cells", "cells must be positive"));
    let json = serde_json::to_string(&err).unwrap();
    let restored: SolidError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}
