use linprobe_core::{ErrorInfo, LinError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("dim", "3")
        .with_context("reason", "example")
}

#[test]
fn parameter_error_surface() {
    let err = LinError::Parameter(sample_info("eps-out-of-range", "eps must lie in (0, 1)"));
    assert_eq!(err.info().code, "eps-out-of-range");
    assert!(err.info().context.contains_key("dim"));
    assert!(err.to_string().starts_with("parameter error"));
}

#[test]
fn contract_error_surface() {
    let err = LinError::Contract(sample_info("output-width-changed", "oracle width changed"));
    assert_eq!(err.info().code, "output-width-changed");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn batch_error_surface() {
    let err = LinError::Batch(sample_info("shape-mismatch", "shapes differ"));
    assert!(err.to_string().contains("code: shape-mismatch"));
}

#[test]
fn oracle_error_surface() {
    let err = LinError::Oracle(sample_info("evaluation-failed", "function blew up"));
    assert_eq!(err.info().message, "function blew up");
}

#[test]
fn display_includes_context_pairs() {
    let err = LinError::Parameter(sample_info("eps-out-of-range", "bad eps"));
    let rendered = err.to_string();
    assert!(rendered.contains("dim=3"));
    assert!(rendered.contains("reason=example"));
}
