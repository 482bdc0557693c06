use reef_core::errors::{ErrorInfo, ReefError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("row", "3")
        .with_context("reason", "example")
}

#[test]
fn grid_error_surface() {
    let err = ReefError::Grid(sample_info("G001", "non-square grid"));
    assert_eq!(err.info().code, "G001");
    assert!(err.info().context.contains_key("row"));
}

#[test]
fn config_error_surface() {
    let err = ReefError::Config(sample_info("CF001", "unknown size").with_hint("use 10 or 20"));
    assert_eq!(err.info().hint.as_deref(), Some("use 10 or 20"));
}

#[test]
fn export_error_surface() {
    let err = ReefError::Export(sample_info("E001", "csv flush failed"));
    assert_eq!(err.info().code, "E001");
}

#[test]
fn display_renders_context_and_hint() {
    let err = ReefError::Serde(ErrorInfo::new("S001", "schema mismatch").with_hint("regenerate"));
    let rendered = err.to_string();
    assert_eq!(
        rendered,
        "serde error: schema mismatch (code: S001) | hint: regenerate"
    );
}

#[test]
fn errors_roundtrip_through_json() {
    let err = ReefError::Grid(sample_info("G002", "value out of range"));
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Grid\""));
    let back: ReefError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[test]
fn cell_context_records_coordinates() {
    let info = ErrorInfo::new("G003", "bad cell").with_cell(4, 7);
    assert_eq!(info.context.get("row").map(String::as_str), Some("4"));
    assert_eq!(info.context.get("col").map(String::as_str), Some("7"));
}
