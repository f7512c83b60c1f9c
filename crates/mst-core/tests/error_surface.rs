use mst_core::errors::{ErrorInfo, MstError};
use mst_core::AlgebraicSystem;

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("order", 12)
        .with_context("reason", "example")
}

#[test]
fn system_error_surface() {
    let err = AlgebraicSystem::new(1, 0).unwrap_err();
    assert!(matches!(err, MstError::System(_)));
    assert_eq!(err.code(), "order-zero");
}

#[test]
fn oversized_order_is_rejected() {
    let err = AlgebraicSystem::new(0, 65).unwrap_err();
    assert_eq!(err.code(), "order-too-large");
    assert_eq!(err.info().context.get("order").map(String::as_str), Some("65"));
    assert!(err.info().hint.is_some());
}

#[test]
fn code_error_surface() {
    let err = MstError::Code(sample_info("code-token-malformed", "bad token"));
    assert_eq!(err.info().code, "code-token-malformed");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = MstError::Enumeration(
        sample_info("modality-missing", "substructure mode needs a modality").with_hint("attach one"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("enumeration error: substructure mode needs a modality"));
    assert!(rendered.contains("order=12"));
    assert!(rendered.contains("hint: attach one"));
}

#[test]
fn errors_round_trip_json() {
    let err = MstError::Structure(sample_info("level-out-of-range", "level 4 >= 3"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Structure\""));
    let decoded: MstError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
