use crate::diagnostics::*;
use crate::Span;

#[test]
fn format_message_fills_placeholders_in_order() {
    assert_eq!(
        format_message("Member '{0}' has type '{1}'.", &["a", "(Int, Int)"]),
        "Member 'a' has type '(Int, Int)'."
    );
}

#[test]
fn every_code_has_a_message() {
    for code in [
        diagnostic_codes::UNSUPPORTED_DECLARATION_KIND,
        diagnostic_codes::MISSING_TYPE_ANNOTATION,
        diagnostic_codes::UNSUPPORTED_TYPE_SHAPE,
        diagnostic_codes::TOKEN_EXPECTED,
        diagnostic_codes::IDENTIFIER_EXPECTED,
        diagnostic_codes::TYPE_EXPECTED,
        diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        diagnostic_codes::UNTERMINATED_BLOCK_COMMENT,
        diagnostic_codes::UNEXPECTED_TOKEN_AFTER_TYPE,
    ] {
        assert!(get_message_template(code).is_some(), "missing message for {code}");
    }
}

#[test]
fn from_code_builds_error_with_span() {
    let diag = Diagnostic::from_code(
        "Model.swift",
        Span::new(10, 11),
        diagnostic_codes::MISSING_TYPE_ANNOTATION,
        &["x"],
    );
    assert!(diag.is_error());
    assert_eq!(diag.start, 10);
    assert_eq!(diag.length, 1);
    assert_eq!(diag.span(), Span::new(10, 11));
    assert_eq!(diag.code_label(), "PMI1002");
    assert!(diag.message_text.starts_with("Member 'x' has no type annotation"));
}

#[test]
fn diagnostic_serializes_with_camel_case_keys() {
    let diag = Diagnostic::error("a.swift", Span::new(0, 3), "boom", 9001);
    let json = serde_json::to_value(&diag).expect("diagnostic should serialize");
    assert_eq!(json["messageText"], "boom");
    assert_eq!(json["category"], "Error");
    assert_eq!(json["length"], 3);
}
