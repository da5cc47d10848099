use super::{DiagnosticCategory, DiagnosticMessage};

/// Diagnostic codes. 1xxx are synthesis errors, 9xxx are parse errors.
pub mod diagnostic_codes {
    pub const UNSUPPORTED_DECLARATION_KIND: u32 = 1001;
    pub const MISSING_TYPE_ANNOTATION: u32 = 1002;
    pub const UNSUPPORTED_TYPE_SHAPE: u32 = 1003;

    pub const TOKEN_EXPECTED: u32 = 9001;
    pub const IDENTIFIER_EXPECTED: u32 = 9002;
    pub const TYPE_EXPECTED: u32 = 9003;
    pub const UNTERMINATED_STRING_LITERAL: u32 = 9004;
    pub const UNTERMINATED_BLOCK_COMMENT: u32 = 9005;
    pub const UNEXPECTED_TOKEN_AFTER_TYPE: u32 = 9006;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::UNSUPPORTED_DECLARATION_KIND,
        category: DiagnosticCategory::Error,
        message: "A memberwise initializer can only be synthesized for a struct, but '{0}' is {1}.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::MISSING_TYPE_ANNOTATION,
        category: DiagnosticCategory::Error,
        message: "Member '{0}' has no type annotation and no later member of its group provides one.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNSUPPORTED_TYPE_SHAPE,
        category: DiagnosticCategory::Error,
        message: "Member '{0}' has type '{1}', which is not a named, optional, array, or dictionary type.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::TOKEN_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "'{0}' expected.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::IDENTIFIER_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Identifier expected.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_EXPECTED,
        category: DiagnosticCategory::Error,
        message: "Type expected.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_STRING_LITERAL,
        category: DiagnosticCategory::Error,
        message: "Unterminated string literal.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNTERMINATED_BLOCK_COMMENT,
        category: DiagnosticCategory::Error,
        message: "'*/' expected.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::UNEXPECTED_TOKEN_AFTER_TYPE,
        category: DiagnosticCategory::Error,
        message: "Unexpected '{0}' after type.",
    },
];
