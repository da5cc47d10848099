//! Scanner, parser and declaration tree for the Swift subset that
//! memberwise initializer synthesis reads.
//!
//! The parser recognizes nominal type declarations (`struct`, `enum`,
//! `class`, `actor`, `protocol`, `extension`) anywhere in a file and models
//! their `let`/`var` members. Everything else is skipped with balanced
//! delimiter tracking.

pub mod ast;
pub mod parser;
pub mod scanner;

pub use ast::{
    AggregateDeclaration, Attribute, BindingEntry, BindingKeyword, DeclarationKind, MemberBinding,
    Pattern, SourceFile, TypeShape,
};
pub use parser::ParserState;

use pmi_common::{Diagnostic, Span, diagnostic_codes};

/// Parse a whole source file.
#[must_use]
pub fn parse_source_file(file_name: impl Into<String>, source: &str) -> SourceFile {
    ParserState::new(file_name, source).parse_source_file()
}

/// Parse a standalone type spelling such as `[String: [Int?]]`.
///
/// Spellings outside the named/optional/array/dictionary forms parse to
/// `TypeShape::Unsupported`; only malformed text is an error.
pub fn parse_type(text: &str) -> Result<TypeShape, Diagnostic> {
    let mut parser = ParserState::new("<type>", text);
    let shape = parser.parse_type();
    if let Some(diag) = parser.get_diagnostics().first() {
        return Err(diag.clone());
    }
    if !parser.at_eof() {
        let token = parser.current();
        return Err(Diagnostic::from_code(
            "<type>",
            Span::new(token.span.start, text.len() as u32),
            diagnostic_codes::UNEXPECTED_TOKEN_AFTER_TYPE,
            &[parser.token_text(token)],
        ));
    }
    Ok(shape)
}
