//! Synthesis errors.
//!
//! All failures are deterministic properties of the input declaration. Each
//! aborts synthesis for that declaration only and carries the span the host
//! should attach its diagnostic to.

use pmi_common::{Diagnostic, Span, diagnostic_codes, format_message, get_message_template};
use pmi_parser::DeclarationKind;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The attributed declaration is not a struct.
    #[error("{}", describe(diagnostic_codes::UNSUPPORTED_DECLARATION_KIND, &[.name.as_str(), .kind.to_string().as_str()]))]
    UnsupportedDeclarationKind {
        name: String,
        kind: DeclarationKind,
        span: Span,
    },

    /// A shorthand-grouped member has no annotation to its right.
    #[error("{}", describe(diagnostic_codes::MISSING_TYPE_ANNOTATION, &[.name.as_str()]))]
    MissingTypeAnnotation { name: String, span: Span },

    /// A member's type is not named, optional, array or dictionary.
    #[error("{}", describe(diagnostic_codes::UNSUPPORTED_TYPE_SHAPE, &[.name.as_str(), .spelling.as_str()]))]
    UnsupportedTypeShape {
        name: String,
        spelling: String,
        span: Span,
    },
}

impl EngineError {
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::UnsupportedDeclarationKind { .. } => diagnostic_codes::UNSUPPORTED_DECLARATION_KIND,
            Self::MissingTypeAnnotation { .. } => diagnostic_codes::MISSING_TYPE_ANNOTATION,
            Self::UnsupportedTypeShape { .. } => diagnostic_codes::UNSUPPORTED_TYPE_SHAPE,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnsupportedDeclarationKind { span, .. }
            | Self::MissingTypeAnnotation { span, .. }
            | Self::UnsupportedTypeShape { span, .. } => *span,
        }
    }

    /// Convert to a host diagnostic in `file`.
    #[must_use]
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        match self {
            Self::UnsupportedDeclarationKind { name, kind, span } => {
                let kind = kind.to_string();
                Diagnostic::from_code(file, *span, self.code(), &[name.as_str(), kind.as_str()])
            }
            Self::MissingTypeAnnotation { name, span } => {
                Diagnostic::from_code(file, *span, self.code(), &[name.as_str()])
            }
            Self::UnsupportedTypeShape {
                name,
                spelling,
                span,
            } => Diagnostic::from_code(file, *span, self.code(), &[name.as_str(), spelling.as_str()]),
        }
    }
}

/// Message text from the diagnostic table, shared by `Display` and
/// [`EngineError::to_diagnostic`].
fn describe(code: u32, args: &[&str]) -> String {
    get_message_template(code).map_or_else(|| args.join(" "), |template| format_message(template, args))
}

/// A type spelling the renderer does not handle.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("type '{spelling}' is not a named, optional, array, or dictionary type")]
pub struct UnsupportedShape {
    pub spelling: String,
}

impl UnsupportedShape {
    /// Attach the member the type belongs to.
    #[must_use]
    pub fn for_member(self, name: &str, span: Span) -> EngineError {
        EngineError::UnsupportedTypeShape {
            name: name.to_string(),
            spelling: self.spelling,
            span,
        }
    }
}
