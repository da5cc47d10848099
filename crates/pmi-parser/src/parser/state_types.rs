//! Parser state - type annotations.
//!
//! Named, optional, array and dictionary spellings become structured
//! `TypeShape`s. Everything else is consumed with the same care and kept as
//! `TypeShape::Unsupported` holding its exact source spelling.

use super::state::ParserState;
use crate::ast::TypeShape;
use crate::scanner::SyntaxKind;
use pmi_common::diagnostic_codes;

/// Contextual keywords that prefix a type (`some P`, `inout T`).
const TYPE_SPECIFIERS: &[&str] = &[
    "some",
    "any",
    "inout",
    "borrowing",
    "consuming",
    "sending",
    "each",
    "repeat",
];

/// Effects that may sit between a function type's parameters and its arrow.
const FUNCTION_EFFECTS: &[&str] = &["async", "throws", "rethrows"];

impl ParserState<'_> {
    /// Parse a type, including postfix `?`, `!`, `.Type` and `&` compositions.
    pub(crate) fn parse_type(&mut self) -> TypeShape {
        let start = self.current_start();
        let mut shape = self.parse_primary_type();

        loop {
            if !self.is_on_same_line() {
                break;
            }
            match self.kind() {
                SyntaxKind::Question => {
                    self.next_token();
                    shape = match shape {
                        TypeShape::Unsupported(_) => TypeShape::Unsupported(self.spelling_from(start)),
                        inner => TypeShape::optional(inner),
                    };
                }
                SyntaxKind::Bang => {
                    // Implicitly unwrapped optional.
                    self.next_token();
                    shape = TypeShape::Unsupported(self.spelling_from(start));
                }
                SyntaxKind::Dot if self.nth(1).kind == SyntaxKind::Identifier => {
                    // `T.Type`, `T.Protocol`
                    self.next_token();
                    self.next_token();
                    shape = TypeShape::Unsupported(self.spelling_from(start));
                }
                SyntaxKind::Ampersand => {
                    self.next_token();
                    let _ = self.parse_type();
                    shape = TypeShape::Unsupported(self.spelling_from(start));
                }
                _ => break,
            }
        }
        shape
    }

    fn parse_primary_type(&mut self) -> TypeShape {
        let start = self.current_start();
        match self.kind() {
            SyntaxKind::OpenBracket => self.parse_collection_type(),
            SyntaxKind::Identifier => {
                let text = self.current_text();
                let next = self.nth(1);
                if TYPE_SPECIFIERS.contains(&text)
                    && !next.preceded_by_line_break
                    && matches!(
                        next.kind,
                        SyntaxKind::Identifier | SyntaxKind::OpenParen | SyntaxKind::OpenBracket
                    )
                {
                    self.next_token();
                    let _ = self.parse_type();
                    return TypeShape::Unsupported(self.spelling_from(start));
                }
                self.parse_type_reference()
            }
            SyntaxKind::OpenParen => {
                // Tuple, parenthesized, or function type.
                self.skip_balanced();
                while self.is_on_same_line()
                    && self.is_token(SyntaxKind::Identifier)
                    && FUNCTION_EFFECTS.contains(&self.current_text())
                {
                    self.next_token();
                    if self.is_token(SyntaxKind::OpenParen) && self.is_on_same_line() {
                        // typed throws: `throws(MyError)`
                        self.skip_balanced();
                    }
                }
                if self.is_token(SyntaxKind::Arrow) {
                    self.next_token();
                    let _ = self.parse_type();
                }
                TypeShape::Unsupported(self.spelling_from(start))
            }
            SyntaxKind::At if self.nth(1).kind == SyntaxKind::Identifier => {
                // `@escaping`, `@Sendable`
                self.next_token();
                self.next_token();
                let _ = self.parse_type();
                TypeShape::Unsupported(self.spelling_from(start))
            }
            _ => {
                self.error_at_current(diagnostic_codes::TYPE_EXPECTED, &[]);
                TypeShape::Unsupported(String::new())
            }
        }
    }

    /// `[T]` or `[K: V]`, current token at `[`.
    fn parse_collection_type(&mut self) -> TypeShape {
        let start = self.current_start();
        self.next_token();
        let element = self.parse_type();

        if self.is_token(SyntaxKind::Colon) {
            self.next_token();
            let value = self.parse_type();
            if !self.parse_expected(SyntaxKind::CloseBracket, "]") {
                return TypeShape::Unsupported(self.spelling_from(start));
            }
            if is_unsupported(&element) || is_unsupported(&value) {
                return TypeShape::Unsupported(self.spelling_from(start));
            }
            TypeShape::mapping(element, value)
        } else {
            if !self.parse_expected(SyntaxKind::CloseBracket, "]") {
                return TypeShape::Unsupported(self.spelling_from(start));
            }
            if is_unsupported(&element) {
                return TypeShape::Unsupported(self.spelling_from(start));
            }
            TypeShape::sequence(element)
        }
    }

    /// `Name`, or an unsupported reference such as `Array<Int>` or `Foo.Bar`.
    fn parse_type_reference(&mut self) -> TypeShape {
        let start = self.current_start();
        let token = self.next_token();
        let name = self.token_text(token).to_string();
        let mut plain = true;

        loop {
            if self.is_generic_argument_start() {
                self.skip_generic_arguments();
                plain = false;
            } else if self.is_token(SyntaxKind::Dot)
                && self.is_on_same_line()
                && self.nth(1).kind == SyntaxKind::Identifier
                && !is_metatype_suffix(self.token_text(self.nth(1)))
            {
                self.next_token();
                self.next_token();
                plain = false;
            } else {
                break;
            }
        }

        if plain {
            TypeShape::Named(name)
        } else {
            TypeShape::Unsupported(self.spelling_from(start))
        }
    }

    fn is_generic_argument_start(&self) -> bool {
        if !self.is_on_same_line() {
            return false;
        }
        match self.kind() {
            SyntaxKind::LessThan => true,
            SyntaxKind::Operator => self.current_text().starts_with('<'),
            _ => false,
        }
    }

    /// Consume `<...>`, counting angle brackets inside operator runs like `>>`.
    fn skip_generic_arguments(&mut self) {
        let mut depth: i32 = 0;
        loop {
            let kind = self.kind();
            match kind {
                SyntaxKind::EndOfFile
                | SyntaxKind::OpenBrace
                | SyntaxKind::CloseBrace
                | SyntaxKind::Semicolon
                | SyntaxKind::Equals => return,
                SyntaxKind::LessThan => depth += 1,
                SyntaxKind::GreaterThan => depth -= 1,
                SyntaxKind::Operator => {
                    for ch in self.current_text().chars() {
                        match ch {
                            '<' => depth += 1,
                            '>' => depth -= 1,
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
            if Self::is_open_delimiter(kind) {
                self.skip_balanced();
            } else {
                self.next_token();
            }
            if depth <= 0 {
                return;
            }
        }
    }
}

fn is_unsupported(shape: &TypeShape) -> bool {
    matches!(shape, TypeShape::Unsupported(_))
}

fn is_metatype_suffix(text: &str) -> bool {
    text == "Type" || text == "Protocol"
}
