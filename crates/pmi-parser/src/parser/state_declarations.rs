//! Parser state - nominal declarations, member blocks, and `let`/`var` bindings.

use super::state::ParserState;
use crate::ast::{
    AggregateDeclaration, Attribute, BindingEntry, BindingKeyword, DeclarationKind, MemberBinding,
    Pattern,
};
use crate::scanner::SyntaxKind;
use pmi_common::{Span, diagnostic_codes};

/// Declaration modifiers that may precede a member or a type.
const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "fileprivate",
    "internal",
    "package",
    "open",
    "final",
    "static",
    "lazy",
    "weak",
    "unowned",
    "mutating",
    "nonmutating",
    "override",
    "required",
    "convenience",
    "dynamic",
    "nonisolated",
    "indirect",
    "optional",
    "distributed",
];

/// Keywords that introduce a member after a `class` modifier (`class var`, `class func`).
const MEMBER_INTRODUCERS: &[&str] = &["var", "let", "func", "subscript", "init", "typealias"];

/// Attributes and modifiers read ahead of a declaration.
#[derive(Default)]
pub(crate) struct Prefix {
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) modifiers: Vec<String>,
    pub(crate) start: Option<u32>,
}

impl ParserState<'_> {
    pub(crate) fn parse_top_level_item(&mut self) {
        let prefix = self.parse_attributes_and_modifiers();
        if let Some(kind) = self.declaration_kind_at_current() {
            self.parse_aggregate(kind, prefix);
            return;
        }
        if self.is_identifier_text("let") || self.is_identifier_text("var") {
            // Globals are parsed for error recovery only.
            let _ = self.parse_binding(prefix);
            return;
        }
        if self.is_token(SyntaxKind::CloseBrace) {
            self.next_token();
            return;
        }
        if !self.at_eof() {
            self.skip_member();
        }
    }

    /// `struct`, `enum`, ... at the current token. `class` followed by a
    /// member introducer is a modifier, not a declaration.
    pub(crate) fn declaration_kind_at_current(&self) -> Option<DeclarationKind> {
        if !self.is_token(SyntaxKind::Identifier) {
            return None;
        }
        let kind = DeclarationKind::from_keyword(self.current_text())?;
        let next = self.nth(1);
        if next.kind != SyntaxKind::Identifier {
            return None;
        }
        if kind == DeclarationKind::Class && self.is_member_introducer_or_modifier(self.token_text(next)) {
            return None;
        }
        Some(kind)
    }

    fn is_member_introducer_or_modifier(&self, text: &str) -> bool {
        MEMBER_INTRODUCERS.contains(&text) || MODIFIERS.contains(&text) || text == "class"
    }

    pub(crate) fn parse_attributes_and_modifiers(&mut self) -> Prefix {
        let mut prefix = Prefix::default();
        loop {
            let start = self.current_start();
            if self.is_token(SyntaxKind::At) && self.nth(1).kind == SyntaxKind::Identifier {
                self.next_token();
                let name_token = self.next_token();
                let name = self.token_text(name_token).to_string();
                if self.is_token(SyntaxKind::OpenParen) && self.is_on_same_line() {
                    self.skip_balanced();
                }
                prefix.attributes.push(Attribute {
                    name,
                    span: Span::new(start, self.prev_end()),
                });
            } else if self.is_modifier_at_current() {
                self.next_token();
                // `private(set)`, `unowned(safe)`
                if self.is_token(SyntaxKind::OpenParen) && self.is_on_same_line() {
                    self.skip_balanced();
                }
                prefix.modifiers.push(self.spelling_from(start));
            } else {
                return prefix;
            }
            prefix.start.get_or_insert(start);
        }
    }

    fn is_modifier_at_current(&self) -> bool {
        if !self.is_token(SyntaxKind::Identifier) {
            return false;
        }
        let text = self.current_text();
        let next = self.nth(1);
        if next.kind != SyntaxKind::Identifier && next.kind != SyntaxKind::OpenParen {
            return false;
        }
        if text == "class" {
            return self.is_member_introducer_or_modifier(self.token_text(next));
        }
        MODIFIERS.contains(&text)
    }

    /// Parse `kind Name ... { members }`, current token at the keyword.
    pub(crate) fn parse_aggregate(&mut self, kind: DeclarationKind, prefix: Prefix) {
        let keyword = self.next_token();
        let start = prefix.start.unwrap_or(keyword.span.start);

        let name_start = self.current_start();
        let name = if self.is_token(SyntaxKind::Identifier) {
            self.next_token();
            // Extensions may name a nested type: `extension Outer.Inner`.
            while kind == DeclarationKind::Extension
                && self.is_token(SyntaxKind::Dot)
                && self.nth(1).kind == SyntaxKind::Identifier
            {
                self.next_token();
                self.next_token();
            }
            self.spelling_from(name_start)
        } else {
            self.error_at_current(diagnostic_codes::IDENTIFIER_EXPECTED, &[]);
            String::new()
        };
        let name_span = Span::new(name_start, self.prev_end().max(name_start));

        // Generic parameters, inheritance clause and where clause.
        while !matches!(
            self.kind(),
            SyntaxKind::OpenBrace | SyntaxKind::CloseBrace | SyntaxKind::EndOfFile
        ) {
            if Self::is_open_delimiter(self.kind()) {
                self.skip_balanced();
            } else {
                self.next_token();
            }
        }

        let slot = self.declarations.len();
        let mut declaration = AggregateDeclaration {
            kind,
            name,
            attributes: prefix.attributes,
            modifiers: prefix.modifiers,
            keyword_span: keyword.span,
            name_span,
            span: Span::new(start, self.prev_end()),
            members_span: Span::at(self.current_start()),
            is_terminated: false,
            bindings: Vec::new(),
        };

        if self.parse_expected(SyntaxKind::OpenBrace, "{") {
            let open = self.prev_end() - 1;
            let (bindings, terminated) = self.parse_member_block();
            declaration.bindings = bindings;
            declaration.is_terminated = terminated;
            declaration.members_span = Span::new(open, self.prev_end());
            declaration.span = Span::new(start, self.prev_end());
        }

        tracing::trace!(
            kind = kind.keyword(),
            name = %declaration.name,
            bindings = declaration.bindings.len(),
            "parsed declaration"
        );
        self.declarations.insert(slot, declaration);
    }

    /// Members up to and including the closing brace. Returns the bindings
    /// and whether the block was closed.
    fn parse_member_block(&mut self) -> (Vec<MemberBinding>, bool) {
        let mut bindings = Vec::new();
        loop {
            match self.kind() {
                SyntaxKind::EndOfFile => {
                    self.error_at_current(diagnostic_codes::TOKEN_EXPECTED, &["}"]);
                    return (bindings, false);
                }
                SyntaxKind::CloseBrace => {
                    self.next_token();
                    return (bindings, true);
                }
                SyntaxKind::Semicolon => {
                    self.next_token();
                    continue;
                }
                _ => {}
            }

            let prefix = self.parse_attributes_and_modifiers();
            if self.is_identifier_text("let") || self.is_identifier_text("var") {
                if let Some(binding) = self.parse_binding(prefix) {
                    bindings.push(binding);
                }
            } else if let Some(kind) = self.declaration_kind_at_current() {
                self.parse_aggregate(kind, prefix);
            } else if !self.is_token(SyntaxKind::CloseBrace) {
                self.skip_member();
            }
        }
    }

    /// Parse `let`/`var` and its comma-separated pattern bindings.
    pub(crate) fn parse_binding(&mut self, prefix: Prefix) -> Option<MemberBinding> {
        let keyword_token = self.next_token();
        let keyword = if self.token_text(keyword_token) == "let" {
            BindingKeyword::Let
        } else {
            BindingKeyword::Var
        };
        let start = prefix.start.unwrap_or(keyword_token.span.start);

        let mut entries = Vec::new();
        loop {
            match self.parse_binding_entry() {
                Some(entry) => entries.push(entry),
                None => {
                    self.skip_member();
                    break;
                }
            }
            if self.is_token(SyntaxKind::Comma) {
                self.next_token();
            } else {
                break;
            }
        }

        if entries.is_empty() {
            return None;
        }
        Some(MemberBinding {
            keyword,
            modifiers: prefix.modifiers,
            entries,
            span: Span::new(start, self.prev_end()),
        })
    }

    fn parse_binding_entry(&mut self) -> Option<BindingEntry> {
        let start = self.current_start();
        let pattern = match self.kind() {
            SyntaxKind::Identifier => {
                let token = self.next_token();
                let text = self.token_text(token);
                if text == "_" {
                    Pattern::Other(text.to_string())
                } else {
                    Pattern::Identifier(text.to_string())
                }
            }
            SyntaxKind::OpenParen => {
                self.skip_balanced();
                Pattern::Other(self.spelling_from(start))
            }
            _ => {
                self.error_at_current(diagnostic_codes::IDENTIFIER_EXPECTED, &[]);
                return None;
            }
        };

        let declared_type = if self.is_token(SyntaxKind::Colon) {
            self.next_token();
            Some(self.parse_type())
        } else {
            None
        };

        let has_initializer = if self.is_token(SyntaxKind::Equals) {
            self.next_token();
            self.skip_expression();
            true
        } else {
            false
        };

        let has_accessor_block = if self.is_token(SyntaxKind::OpenBrace) {
            self.skip_balanced();
            true
        } else {
            false
        };

        Some(BindingEntry {
            pattern,
            declared_type,
            has_initializer,
            has_accessor_block,
            span: Span::new(start, self.prev_end()),
        })
    }

    /// Skip an initializer expression. Stops at a depth-0 `,`, `;` or closer,
    /// at an observer block (`{ willSet`/`{ didSet`), or at a line break
    /// that does not continue the expression.
    fn skip_expression(&mut self) {
        let mut consumed = false;
        loop {
            let token = self.current();
            if consumed && token.preceded_by_line_break && !Self::continues_expression(token.kind) {
                return;
            }
            match token.kind {
                SyntaxKind::EndOfFile
                | SyntaxKind::Comma
                | SyntaxKind::Semicolon
                | SyntaxKind::CloseBrace
                | SyntaxKind::CloseParen
                | SyntaxKind::CloseBracket => return,
                SyntaxKind::OpenBrace => {
                    let next = self.nth(1);
                    let text = self.token_text(next);
                    if next.kind == SyntaxKind::Identifier && (text == "willSet" || text == "didSet")
                    {
                        return;
                    }
                    self.skip_balanced();
                }
                SyntaxKind::OpenParen | SyntaxKind::OpenBracket => {
                    self.skip_balanced();
                }
                _ => {
                    self.next_token();
                }
            }
            consumed = true;
        }
    }

    /// Tokens that continue an expression from the previous line.
    fn continues_expression(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::Dot
                | SyntaxKind::Operator
                | SyntaxKind::Question
                | SyntaxKind::Colon
                | SyntaxKind::Ampersand
                | SyntaxKind::LessThan
                | SyntaxKind::GreaterThan
        )
    }
}
