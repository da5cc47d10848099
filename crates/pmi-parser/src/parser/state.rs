//! Parser state - token cursor, expectation helpers, and balanced skipping.

use crate::ast::{AggregateDeclaration, SourceFile};
use crate::scanner::{SyntaxKind, Token, scan};
use pmi_common::{Diagnostic, Span, diagnostic_codes};

/// Recursive-descent parser over a pre-scanned token list.
pub struct ParserState<'a> {
    pub(crate) file_name: String,
    pub(crate) source: &'a str,
    pub(crate) tokens: Vec<Token>,
    pub(crate) pos: usize,
    pub(crate) diagnostics: Vec<Diagnostic>,
    /// Declarations in source order; nested ones are inserted after their parent.
    pub(crate) declarations: Vec<AggregateDeclaration>,
}

impl<'a> ParserState<'a> {
    #[must_use]
    pub fn new(file_name: impl Into<String>, source: &'a str) -> Self {
        let file_name = file_name.into();
        let (tokens, scan_diagnostics) = scan(source);
        let diagnostics = scan_diagnostics
            .into_iter()
            .map(|diag| diag.in_file(file_name.clone()))
            .collect();
        Self {
            file_name,
            source,
            tokens,
            pos: 0,
            diagnostics,
            declarations: Vec::new(),
        }
    }

    /// Parse the whole file, collecting every nominal declaration.
    #[must_use]
    pub fn parse_source_file(mut self) -> SourceFile {
        while !self.at_eof() {
            self.parse_top_level_item();
        }
        tracing::debug!(
            file = %self.file_name,
            declarations = self.declarations.len(),
            diagnostics = self.diagnostics.len(),
            "parsed source file"
        );
        SourceFile {
            file_name: self.file_name,
            declarations: self.declarations,
            diagnostics: self.diagnostics,
        }
    }

    #[must_use]
    pub fn get_diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // =========================================================================
    // Token access
    // =========================================================================

    pub(crate) fn current(&self) -> Token {
        self.nth(0)
    }

    /// Token `n` positions ahead; clamps to the trailing `EndOfFile`.
    pub(crate) fn nth(&self, n: usize) -> Token {
        let last = self.tokens.len().saturating_sub(1);
        self.tokens[(self.pos + n).min(last)]
    }

    pub(crate) fn kind(&self) -> SyntaxKind {
        self.current().kind
    }

    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.kind() == kind
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.is_token(SyntaxKind::EndOfFile)
    }

    pub(crate) fn token_text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    pub(crate) fn current_text(&self) -> &'a str {
        self.token_text(self.current())
    }

    /// Current token is the identifier `text`.
    pub(crate) fn is_identifier_text(&self, text: &str) -> bool {
        self.is_token(SyntaxKind::Identifier) && self.current_text() == text
    }

    /// Current token sits on the same line as the previous one.
    pub(crate) fn is_on_same_line(&self) -> bool {
        !self.current().preceded_by_line_break
    }

    pub(crate) fn next_token(&mut self) -> Token {
        let token = self.current();
        if token.kind != SyntaxKind::EndOfFile {
            self.pos += 1;
        }
        token
    }

    /// Start offset of the current token.
    pub(crate) fn current_start(&self) -> u32 {
        self.current().span.start
    }

    /// End offset of the last consumed token.
    pub(crate) fn prev_end(&self) -> u32 {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span.end,
            None => 0,
        }
    }

    /// Source text from `start` through the last consumed token.
    pub(crate) fn spelling_from(&self, start: u32) -> String {
        Span::new(start, self.prev_end().max(start))
            .slice(self.source)
            .unwrap_or("")
            .to_string()
    }

    // =========================================================================
    // Expectations and diagnostics
    // =========================================================================

    pub(crate) fn error_at(&mut self, span: Span, code: u32, args: &[&str]) {
        self.diagnostics
            .push(Diagnostic::from_code(self.file_name.clone(), span, code, args));
    }

    pub(crate) fn error_at_current(&mut self, code: u32, args: &[&str]) {
        let span = self.current().span;
        self.error_at(span, code, args);
    }

    /// Consume `kind` or report `'label' expected.` at the current token.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind, label: &str) -> bool {
        if self.is_token(kind) {
            self.next_token();
            true
        } else {
            self.error_at_current(diagnostic_codes::TOKEN_EXPECTED, &[label]);
            false
        }
    }

    // =========================================================================
    // Skipping
    // =========================================================================

    pub(crate) fn is_open_delimiter(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::OpenBrace | SyntaxKind::OpenParen | SyntaxKind::OpenBracket
        )
    }

    /// Consume a delimited group starting at the current open token through
    /// its matching close. Returns false if the file ended first.
    pub(crate) fn skip_balanced(&mut self) -> bool {
        let mut stack: Vec<SyntaxKind> = Vec::new();
        loop {
            let token = self.next_token();
            match token.kind {
                SyntaxKind::OpenBrace => stack.push(SyntaxKind::CloseBrace),
                SyntaxKind::OpenParen => stack.push(SyntaxKind::CloseParen),
                SyntaxKind::OpenBracket => stack.push(SyntaxKind::CloseBracket),
                SyntaxKind::CloseBrace | SyntaxKind::CloseParen | SyntaxKind::CloseBracket => {
                    // Mismatched closers still pop so a stray `)` cannot swallow the file.
                    stack.pop();
                }
                SyntaxKind::EndOfFile => return false,
                _ => {}
            }
            if stack.is_empty() {
                return true;
            }
        }
    }

    /// Skip one member or statement this parser does not model (functions,
    /// initializers, enum cases, directives). Stops before a closing brace
    /// of the enclosing block, after a `;`, or at the next line.
    pub(crate) fn skip_member(&mut self) {
        let mut consumed = false;
        loop {
            match self.kind() {
                SyntaxKind::EndOfFile | SyntaxKind::CloseBrace => return,
                SyntaxKind::Semicolon => {
                    self.next_token();
                    return;
                }
                _ if consumed && self.current().preceded_by_line_break => return,
                kind if Self::is_open_delimiter(kind) => {
                    self.skip_balanced();
                }
                _ => {
                    self.next_token();
                }
            }
            consumed = true;
        }
    }
}
