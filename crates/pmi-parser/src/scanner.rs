//! Scanner for the Swift declaration subset.
//!
//! Produces a flat token list. Keywords are scanned as identifiers and told
//! apart by the parser; comments are skipped. Every token records whether a
//! line break precedes it, since Swift statements are newline-terminated.

use pmi_common::{Diagnostic, Span, diagnostic_codes};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxKind {
    Identifier,
    NumericLiteral,
    StringLiteral,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Colon,
    Comma,
    Semicolon,
    At,
    Hash,
    Dot,
    Question,
    Bang,
    Equals,
    Arrow,
    LessThan,
    GreaterThan,
    Ampersand,
    /// Any other run of operator characters (`+`, `==`, `>>`, `...`).
    Operator,
    EndOfFile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: Span,
    pub preceded_by_line_break: bool,
}

impl Token {
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source).unwrap_or("")
    }
}

/// Tokenizer state over one source text.
pub struct ScannerState<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    saw_line_break: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ScannerState<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            saw_line_break: false,
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole text. The returned list always ends with `EndOfFile`.
    #[must_use]
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            tokens.push(token);
            if token.kind == SyntaxKind::EndOfFile {
                break;
            }
        }
        (tokens, self.diagnostics)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();
        let preceded_by_line_break = std::mem::take(&mut self.saw_line_break);
        let start = self.pos;

        let kind = match self.peek() {
            None => SyntaxKind::EndOfFile,
            Some(ch) => self.scan_token(ch),
        };

        Token {
            kind,
            span: Span::new(start as u32, self.pos as u32),
            preceded_by_line_break,
        }
    }

    fn scan_token(&mut self, ch: char) -> SyntaxKind {
        match ch {
            '{' => self.single(SyntaxKind::OpenBrace),
            '}' => self.single(SyntaxKind::CloseBrace),
            '(' => self.single(SyntaxKind::OpenParen),
            ')' => self.single(SyntaxKind::CloseParen),
            '[' => self.single(SyntaxKind::OpenBracket),
            ']' => self.single(SyntaxKind::CloseBracket),
            ':' => self.single(SyntaxKind::Colon),
            ',' => self.single(SyntaxKind::Comma),
            ';' => self.single(SyntaxKind::Semicolon),
            '@' => self.single(SyntaxKind::At),
            '?' => self.single(SyntaxKind::Question),
            '"' => self.scan_string(0),
            '#' => {
                let hashes = self.count_run(b'#');
                if self.bytes.get(self.pos + hashes) == Some(&b'"') {
                    self.pos += hashes;
                    self.scan_string(hashes)
                } else {
                    self.single(SyntaxKind::Hash)
                }
            }
            '`' => self.scan_escaped_identifier(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => {
                self.eat_while(is_identifier_part);
                SyntaxKind::Identifier
            }
            c if is_operator_char(c) => self.scan_operator(),
            c => {
                // Unknown character; treat it as an operator so the parser can skip it.
                self.pos += c.len_utf8();
                SyntaxKind::Operator
            }
        }
    }

    fn single(&mut self, kind: SyntaxKind) -> SyntaxKind {
        self.pos += 1;
        kind
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn peek_byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn count_run(&self, byte: u8) -> usize {
        self.bytes[self.pos..].iter().take_while(|&&b| b == byte).count()
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some('\n') | Some('\r') => {
                    self.saw_line_break = true;
                    self.pos += 1;
                }
                Some(c) if c.is_whitespace() => self.pos += c.len_utf8(),
                Some('/') if self.peek_byte_at(1) == Some(b'/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        self.pos += c.len_utf8();
                    }
                }
                Some('/') if self.peek_byte_at(1) == Some(b'*') => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    /// Block comments nest in Swift.
    fn skip_block_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        let mut depth = 1usize;
        while depth > 0 {
            match self.peek() {
                None => {
                    self.diagnostics.push(Diagnostic::from_code(
                        "",
                        Span::new(start as u32, self.pos as u32),
                        diagnostic_codes::UNTERMINATED_BLOCK_COMMENT,
                        &[],
                    ));
                    return;
                }
                Some('/') if self.peek_byte_at(1) == Some(b'*') => {
                    depth += 1;
                    self.pos += 2;
                }
                Some('*') if self.peek_byte_at(1) == Some(b'/') => {
                    depth -= 1;
                    self.pos += 2;
                }
                Some(c) => {
                    if c == '\n' || c == '\r' {
                        self.saw_line_break = true;
                    }
                    self.pos += c.len_utf8();
                }
            }
        }
    }

    fn scan_escaped_identifier(&mut self) -> SyntaxKind {
        self.pos += 1;
        self.eat_while(|c| c != '`' && c != '\n');
        if self.peek() == Some('`') {
            self.pos += 1;
        }
        SyntaxKind::Identifier
    }

    fn scan_number(&mut self) -> SyntaxKind {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_alphanumeric() || c == '_' => self.pos += 1,
                Some('.')
                    if self
                        .peek_byte_at(1)
                        .is_some_and(|b| b.is_ascii_digit()) =>
                {
                    self.pos += 1;
                }
                Some('+') | Some('-') if self.previous_is_exponent() => self.pos += 1,
                _ => break,
            }
        }
        SyntaxKind::NumericLiteral
    }

    fn previous_is_exponent(&self) -> bool {
        matches!(
            self.pos.checked_sub(1).and_then(|i| self.bytes.get(i)),
            Some(b'e') | Some(b'E') | Some(b'p') | Some(b'P')
        )
    }

    /// Scan a string literal, the opening quote at `self.pos`. `hashes` is
    /// the number of `#` delimiters already consumed for raw strings.
    fn scan_string(&mut self, hashes: usize) -> SyntaxKind {
        let start = self.pos;
        let multiline = self.text[self.pos..].starts_with("\"\"\"");
        let quote_len = if multiline { 3 } else { 1 };
        self.pos += quote_len;

        let closing: String = format!("{}{}", "\"".repeat(quote_len), "#".repeat(hashes));
        loop {
            match self.peek() {
                None => {
                    self.report_unterminated_string(start);
                    return SyntaxKind::StringLiteral;
                }
                Some('\n') | Some('\r') if !multiline => {
                    self.report_unterminated_string(start);
                    return SyntaxKind::StringLiteral;
                }
                Some('\\') if self.text[self.pos + 1..].starts_with(&"#".repeat(hashes)) => {
                    self.pos += 1 + hashes;
                    if self.peek() == Some('(') {
                        self.skip_interpolation();
                    } else if let Some(c) = self.peek() {
                        self.pos += c.len_utf8();
                    }
                }
                Some('"') if self.text[self.pos..].starts_with(closing.as_str()) => {
                    self.pos += closing.len();
                    return SyntaxKind::StringLiteral;
                }
                Some(c) => self.pos += c.len_utf8(),
            }
        }
    }

    /// Skip `( ... )` inside a string interpolation, including nested strings.
    fn skip_interpolation(&mut self) {
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            match c {
                '(' => {
                    depth += 1;
                    self.pos += 1;
                }
                ')' => {
                    self.pos += 1;
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                '"' => {
                    self.scan_string(0);
                }
                _ => self.pos += c.len_utf8(),
            }
        }
    }

    fn report_unterminated_string(&mut self, start: usize) {
        self.diagnostics.push(Diagnostic::from_code(
            "",
            Span::new(start as u32, self.pos as u32),
            diagnostic_codes::UNTERMINATED_STRING_LITERAL,
            &[],
        ));
    }

    /// Operator runs. `?` is always its own token so postfix optionals like
    /// `[Int?]?` scan cleanly; the common single-purpose spellings get their
    /// own kinds. A run may only contain `.` if it starts with one, so
    /// `=.fast` scans as `=` followed by `.fast`.
    fn scan_operator(&mut self) -> SyntaxKind {
        let start = self.pos;
        let dot_run = self.peek() == Some('.');
        self.eat_while(|c| is_operator_char(c) && c != '?' && (dot_run || c != '.'));
        match &self.text[start..self.pos] {
            "=" => SyntaxKind::Equals,
            "->" => SyntaxKind::Arrow,
            "." => SyntaxKind::Dot,
            "!" => SyntaxKind::Bang,
            "<" => SyntaxKind::LessThan,
            ">" => SyntaxKind::GreaterThan,
            "&" => SyntaxKind::Ampersand,
            _ => SyntaxKind::Operator,
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    c == '_' || c == '$' || c.is_alphanumeric()
}

fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '/' | '=' | '-' | '+' | '!' | '*' | '%' | '<' | '>' | '&' | '|' | '^' | '~' | '?' | '.'
    )
}

/// Tokenize `text`, returning tokens and any lexical diagnostics.
#[must_use]
pub fn scan(text: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    ScannerState::new(text).tokenize()
}
