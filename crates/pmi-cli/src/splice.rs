//! Source-level expansion: insert synthesized initializers into the text of
//! a file and drop the attributes that requested them.
//!
//! All edits are computed against the original text and applied back to
//! front, so earlier spans stay valid while later text shifts.

use pmi_common::{Diagnostic, Span};
use pmi_emitter::{InitializerPrinter, synthesize_initializer};
use pmi_parser::{AggregateDeclaration, parse_source_file};

use crate::config::ResolvedOptions;

/// Replace `span` of the original text with `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Span,
    pub text: String,
}

impl TextEdit {
    #[must_use]
    pub fn insert(offset: u32, text: impl Into<String>) -> Self {
        Self {
            span: Span::at(offset),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn delete(span: Span) -> Self {
        Self {
            span,
            text: String::new(),
        }
    }
}

/// The outcome of expanding one file.
#[derive(Clone, Debug)]
pub struct FileExpansion {
    pub file_name: String,
    pub original: String,
    pub expanded: String,
    /// Parser diagnostics followed by synthesis diagnostics, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of declarations that received an initializer.
    pub expanded_count: usize,
}

impl FileExpansion {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.original != self.expanded
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parse `source`, expand every declaration carrying one of the configured
/// attributes and return the rewritten text.
///
/// A declaration whose synthesis fails is left untouched (attribute
/// included) and contributes a diagnostic.
#[must_use]
pub fn expand_source(file_name: &str, source: &str, options: &ResolvedOptions) -> FileExpansion {
    let file = parse_source_file(file_name, source);
    let mut diagnostics = file.diagnostics;
    let mut edits = Vec::new();
    let mut expanded_count = 0;

    for decl in &file.declarations {
        let Some(attribute) = options
            .attributes
            .iter()
            .find_map(|name| decl.attribute(name))
        else {
            continue;
        };
        if !decl.is_terminated {
            // The parser already reported the missing `}`.
            continue;
        }

        match synthesize_initializer(decl, &options.emit) {
            Ok(init) => {
                let mut printer = InitializerPrinter::new(options.emit.printer.clone());
                printer.print(&init);
                let printed = printer.take_output();
                edits.push(insertion_edit(source, decl, &printed, options));
                if !options.keep_attribute {
                    edits.push(TextEdit::delete(attribute_removal_span(source, attribute.span)));
                }
                expanded_count += 1;
                tracing::debug!(
                    file = file_name,
                    declaration = %decl.name,
                    parameters = init.parameters.len(),
                    "expanded declaration"
                );
            }
            Err(err) => {
                tracing::debug!(file = file_name, declaration = %decl.name, error = %err, "synthesis failed");
                diagnostics.push(err.to_diagnostic(file_name));
            }
        }
    }

    diagnostics.sort_by_key(|diag| diag.start);
    FileExpansion {
        file_name: file_name.to_string(),
        original: source.to_string(),
        expanded: apply_edits(source, edits),
        diagnostics,
        expanded_count,
    }
}

/// Apply non-overlapping edits to `source`.
#[must_use]
pub fn apply_edits(source: &str, mut edits: Vec<TextEdit>) -> String {
    edits.sort_by(|a, b| b.span.start.cmp(&a.span.start).then(b.span.end.cmp(&a.span.end)));
    let mut text = source.to_string();
    for edit in edits {
        let range = edit.span.start as usize..edit.span.end as usize;
        if range.end > text.len() || range.start > range.end {
            continue;
        }
        text.replace_range(range, &edit.text);
    }
    text
}

/// Build the edit placing `printed` before the closing brace of `decl`.
fn insertion_edit(
    source: &str,
    decl: &AggregateDeclaration,
    printed: &str,
    options: &ResolvedOptions,
) -> TextEdit {
    let open = decl.members_span.start as usize;
    let close = (decl.members_span.end as usize).saturating_sub(1);
    let body = source.get(open + 1..close).unwrap_or("");
    let has_members = !body.trim().is_empty();

    let decl_indent = line_indent(source, decl.keyword_span.start as usize);
    let member_indent = member_indent(body).unwrap_or_else(|| {
        format!("{decl_indent}{}", options.emit.printer.indent_unit())
    });
    let newline = line_terminator(source);
    let block = indent_lines(printed, &member_indent, newline);

    let before_close = &source[..close];
    let line_start = before_close.rfind('\n').map_or(0, |i| i + 1);
    let brace_on_own_line = before_close[line_start..].trim().is_empty() && line_start > open;

    if brace_on_own_line {
        // `}` starts its line: insert whole lines in front of it.
        let above = &before_close[..line_start];
        let already_blank = above.ends_with("\n\n") || above.ends_with("\n\r\n");
        let mut text = String::new();
        if has_members && !already_blank {
            text.push_str(newline);
        }
        text.push_str(&block);
        text.push_str(newline);
        TextEdit::insert(line_start as u32, text)
    } else {
        // `struct S { let a: Int }`: break the line and re-indent the brace.
        let trimmed_end = before_close.trim_end_matches([' ', '\t']).len();
        let mut text = String::from(newline);
        if has_members {
            text.push_str(newline);
        }
        text.push_str(&block);
        text.push_str(newline);
        text.push_str(&decl_indent);
        TextEdit {
            span: Span::new(trimmed_end as u32, close as u32),
            text,
        }
    }
}

/// Leading whitespace of the line containing `offset`.
fn line_indent(source: &str, offset: usize) -> String {
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    source[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect()
}

/// Indentation of the first member line after the opening brace.
fn member_indent(body: &str) -> Option<String> {
    body.lines()
        .skip(1)
        .find(|line| !line.trim().is_empty())
        .map(|line| {
            line.chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .collect()
        })
}

/// `"\r\n"` when the file's first line ends that way, otherwise `"\n"`.
fn line_terminator(source: &str) -> &'static str {
    match source.find('\n') {
        Some(i) if source[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Prefix every line of `text` with `indent`, joining with `newline`.
fn indent_lines(text: &str, indent: &str, newline: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join(newline)
}

/// The attribute plus the whitespace after it, so the declaration keeps its
/// position. An attribute on its own line takes the line break and the next
/// line's indentation with it.
fn attribute_removal_span(source: &str, attribute: Span) -> Span {
    let bytes = source.as_bytes();
    let mut end = attribute.end as usize;
    while end < bytes.len() && matches!(bytes[end], b' ' | b'\t') {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'\r' {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'\n' {
        end += 1;
        while end < bytes.len() && matches!(bytes[end], b' ' | b'\t') {
            end += 1;
        }
    }
    Span::new(attribute.start, end as u32)
}
