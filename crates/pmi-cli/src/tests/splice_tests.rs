use crate::config::ResolvedOptions;
use crate::splice::{TextEdit, apply_edits, expand_source};
use pmi_common::Span;
use pmi_emitter::Layout;

fn expand(source: &str) -> String {
    let expansion = expand_source("test.swift", source, &ResolvedOptions::default());
    assert!(expansion.diagnostics.is_empty(), "{:?}", expansion.diagnostics);
    expansion.expanded
}

#[test]
fn apply_edits_back_to_front() {
    let edits = vec![
        TextEdit::insert(0, ">"),
        TextEdit::delete(Span::new(1, 3)),
        TextEdit::insert(5, "!"),
    ];
    assert_eq!(apply_edits("abcde", edits), ">ade!");
}

#[test]
fn untagged_declarations_are_left_alone() {
    let source = "struct S {\n    let a: Int\n}\n";
    let expansion = expand_source("test.swift", source, &ResolvedOptions::default());
    assert!(!expansion.changed());
    assert_eq!(expansion.expanded_count, 0);
}

#[test]
fn inserts_after_blank_line_and_removes_attribute() {
    let source = "@PublicMemberwiseInitializer\nstruct S {\n    let a: Int\n}\n";
    assert_eq!(
        expand(source),
        "struct S {\n    let a: Int\n\n    public init(\n        a: Int\n    ) {\n        self.a = a\n    }\n}\n"
    );
}

#[test]
fn crlf_files_keep_crlf_line_endings() {
    let source = "@PublicMemberwiseInitializer\r\nstruct S {\r\n    let a: Int\r\n}\r\n";
    let expanded = expand(source);
    assert_eq!(
        expanded,
        "struct S {\r\n    let a: Int\r\n\r\n    public init(\r\n        a: Int\r\n    ) {\r\n        self.a = a\r\n    }\r\n}\r\n"
    );
    assert_eq!(expanded.matches('\n').count(), expanded.matches("\r\n").count());
}

#[test]
fn crlf_blank_line_before_brace_is_reused() {
    let source = "@PublicMemberwiseInitializer\r\nstruct S {\r\n    let a: Int\r\n\r\n}\r\n";
    assert_eq!(
        expand(source),
        "struct S {\r\n    let a: Int\r\n\r\n    public init(\r\n        a: Int\r\n    ) {\r\n        self.a = a\r\n    }\r\n}\r\n"
    );
}

#[test]
fn attribute_on_same_line_is_removed_with_its_space() {
    let source = "@PublicMemberwiseInitializer public struct S {\n    let a: Int\n}";
    assert!(expand(source).starts_with("public struct S {\n"));
}

#[test]
fn keep_attribute_leaves_it_in_place() {
    let options = ResolvedOptions {
        keep_attribute: true,
        ..ResolvedOptions::default()
    };
    let source = "@PublicMemberwiseInitializer\nstruct S {\n    let a: Int\n}\n";
    let expansion = expand_source("test.swift", source, &options);
    assert!(expansion.expanded.starts_with("@PublicMemberwiseInitializer\nstruct S {"));
    assert_eq!(expansion.expanded_count, 1);
}

#[test]
fn empty_body_gets_parameterless_initializer() {
    assert_eq!(
        expand("@PublicMemberwiseInitializer\nstruct Empty {}\n"),
        "struct Empty {\n    public init() {}\n}\n"
    );
    assert_eq!(
        expand("@PublicMemberwiseInitializer\nstruct Empty {\n}\n"),
        "struct Empty {\n    public init() {}\n}\n"
    );
}

#[test]
fn single_line_body_is_broken_open() {
    assert_eq!(
        expand("@PublicMemberwiseInitializer\nstruct P { let x: Int }"),
        "struct P { let x: Int\n\n    public init(\n        x: Int\n    ) {\n        self.x = x\n    }\n}"
    );
}

#[test]
fn nested_declaration_uses_its_own_indentation() {
    let source = "enum Namespace {\n    @PublicMemberwiseInitializer\n    struct Inner {\n        let id: Int\n    }\n}\n";
    assert_eq!(
        expand(source),
        "enum Namespace {\n    struct Inner {\n        let id: Int\n\n        public init(\n            id: Int\n        ) {\n            self.id = id\n        }\n    }\n}\n"
    );
}

#[test]
fn tabs_indentation_is_followed_for_members() {
    let options = ResolvedOptions {
        emit: pmi_emitter::EmitOptions {
            printer: pmi_emitter::PrinterOptions {
                use_tabs: true,
                layout: Layout::SingleLine,
                indent_width: 4,
            },
            ..pmi_emitter::EmitOptions::default()
        },
        ..ResolvedOptions::default()
    };
    let source = "@PublicMemberwiseInitializer\nstruct T {\n\tlet a: Int\n}\n";
    let expansion = expand_source("test.swift", source, &options);
    assert_eq!(
        expansion.expanded,
        "struct T {\n\tlet a: Int\n\n\tpublic init(a: Int) {\n\t\tself.a = a\n\t}\n}\n"
    );
}

#[test]
fn failed_synthesis_keeps_source_and_reports() {
    let source = "@PublicMemberwiseInitializer\nclass C {\n    let a: Int\n}\n";
    let expansion = expand_source("test.swift", source, &ResolvedOptions::default());
    assert!(!expansion.changed());
    assert!(expansion.has_errors());
    assert_eq!(expansion.diagnostics.len(), 1);
    assert_eq!(expansion.diagnostics[0].code, 1001);
    assert_eq!(expansion.diagnostics[0].file, "test.swift");
}

#[test]
fn one_failure_does_not_block_other_declarations() {
    let source = "@PublicMemberwiseInitializer\nstruct Bad {\n    let x\n}\n\n@PublicMemberwiseInitializer\nstruct Good {\n    let y: Int\n}\n";
    let expansion = expand_source("test.swift", source, &ResolvedOptions::default());
    assert_eq!(expansion.expanded_count, 1);
    assert_eq!(expansion.diagnostics.len(), 1);
    assert_eq!(expansion.diagnostics[0].code, 1002);
    assert!(expansion.expanded.contains("@PublicMemberwiseInitializer\nstruct Bad"));
    assert!(expansion.expanded.contains("self.y = y"));
}

#[test]
fn macro_spelling_is_accepted() {
    let expanded = expand("@PublicMemberwiseInitializerMacro\nstruct S {\n    let a: Int\n}\n");
    assert!(expanded.starts_with("struct S {"));
    assert!(expanded.contains("public init("));
}
