//! Parsing whole source files the way the expansion driver sees them.
use pmi_parser::{DeclarationKind, TypeShape, parse_source_file};

const MY_STRUCT: &str = r#"import Foundation

@PublicMemberwiseInitializer
public struct MyStruct {
    let myCoolString: String
    let myOptionalString: String?
    let someInt: Int, anotherInt: Int
    let aOptional: Int?, anotherOptional: String?
    let a, b: String, c, d: Int
    let e = "String"
    let f: Int
}
"#;

#[test]
fn parses_the_reference_struct() {
    let file = parse_source_file("MyStruct.swift", MY_STRUCT);
    assert!(file.diagnostics.is_empty(), "{:?}", file.diagnostics);
    assert_eq!(file.file_name, "MyStruct.swift");
    assert_eq!(file.declarations.len(), 1);

    let decl = &file.declarations[0];
    assert_eq!(decl.kind, DeclarationKind::Struct);
    assert!(decl.attribute("PublicMemberwiseInitializer").is_some());
    assert_eq!(decl.bindings.len(), 7);

    let entry_count: usize = decl.bindings.iter().map(|b| b.entries.len()).sum();
    assert_eq!(entry_count, 12);

    let optional = &decl.bindings[1].entries[0];
    assert_eq!(optional.name(), Some("myOptionalString"));
    assert_eq!(
        optional.declared_type,
        Some(TypeShape::optional(TypeShape::named("String")))
    );

    let defaulted = &decl.bindings[5].entries[0];
    assert_eq!(defaulted.name(), Some("e"));
    assert!(defaulted.has_initializer);
    assert_eq!(defaulted.declared_type, None);
}

#[test]
fn entry_spans_cover_their_source() {
    let file = parse_source_file("MyStruct.swift", MY_STRUCT);
    let decl = &file.declarations[0];
    let group = &decl.bindings[4];
    let spelled: Vec<&str> = group
        .entries
        .iter()
        .filter_map(|entry| entry.span.slice(MY_STRUCT))
        .collect();
    assert_eq!(spelled, vec!["a", "b: String", "c", "d: Int"]);
    assert_eq!(
        group.span.slice(MY_STRUCT),
        Some("let a, b: String, c, d: Int")
    );
}

#[test]
fn attribute_on_non_struct_declarations_is_recorded() {
    let source = "@PublicMemberwiseInitializer\nenum Choice {\n    case yes, no\n}\n@PublicMemberwiseInitializer\nactor Counter {\n    var count: Int\n}\n";
    let file = parse_source_file("Kinds.swift", source);
    assert_eq!(file.declarations.len(), 2);
    assert_eq!(file.declarations[0].kind, DeclarationKind::Enum);
    assert_eq!(file.declarations[1].kind, DeclarationKind::Actor);
    assert!(
        file.declarations
            .iter()
            .all(|decl| decl.attribute("PublicMemberwiseInitializer").is_some())
    );
}
