//! Whole-file expansion checked against the macro's reference output.
use pmi_cli::config::{ResolvedOptions, resolve_options};
use pmi_cli::args::{CliArgs, CliLayout};
use pmi_cli::splice::expand_source;

const MY_STRUCT: &str = r#"@PublicMemberwiseInitializerMacro
public struct MyStruct {
    let myCoolString: String
    let myOptionalString: String?
    let someInt: Int, anotherInt: Int
    let aOptional: Int?, anotherOptional: String?
    let a, b: String, c, d: Int
    let e = "String"
    let f: Int
}"#;

const MY_STRUCT_EXPANDED: &str = r#"public struct MyStruct {
    let myCoolString: String
    let myOptionalString: String?
    let someInt: Int, anotherInt: Int
    let aOptional: Int?, anotherOptional: String?
    let a, b: String, c, d: Int
    let e = "String"
    let f: Int

    public init(
        myCoolString: String,
        myOptionalString: String?,
        someInt: Int,
        anotherInt: Int,
        aOptional: Int?,
        anotherOptional: String?,
        a: String,
        b: String,
        c: Int,
        d: Int,
        f: Int
    ) {
        self.myCoolString = myCoolString
        self.myOptionalString = myOptionalString
        self.someInt = someInt
        self.anotherInt = anotherInt
        self.aOptional = aOptional
        self.anotherOptional = anotherOptional
        self.a = a
        self.b = b
        self.c = c
        self.d = d
        self.f = f
    }
}"#;

#[test]
fn reference_struct_expands_exactly() {
    let expansion = expand_source("MyStruct.swift", MY_STRUCT, &ResolvedOptions::default());
    assert!(expansion.diagnostics.is_empty(), "{:?}", expansion.diagnostics);
    assert_eq!(expansion.expanded_count, 1);
    assert_eq!(expansion.expanded, MY_STRUCT_EXPANDED);
}

#[test]
fn expansion_is_idempotent_once_attribute_is_gone() {
    let first = expand_source("MyStruct.swift", MY_STRUCT, &ResolvedOptions::default());
    let second = expand_source("MyStruct.swift", &first.expanded, &ResolvedOptions::default());
    assert!(!second.changed());
}

#[test]
fn single_line_layout_from_flags() {
    let args = CliArgs {
        layout: Some(CliLayout::SingleLine),
        ..CliArgs::default()
    };
    let options = resolve_options(&args, None).unwrap();
    let source = "@PublicMemberwiseInitializer\npublic struct Point {\n    let x, y: Double\n}\n";
    let expansion = expand_source("Point.swift", source, &options);
    assert_eq!(
        expansion.expanded,
        "public struct Point {\n    let x, y: Double\n\n    public init(x: Double, y: Double) {\n        self.x = x\n        self.y = y\n    }\n}\n"
    );
}

#[test]
fn file_with_surrounding_code_only_changes_the_target() {
    let source = r#"import Foundation

/// A user record.
@PublicMemberwiseInitializer
public struct User: Codable, Sendable {
    public let id: UUID
    public var name: String
    public var tags: [String] = []
    public var scores: [String: Double]
    var displayName: String { name.capitalized }
    static let table = "users"

    func greet() -> String {
        "Hello, \(name)"
    }
}

extension User {
    var isAnonymous: Bool { name.isEmpty }
}
"#;
    let expansion = expand_source("User.swift", source, &ResolvedOptions::default());
    assert!(expansion.diagnostics.is_empty(), "{:?}", expansion.diagnostics);
    assert!(expansion.expanded.contains("/// A user record.\npublic struct User"));
    assert!(expansion.expanded.contains(
        "    }\n\n    public init(\n        id: UUID,\n        name: String,\n        scores: [String: Double]\n    ) {\n        self.id = id\n        self.name = name\n        self.scores = scores\n    }\n}\n\nextension User {"
    ));
}
