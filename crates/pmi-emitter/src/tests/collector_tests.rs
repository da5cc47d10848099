use crate::collector::collect_members;
use crate::error::EngineError;
use pmi_parser::{
    AggregateDeclaration, BindingEntry, BindingKeyword, DeclarationKind, MemberBinding, Pattern,
    TypeShape,
};

fn let_binding(entries: Vec<BindingEntry>) -> MemberBinding {
    entries
        .into_iter()
        .fold(MemberBinding::new(BindingKeyword::Let), MemberBinding::with_entry)
}

fn collected_names(decl: &AggregateDeclaration) -> Vec<&str> {
    collect_members(decl)
        .expect("struct should collect")
        .iter()
        .map(|m| m.name)
        .collect()
}

#[test]
fn collects_entries_in_declaration_order() {
    let decl = AggregateDeclaration::new(DeclarationKind::Struct, "S")
        .with_binding(let_binding(vec![
            BindingEntry::untyped("a"),
            BindingEntry::typed("b", TypeShape::named("String")),
        ]))
        .with_binding(let_binding(vec![BindingEntry::typed("c", TypeShape::named("Int"))]));

    let members = collect_members(&decl).unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].name, "a");
    assert_eq!(members[0].declared_type, None);
    assert_eq!(members[0].binding_index, 0);
    assert_eq!(members[1].declared_type, Some(&TypeShape::named("String")));
    assert_eq!(members[2].binding_index, 1);
}

#[test]
fn defaulted_entries_are_dropped_individually() {
    let decl = AggregateDeclaration::new(DeclarationKind::Struct, "S").with_binding(let_binding(vec![
        BindingEntry::typed("x", TypeShape::named("Int")).with_initializer(),
        BindingEntry::typed("y", TypeShape::named("Int")),
    ]));
    assert_eq!(collected_names(&decl), vec!["y"]);
}

#[test]
fn accessor_block_drops_the_whole_binding() {
    let decl = AggregateDeclaration::new(DeclarationKind::Struct, "S")
        .with_binding(let_binding(vec![
            BindingEntry::typed("p", TypeShape::named("Int")),
            BindingEntry::typed("q", TypeShape::named("Int")).with_accessor_block(),
        ]))
        .with_binding(let_binding(vec![BindingEntry::typed("r", TypeShape::named("Int"))]));
    assert_eq!(collected_names(&decl), vec!["r"]);
}

#[test]
fn type_level_bindings_are_skipped() {
    let decl = AggregateDeclaration::new(DeclarationKind::Struct, "S")
        .with_binding(
            let_binding(vec![BindingEntry::typed("shared", TypeShape::named("Int"))])
                .with_modifier("static"),
        )
        .with_binding(let_binding(vec![BindingEntry::typed("own", TypeShape::named("Int"))]));
    assert_eq!(collected_names(&decl), vec!["own"]);
}

#[test]
fn non_identifier_patterns_are_skipped() {
    let mut tuple = BindingEntry::typed("unused", TypeShape::Unsupported("(Int, Int)".into()));
    tuple.pattern = Pattern::Other("(x, y)".into());
    let decl = AggregateDeclaration::new(DeclarationKind::Struct, "S").with_binding(let_binding(vec![
        tuple,
        BindingEntry::typed("z", TypeShape::named("Int")),
    ]));
    assert_eq!(collected_names(&decl), vec!["z"]);
}

#[test]
fn empty_struct_collects_nothing() {
    let decl = AggregateDeclaration::new(DeclarationKind::Struct, "Empty");
    assert!(collect_members(&decl).unwrap().is_empty());
}

#[test]
fn non_struct_kinds_are_rejected() {
    for kind in [
        DeclarationKind::Class,
        DeclarationKind::Enum,
        DeclarationKind::Actor,
        DeclarationKind::Protocol,
        DeclarationKind::Extension,
    ] {
        let decl = AggregateDeclaration::new(kind, "Thing")
            .with_binding(let_binding(vec![BindingEntry::typed("a", TypeShape::named("Int"))]));
        match collect_members(&decl) {
            Err(EngineError::UnsupportedDeclarationKind { name, kind: got, .. }) => {
                assert_eq!(name, "Thing");
                assert_eq!(got, kind);
            }
            other => panic!("expected UnsupportedDeclarationKind for {kind:?}, got {other:?}"),
        }
    }
}
