use crate::backfill::backfill;
use crate::collector::CollectedMember;
use crate::error::EngineError;
use crate::options::BackfillScope;
use pmi_common::Span;
use pmi_parser::TypeShape;

fn member<'a>(name: &'a str, ty: Option<&'a TypeShape>, binding_index: usize) -> CollectedMember<'a> {
    CollectedMember {
        name,
        declared_type: ty,
        span: Span::DUMMY,
        binding_index,
    }
}

#[test]
fn trailing_annotation_fills_leftward_within_group() {
    let string = TypeShape::named("String");
    let int = TypeShape::named("Int");
    let members = [
        member("a", None, 0),
        member("b", Some(&string), 0),
        member("c", None, 0),
        member("d", Some(&int), 0),
    ];
    let rows = backfill(&members, BackfillScope::Declaration).unwrap();
    let resolved: Vec<_> = rows.iter().map(|r| (r.name, r.ty)).collect();
    assert_eq!(
        resolved,
        vec![("a", &string), ("b", &string), ("c", &int), ("d", &int)]
    );
}

#[test]
fn missing_trailing_annotation_is_an_error() {
    let int = TypeShape::named("Int");
    let members = [member("x", Some(&int), 0), member("y", None, 0)];
    let err = backfill(&members, BackfillScope::Declaration).unwrap_err();
    assert!(
        matches!(&err, EngineError::MissingTypeAnnotation { name, .. } if name == "y"),
        "{err:?}"
    );
}

#[test]
fn declaration_scope_carries_across_bindings() {
    let int = TypeShape::named("Int");
    let members = [member("x", None, 0), member("y", Some(&int), 1)];
    let rows = backfill(&members, BackfillScope::Declaration).unwrap();
    assert_eq!(rows[0].ty, &int);
}

#[test]
fn binding_scope_stops_at_statement_boundary() {
    let int = TypeShape::named("Int");
    let members = [member("x", None, 0), member("y", Some(&int), 1)];
    let err = backfill(&members, BackfillScope::Binding).unwrap_err();
    assert!(matches!(err, EngineError::MissingTypeAnnotation { ref name, .. } if name == "x"));
}

#[test]
fn binding_scope_still_backfills_inside_a_statement() {
    let string = TypeShape::named("String");
    let int = TypeShape::named("Int");
    let members = [
        member("a", None, 0),
        member("b", Some(&string), 0),
        member("c", None, 1),
        member("d", Some(&int), 1),
    ];
    let rows = backfill(&members, BackfillScope::Binding).unwrap();
    assert_eq!(rows[0].ty, &string);
    assert_eq!(rows[2].ty, &int);
}

#[test]
fn empty_input_resolves_to_nothing() {
    assert!(backfill(&[], BackfillScope::Declaration).unwrap().is_empty());
}
