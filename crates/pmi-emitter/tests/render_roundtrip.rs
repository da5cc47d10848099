//! Property tests for type rendering.
//!
//! For any type built only from names, optionals, arrays and dictionaries:
//!
//! 1. `render_type(parse_type(s)) == s` for the canonical spelling `s`
//! 2. parsing the rendered text yields the same shape
//! 3. wrapping any part in an unsupported spelling makes rendering fail

use pmi_emitter::render_type;
use pmi_parser::{TypeShape, parse_type};
use proptest::prelude::*;

const NAME_POOL: &[&str] = &[
    "Int", "String", "Double", "Bool", "Date", "URL", "UUID", "Data", "MyStruct", "Foo",
];

fn arb_name() -> impl Strategy<Value = TypeShape> {
    prop::sample::select(NAME_POOL).prop_map(TypeShape::named)
}

fn arb_shape() -> impl Strategy<Value = TypeShape> {
    arb_name().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(TypeShape::optional),
            inner.clone().prop_map(TypeShape::sequence),
            (inner.clone(), inner).prop_map(|(k, v)| TypeShape::mapping(k, v)),
        ]
    })
}

/// Replace one leaf with a spelling the renderer rejects.
fn poison(shape: TypeShape, path: &mut impl Iterator<Item = bool>) -> TypeShape {
    match shape {
        TypeShape::Named(_) | TypeShape::Unsupported(_) => TypeShape::Unsupported("(Int, Int)".into()),
        TypeShape::Optional(inner) => TypeShape::optional(poison(*inner, path)),
        TypeShape::Sequence(inner) => TypeShape::sequence(poison(*inner, path)),
        TypeShape::Mapping { key, value } => {
            if path.next().unwrap_or(false) {
                TypeShape::mapping(poison(*key, path), *value)
            } else {
                TypeShape::mapping(*key, poison(*value, path))
            }
        }
    }
}

proptest! {
    #[test]
    fn rendered_spelling_parses_back_to_the_same_shape(shape in arb_shape()) {
        let text = render_type(&shape).unwrap();
        let reparsed = parse_type(&text).unwrap();
        prop_assert_eq!(&reparsed, &shape);
        prop_assert_eq!(render_type(&reparsed).unwrap(), text);
    }

    #[test]
    fn any_unsupported_leaf_fails_rendering(
        shape in arb_shape(),
        path in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let poisoned = poison(shape, &mut path.into_iter());
        let err = render_type(&poisoned).unwrap_err();
        prop_assert_eq!(err.spelling, "(Int, Int)");
    }
}

#[test]
fn canonical_examples_round_trip() {
    for text in ["Int", "String?", "[String?]?", "[String: Double]", "[String: [Int?]]", "Int??"] {
        let shape = parse_type(text).unwrap();
        assert_eq!(render_type(&shape).unwrap(), text);
    }
}

#[test]
fn non_canonical_spacing_normalizes() {
    let shape = parse_type("[ String :[ Int ] ]").unwrap();
    assert_eq!(render_type(&shape).unwrap(), "[String: [Int]]");
}
