//! Canonical spelling of a `TypeShape`.

use crate::error::UnsupportedShape;
use pmi_parser::TypeShape;

/// Render `shape` as Swift type syntax: `Int`, `T?`, `[T]`, `[K: V]`.
pub fn render_type(shape: &TypeShape) -> Result<String, UnsupportedShape> {
    let mut out = String::new();
    write_type(shape, &mut out)?;
    Ok(out)
}

fn write_type(shape: &TypeShape, out: &mut String) -> Result<(), UnsupportedShape> {
    match shape {
        TypeShape::Named(name) => out.push_str(name),
        TypeShape::Optional(inner) => {
            write_type(inner, out)?;
            out.push('?');
        }
        TypeShape::Sequence(element) => {
            out.push('[');
            write_type(element, out)?;
            out.push(']');
        }
        TypeShape::Mapping { key, value } => {
            out.push('[');
            write_type(key, out)?;
            out.push_str(": ");
            write_type(value, out)?;
            out.push(']');
        }
        TypeShape::Unsupported(spelling) => {
            return Err(UnsupportedShape {
                spelling: spelling.clone(),
            });
        }
    }
    Ok(())
}
