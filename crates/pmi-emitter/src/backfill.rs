//! Type backfill for shorthand grouping.
//!
//! In `let a, b: String, c, d: Int` only `b` and `d` are annotated; `a`
//! takes `String` and `c` takes `Int`. Walking right to left, the last
//! explicit annotation seen is carried onto every unannotated entry until
//! the next explicit one replaces it.

use crate::collector::CollectedMember;
use crate::error::EngineError;
use crate::options::BackfillScope;
use pmi_common::Span;
use pmi_parser::TypeShape;

/// A member with its resolved type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedRow<'a> {
    pub name: &'a str,
    pub ty: &'a TypeShape,
    pub span: Span,
}

/// Resolve every member's type. The result is in declaration order.
pub fn backfill<'a>(
    members: &[CollectedMember<'a>],
    scope: BackfillScope,
) -> Result<Vec<ResolvedRow<'a>>, EngineError> {
    let mut rows = Vec::with_capacity(members.len());
    let mut carried: Option<&'a TypeShape> = None;
    let mut carried_from_binding: Option<usize> = None;

    for member in members.iter().rev() {
        if scope == BackfillScope::Binding && carried_from_binding != Some(member.binding_index) {
            carried = None;
            carried_from_binding = Some(member.binding_index);
        }

        let ty = match member.declared_type {
            Some(ty) => {
                carried = Some(ty);
                ty
            }
            None => {
                let Some(ty) = carried else {
                    return Err(EngineError::MissingTypeAnnotation {
                        name: member.name.to_string(),
                        span: member.span,
                    });
                };
                tracing::trace!(name = member.name, "backfilled type from later member");
                ty
            }
        };

        rows.push(ResolvedRow {
            name: member.name,
            ty,
            span: member.span,
        });
    }

    rows.reverse();
    Ok(rows)
}
