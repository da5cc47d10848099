//! Member collection: which stored members need a constructor parameter.

use crate::error::EngineError;
use pmi_common::Span;
use pmi_parser::{AggregateDeclaration, DeclarationKind, TypeShape};

/// An eligible entry, type still as written (possibly absent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollectedMember<'a> {
    pub name: &'a str,
    pub declared_type: Option<&'a TypeShape>,
    pub span: Span,
    /// Index of the `let`/`var` statement within the declaration.
    pub binding_index: usize,
}

/// Collect eligible members of `decl` in declaration order.
///
/// A binding with an accessor block, or a `static`/`class` binding, is
/// dropped whole. Within a kept binding, entries with a default value or a
/// non-identifier pattern are dropped individually.
pub fn collect_members(decl: &AggregateDeclaration) -> Result<Vec<CollectedMember<'_>>, EngineError> {
    if decl.kind != DeclarationKind::Struct {
        return Err(EngineError::UnsupportedDeclarationKind {
            name: decl.name.clone(),
            kind: decl.kind,
            span: decl.head_span(),
        });
    }

    let mut members = Vec::new();
    for (binding_index, binding) in decl.bindings.iter().enumerate() {
        if binding.has_accessor_block() {
            tracing::trace!(binding = binding_index, "skipping binding with accessor block");
            continue;
        }
        if binding.is_type_level() {
            tracing::trace!(binding = binding_index, "skipping type-level binding");
            continue;
        }

        for entry in &binding.entries {
            let Some(name) = entry.name() else {
                tracing::trace!(pattern = ?entry.pattern, "skipping non-identifier pattern");
                continue;
            };
            if entry.has_initializer {
                tracing::trace!(name, "skipping member with default value");
                continue;
            }
            members.push(CollectedMember {
                name,
                declared_type: entry.declared_type.as_ref(),
                span: entry.span,
                binding_index,
            });
        }
    }
    Ok(members)
}
