use crate::backfill::backfill;
use crate::collector::collect_members;
use crate::error::EngineError;
use crate::ir::SynthesizedInitializer;
use crate::options::EmitOptions;
use crate::type_render::render_type;
use pmi_parser::AggregateDeclaration;

/// Build the memberwise initializer for `decl`.
///
/// Fails when `decl` is not a struct, when a shorthand group has no trailing
/// annotation, or when a member's type cannot be rendered. A failure
/// produces no partial initializer.
pub fn synthesize_initializer(
    decl: &AggregateDeclaration,
    options: &EmitOptions,
) -> Result<SynthesizedInitializer, EngineError> {
    let members = collect_members(decl)?;
    let rows = backfill(&members, options.backfill_scope)?;

    let mut init = SynthesizedInitializer::new(options.access_level);
    for row in rows {
        let type_text = render_type(row.ty).map_err(|err| err.for_member(row.name, row.span))?;
        init.push_member(row.name, type_text);
    }

    tracing::debug!(
        declaration = %decl.name,
        parameters = init.parameters.len(),
        "synthesized memberwise initializer"
    );
    Ok(init)
}
