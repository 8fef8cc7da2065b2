//! Struct walker: converts a struct field by field

use crate::engine::{Context, Flexer};
use crate::error::{FlexError, Result};
use crate::reflect::Struct;
use crate::resolve::{is_reserved, resolve_field};

/// Converts every field of `from` that resolves to a settable field of `to`.
///
/// Unresolved fields are skipped. The first failing field aborts the walk;
/// fields written before it keep their new values.
pub fn walk_struct(
    cx: &mut Context<'_>,
    flexer: &dyn Flexer,
    from: &dyn Struct,
    to: &mut dyn Struct,
) -> Result<()> {
    for &field in from.field_names() {
        if is_reserved(field) {
            continue;
        }

        let Some(target_field) = resolve_field(cx.options(), field, &*to, from, false) else {
            tracing::debug!(
                field,
                from = from.struct_name(),
                to = to.struct_name(),
                "No corresponding target field"
            );
            continue;
        };
        let Some(value) = from.field(field) else {
            continue;
        };
        let Some(target) = to.field_mut(target_field) else {
            continue;
        };
        let Some(slot) = target.slot() else {
            tracing::debug!(field, target_field, "Target field is not settable");
            continue;
        };

        cx.enter(field);
        let result = flexer.convert(cx, value, slot);
        cx.leave();
        result.map_err(|err| FlexError::in_field(field, err))?;
    }
    Ok(())
}
