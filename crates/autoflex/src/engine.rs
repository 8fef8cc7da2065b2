//! Conversion engine: entry points, per-call context and the converter seam

use crate::diag::Diagnostics;
use crate::error::{FlexError, Result};
use crate::expand::Expander;
use crate::flatten::Flattener;
use crate::options::{Direction, Options};
use crate::reflect::{Reflect, Slot, Value, short_type_name};
use crate::walk::walk_struct;

/// Summary of every diagnostic the engine reports
pub const DIAGNOSTIC_SUMMARY: &str = "AutoFlex";

/// Converts one value into one target slot for a single direction.
///
/// Implementations recurse into nested structs with
/// [`walk_struct`](crate::walk::walk_struct).
pub trait Flexer {
    fn direction(&self) -> Direction;

    fn convert(&self, cx: &mut Context<'_>, from: &dyn Reflect, to: Slot<'_>) -> Result<()>;
}

/// State of one conversion call
pub struct Context<'a> {
    options: &'a Options,
    direction: Direction,
    diagnostics: Diagnostics,
    path: Vec<String>,
}

impl<'a> Context<'a> {
    pub fn new(options: &'a Options, direction: Direction) -> Self {
        Self {
            options,
            direction,
            diagnostics: Diagnostics::new(),
            path: Vec::new(),
        }
    }

    pub fn options(&self) -> &'a Options {
        self.options
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Dotted path of the field being converted
    pub fn path(&self) -> String {
        self.path.join(".")
    }

    pub(crate) fn enter(&mut self, field: &str) {
        self.path.push(field.to_string());
    }

    pub(crate) fn leave(&mut self) {
        self.path.pop();
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Records a source/target pair that is skipped because no conversion
    /// exists between them
    pub fn incompatible(&mut self, from: &Value<'_>, to: &Slot<'_>) {
        let from = from.describe();
        let to = to.describe();
        let path = self.path();
        tracing::warn!(
            direction = %self.direction,
            from,
            to = %to,
            path = %path,
            "AutoFlex {}; incompatible types",
            self.direction
        );
        self.diagnostics.add_warning(
            DIAGNOSTIC_SUMMARY,
            format!(
                "{}: incompatible types: {from} cannot be converted to {to} ({path})",
                self.direction
            ),
        );
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Converts `from` into `to` in the given direction.
///
/// Both sides being structs walks them field by field; anything else is
/// handed to the direction's converter directly. The returned diagnostics
/// contain at most one error, naming both top-level types.
pub fn convert(
    direction: Direction,
    options: &Options,
    from: &dyn Reflect,
    to: &mut dyn Reflect,
) -> Diagnostics {
    match direction {
        Direction::Expand => convert_with(&Expander, options, from, to),
        Direction::Flatten => convert_with(&Flattener, options, from, to),
    }
}

/// Like [`convert`], with a caller-supplied converter
pub fn convert_with(
    flexer: &dyn Flexer,
    options: &Options,
    from: &dyn Reflect,
    to: &mut dyn Reflect,
) -> Diagnostics {
    let direction = flexer.direction();
    let from_type = short_type_name(from.type_name());
    let to_type = short_type_name(to.type_name());

    let mut cx = Context::new(options, direction);
    let result = dispatch(&mut cx, flexer, from, to);
    let mut diagnostics = cx.into_diagnostics();

    if let Err(err) = result {
        tracing::debug!(
            %direction,
            from = %from_type,
            to = %to_type,
            path = %err.field_path(),
            error = %err,
            "Conversion failed"
        );
        diagnostics.add_error(
            DIAGNOSTIC_SUMMARY,
            format!("{direction}[{from_type}, {to_type}]: {err}"),
        );
    }
    diagnostics
}

fn dispatch(
    cx: &mut Context<'_>,
    flexer: &dyn Flexer,
    from: &dyn Reflect,
    to: &mut dyn Reflect,
) -> Result<()> {
    if let Some(from_struct) = from.as_struct() {
        if let Some(to_struct) = to.as_struct_mut() {
            return walk_struct(cx, flexer, from_struct, to_struct);
        }
    }

    let to_type = to.type_name();
    match to.slot() {
        Some(slot) => flexer.convert(cx, from, slot),
        None => Err(FlexError::InvalidTarget(short_type_name(to_type))),
    }
}

/// Business object to DTO with default options
pub fn expand(from: &dyn Reflect, to: &mut dyn Reflect) -> Diagnostics {
    convert(Direction::Expand, &Options::default(), from, to)
}

pub fn expand_with(options: &Options, from: &dyn Reflect, to: &mut dyn Reflect) -> Diagnostics {
    convert(Direction::Expand, options, from, to)
}

/// DTO to business object with default options
pub fn flatten(from: &dyn Reflect, to: &mut dyn Reflect) -> Diagnostics {
    convert(Direction::Flatten, &Options::default(), from, to)
}

pub fn flatten_with(options: &Options, from: &dyn Reflect, to: &mut dyn Reflect) -> Diagnostics {
    convert(Direction::Flatten, options, from, to)
}
