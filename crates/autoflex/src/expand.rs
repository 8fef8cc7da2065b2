//! Expander: business object attributes to plain DTO values

use crate::engine::{Context, Flexer};
use crate::error::{FlexError, Result};
use crate::options::Direction;
use crate::reflect::{
    DtoSlot, Elements, Entries, Model, Reflect, Slot, StringKind, Struct, Text, Value,
    short_type_name,
};
use crate::resolve::{FIELD_NAME_MAP_BLOCK_KEY, is_map_block_key};
use crate::walk::walk_struct;
use autoflex_attr::Rfc3339;
use chrono::{DateTime, Utc};

/// Converts business object attributes into DTO values.
///
/// Null and unknown attributes leave the target untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expander;

impl Flexer for Expander {
    fn direction(&self) -> Direction {
        Direction::Expand
    }

    fn convert(&self, cx: &mut Context<'_>, from: &dyn Reflect, to: Slot<'_>) -> Result<()> {
        if from.model() != Model::Attr {
            return Err(FlexError::NotAnAttribute(short_type_name(from.type_name())));
        }

        let value = from.value();
        match to {
            Slot::Dto(to) => self.expand(cx, value, to),
            to @ Slot::Attr(_) => {
                if !matches!(value, Value::Null | Value::Unknown) {
                    cx.incompatible(&value, &to);
                }
                Ok(())
            }
        }
    }
}

fn parse_time(text: &Text<'_>) -> Result<DateTime<Utc>> {
    Ok(Rfc3339::new(text.as_str()).to_time()?)
}

fn owned_strings(items: Vec<Option<&str>>) -> Vec<Option<String>> {
    items.into_iter().map(|item| item.map(str::to_string)).collect()
}

impl Expander {
    fn expand(&self, cx: &mut Context<'_>, value: Value<'_>, to: DtoSlot<'_>) -> Result<()> {
        match (value, to) {
            (Value::Null | Value::Unknown, _) => {}

            (Value::Bool(v), DtoSlot::Bool(to)) => *to = v,
            (Value::Bool(v), DtoSlot::OptionBool(to)) => *to = Some(v),

            (Value::Int(v), DtoSlot::Int64(to)) => *to = v,
            (Value::Int(v), DtoSlot::OptionInt64(to)) => *to = Some(v),
            (Value::Int(v), DtoSlot::Int32(to)) => *to = v as i32,
            (Value::Int(v), DtoSlot::OptionInt32(to)) => *to = Some(v as i32),

            (Value::Float(v), DtoSlot::Float64(to)) => *to = v,
            (Value::Float(v), DtoSlot::OptionFloat64(to)) => *to = Some(v),
            (Value::Float(v), DtoSlot::Float32(to)) => *to = v as f32,
            (Value::Float(v), DtoSlot::OptionFloat32(to)) => *to = Some(v as f32),

            (Value::String(text), DtoSlot::String(to)) => *to = text.value.into_owned(),
            (Value::String(text), DtoSlot::OptionString(to)) => *to = Some(text.value.into_owned()),
            (Value::String(text), DtoSlot::Enum(to)) => to.set(text.as_str()),
            (Value::String(text), DtoSlot::Time(to)) if text.kind == StringKind::Rfc3339 => {
                *to = parse_time(&text)?;
            }
            (Value::String(text), DtoSlot::OptionTime(to)) if text.kind == StringKind::Rfc3339 => {
                *to = Some(parse_time(&text)?);
            }

            (Value::Object(object), DtoSlot::Struct(to)) => {
                to.fill(&mut |target| walk_struct(cx, self, object, target))?;
            }

            (
                Value::List(Elements::Strings(items)) | Value::Set(Elements::Strings(items)),
                DtoSlot::Strings(to),
            ) => to.set(owned_strings(items))?,

            (
                Value::List(Elements::Objects(items)) | Value::Set(Elements::Objects(items)),
                to,
            ) => self.expand_objects(cx, items, to)?,

            (Value::Map(Entries::Strings(entries)), DtoSlot::StringMap(to)) => to.set(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
                    .collect(),
            )?,

            (value, to) => cx.incompatible(&value, &Slot::Dto(to)),
        }
        Ok(())
    }

    /// A nested object collection may become a single struct (its first
    /// element), a sequence of structs, or a map keyed by each element's
    /// map block key. Any other target is an error.
    fn expand_objects(
        &self,
        cx: &mut Context<'_>,
        items: Vec<&dyn Struct>,
        to: DtoSlot<'_>,
    ) -> Result<()> {
        match to {
            DtoSlot::Struct(to) => {
                let Some(first) = items.first().copied() else {
                    return Ok(());
                };
                to.fill(&mut |target| walk_struct(cx, self, first, target))
            }
            DtoSlot::StructSeq(to) => {
                to.fill(items.len(), &mut |i, target| walk_struct(cx, self, items[i], target))
            }
            DtoSlot::StructMap(to) => to.fill(items.len(), &mut |i, target| {
                walk_struct(cx, self, items[i], target)?;
                map_block_key(items[i])
            }),
            other => Err(FlexError::incompatible("nested object collection", other.describe())),
        }
    }
}

/// The map key carried by a keyed-collection element
fn map_block_key(item: &dyn Struct) -> Result<String> {
    let missing = || FlexError::MissingMapKey(FIELD_NAME_MAP_BLOCK_KEY.to_string());

    let field = item
        .field_names()
        .iter()
        .copied()
        .find(|name| is_map_block_key(name))
        .and_then(|name| item.field(name))
        .ok_or_else(missing)?;

    match field.value() {
        Value::String(text) => Ok(text.value.into_owned()),
        Value::Null | Value::Unknown => Err(missing()),
        other => Err(FlexError::incompatible(other.describe(), "map key")),
    }
}
