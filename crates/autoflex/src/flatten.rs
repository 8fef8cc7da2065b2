//! Flattener: plain DTO values to business object attributes

use crate::engine::{Context, Flexer};
use crate::error::{FlexError, Result};
use crate::options::Direction;
use crate::reflect::{AttrSlot, Elements, Entries, Reflect, Slot, Struct, Value};
use crate::resolve::{FIELD_NAME_MAP_BLOCK_KEY, is_map_block_key};
use crate::walk::walk_struct;
use autoflex_attr::{Arn, List, Map, Rfc3339, Set, StringValue};

/// Converts DTO values into business object attributes.
///
/// An absent DTO value (`None`) always becomes an explicit null attribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flattener;

impl Flexer for Flattener {
    fn direction(&self) -> Direction {
        Direction::Flatten
    }

    fn convert(&self, cx: &mut Context<'_>, from: &dyn Reflect, to: Slot<'_>) -> Result<()> {
        let to = match to {
            Slot::Attr(to) => to,
            Slot::Dto(other) => return Err(FlexError::NotAnAttribute(other.describe())),
        };
        self.flatten(cx, from.value(), to)
    }
}

fn known_strings(items: Vec<Option<&str>>) -> Vec<StringValue> {
    items
        .into_iter()
        .map(|item| item.map(str::to_string).into())
        .collect()
}

impl Flattener {
    fn flatten(&self, cx: &mut Context<'_>, value: Value<'_>, to: AttrSlot<'_>) -> Result<()> {
        match (value, to) {
            (Value::Null, to) => to.set_null(),
            (Value::Unknown, _) => {}

            (Value::Bool(v), AttrSlot::Bool(to)) => to.set(v),
            (Value::Int(v), AttrSlot::Int64(to)) => to.set(v),
            (Value::Float(v), AttrSlot::Float64(to)) => to.set(v),

            (Value::String(text), AttrSlot::String(to)) => to.set(text.value.into_owned()),
            (Value::String(text), AttrSlot::Enum(to)) => {
                if text.value.is_empty() {
                    to.set_null();
                } else {
                    to.set(text.as_str());
                }
            }
            (Value::String(text), AttrSlot::Rfc3339(to)) => {
                to.set(Rfc3339::new(text.value.into_owned()));
            }
            (Value::Time(time), AttrSlot::Rfc3339(to)) => to.set(Rfc3339::from_time(time)),
            (Value::String(text), AttrSlot::Arn(to)) => to.set(Arn::parse(text.value)?),

            (Value::Object(object), AttrSlot::Object(to) | AttrSlot::NestedObjects(to)) => {
                to.fill(1, &mut |_, target| walk_struct(cx, self, object, target))?;
            }

            (
                Value::List(Elements::Strings(items)) | Value::Set(Elements::Strings(items)),
                AttrSlot::List(to),
            ) => to.set(List(known_strings(items))),
            (
                Value::List(Elements::Strings(items)) | Value::Set(Elements::Strings(items)),
                AttrSlot::Set(to),
            ) => to.set(Set(known_strings(items))),

            (
                Value::List(Elements::Objects(items)) | Value::Set(Elements::Objects(items)),
                AttrSlot::NestedObjects(to),
            ) => {
                to.fill(items.len(), &mut |i, target| {
                    walk_struct(cx, self, items[i], target)
                })?;
            }
            (Value::List(Elements::Objects(_)) | Value::Set(Elements::Objects(_)), other) => {
                return Err(FlexError::incompatible("nested object collection", other.describe()));
            }

            (Value::Map(Entries::Strings(entries)), AttrSlot::Map(to)) => to.set(Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v.map(str::to_string).into()))
                    .collect(),
            )),

            (Value::Map(Entries::Objects(entries)), AttrSlot::NestedObjects(to)) => {
                to.fill(entries.len(), &mut |i, target| {
                    let (key, object) = entries[i];
                    walk_struct(cx, self, object, target)?;
                    set_map_block_key(target, key)
                })?;
            }
            (Value::Map(Entries::Objects(_)), other) => {
                return Err(FlexError::incompatible("map of nested objects", other.describe()));
            }

            (value, to) => cx.incompatible(&value, &Slot::Attr(to)),
        }
        Ok(())
    }
}

/// Stores a map key in the element's map block key field
fn set_map_block_key(target: &mut dyn Struct, key: &str) -> Result<()> {
    let missing = || FlexError::MissingMapKey(FIELD_NAME_MAP_BLOCK_KEY.to_string());

    let name = target
        .field_names()
        .iter()
        .copied()
        .find(|name| is_map_block_key(name))
        .ok_or_else(missing)?;
    let field = target.field_mut(name).ok_or_else(missing)?;

    match field.slot() {
        Some(Slot::Attr(AttrSlot::String(to))) => to.set(key.to_string()),
        Some(Slot::Attr(AttrSlot::Enum(to))) => to.set(key),
        Some(other) => return Err(FlexError::incompatible("map key", other.describe())),
        None => return Err(missing()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use autoflex_attr::{ArnValue, AttrError, Float64Value, Int64Value, Rfc3339Value, SetValue};
    use chrono::{TimeZone, Utc};

    fn flatten_into(from: &dyn Reflect, to: &mut dyn Reflect) -> (Result<()>, Context<'static>) {
        static OPTIONS: Options = Options {
            resource_prefix: None,
        };
        let mut cx = Context::new(&OPTIONS, Direction::Flatten);
        let slot = to.slot().expect("settable target");
        let result = Flattener.convert(&mut cx, from, slot);
        (result, cx)
    }

    #[test]
    fn test_none_becomes_null() {
        let mut target = StringValue::from("sentinel");
        flatten_into(&None::<String>, &mut target).0.unwrap();
        assert_eq!(target, StringValue::Null);
    }

    #[test]
    fn test_zero_values_are_known() {
        let mut int = Int64Value::Null;
        flatten_into(&0_i32, &mut int).0.unwrap();
        assert_eq!(int, Int64Value::known(0));

        let mut text = StringValue::Null;
        flatten_into(&String::new(), &mut text).0.unwrap();
        assert_eq!(text, StringValue::known(String::new()));
    }

    #[test]
    fn test_f32_widening() {
        let mut target = Float64Value::Null;
        flatten_into(&Some(7.7_f32), &mut target).0.unwrap();
        assert_eq!(target, Float64Value::known(f64::from(7.7_f32)));
    }

    #[test]
    fn test_time_into_rfc3339() {
        let mut target = Rfc3339Value::Null;
        let time = Utc.with_ymd_and_hms(2013, 9, 25, 9, 34, 1).unwrap();
        flatten_into(&time, &mut target).0.unwrap();
        assert_eq!(target, Rfc3339Value::known(Rfc3339::new("2013-09-25T09:34:01Z")));
    }

    #[test]
    fn test_string_into_arn() {
        let mut target = ArnValue::Null;
        let source = Some("arn:aws:lex:us-west-2:123456789012:bot/Ovodoghen".to_string());
        flatten_into(&source, &mut target).0.unwrap();
        assert_eq!(target.get().map(Arn::service), Some("lex"));

        flatten_into(&None::<String>, &mut target).0.unwrap();
        assert_eq!(target, ArnValue::Null);
    }

    #[test]
    fn test_invalid_arn_fails() {
        let mut target = ArnValue::Null;
        let (result, _) = flatten_into(&String::from("Ovodoghen"), &mut target);
        assert!(matches!(
            result,
            Err(FlexError::InvalidValue(AttrError::InvalidArn { .. }))
        ));
        assert_eq!(target, ArnValue::Null);
    }

    #[test]
    fn test_null_elements_survive() {
        let mut target = SetValue::Null;
        let source = vec![Some("a".to_string()), None];
        flatten_into(&source, &mut target).0.unwrap();
        assert_eq!(
            target,
            SetValue::known(Set(vec![StringValue::Null, StringValue::from("a")]))
        );
    }

    #[test]
    fn test_target_must_be_attribute() {
        let mut target = String::new();
        let (result, _) = flatten_into(&String::from("a"), &mut target);
        assert!(matches!(result, Err(FlexError::NotAnAttribute(ref name)) if name == "String"));
    }

    #[test]
    fn test_incompatible_scalar_warns() {
        let mut target = Int64Value::Null;
        let (result, cx) = flatten_into(&String::from("a"), &mut target);
        result.unwrap();
        assert!(target.is_null());
        assert_eq!(cx.diagnostics().warnings().count(), 1);
    }
}
