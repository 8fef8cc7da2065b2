//! Building blocks for [`flex_struct!`](crate::flex_struct) and
//! [`flex_enum!`](crate::flex_enum), and the `Box` impls they rely on.

use super::dto::sorted_entries;
use super::{
    DtoSlot, Elements, Entries, MapElement, NullableElement, SeqElement, Slot, Struct, Text, Value,
};
use crate::error::Result;
use autoflex_attr::StringEnum;
use std::collections::HashMap;

/// Replaces `target` with a fresh default struct filled by `fill`.
/// `target` is left untouched when `fill` fails.
pub fn fill_struct<T: Struct + Default>(
    target: &mut T,
    fill: &mut dyn FnMut(&mut dyn Struct) -> Result<()>,
) -> Result<()> {
    let mut fresh = T::default();
    fill(&mut fresh)?;
    *target = fresh;
    Ok(())
}

pub fn object_seq_value<T: Struct>(items: &[T]) -> Value<'_> {
    Value::List(Elements::Objects(
        items.iter().map(|item| item as &dyn Struct).collect(),
    ))
}

pub fn object_map_value<T: Struct>(entries: &HashMap<String, T>) -> Value<'_> {
    Value::Map(Entries::Objects(sorted_entries(entries, |item| item as &dyn Struct)))
}

pub fn struct_option_slot<T: Struct + Default>(option: &mut Option<T>) -> Slot<'_> {
    Slot::Dto(DtoSlot::Struct(option))
}

pub fn struct_seq_slot<T: Struct + Default>(items: &mut Vec<T>) -> Slot<'_> {
    Slot::Dto(DtoSlot::StructSeq(items))
}

pub fn struct_option_seq_slot<T: Struct + Default>(items: &mut Option<Vec<T>>) -> Slot<'_> {
    Slot::Dto(DtoSlot::StructSeq(items))
}

pub fn struct_map_slot<T: Struct + Default>(entries: &mut HashMap<String, T>) -> Slot<'_> {
    Slot::Dto(DtoSlot::StructMap(entries))
}

pub fn struct_option_map_slot<T: Struct + Default>(
    entries: &mut Option<HashMap<String, T>>,
) -> Slot<'_> {
    Slot::Dto(DtoSlot::StructMap(entries))
}

pub fn enum_value<E: StringEnum>(value: &E) -> Value<'_> {
    Value::String(Text::enumeration(value.string_representation()))
}

pub fn enum_option_slot<E: StringEnum>(option: &mut Option<E>) -> Slot<'_> {
    Slot::Dto(DtoSlot::Enum(option))
}

impl<T: Struct + ?Sized> Struct for Box<T> {
    fn struct_name(&self) -> &'static str {
        (**self).struct_name()
    }

    fn field_names(&self) -> &'static [&'static str] {
        (**self).field_names()
    }

    fn field(&self, name: &str) -> Option<&dyn super::Reflect> {
        (**self).field(name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn super::Reflect> {
        (**self).field_mut(name)
    }
}

impl<T: Struct + Default> NullableElement for Box<T> {
    fn present_value(&self) -> Value<'_> {
        Value::Object(&**self)
    }

    fn option_slot(option: &mut Option<Self>) -> Slot<'_> {
        struct_option_slot(option)
    }
}

impl<T: Struct + Default> SeqElement for Box<T> {
    fn seq_value(items: &[Self]) -> Value<'_> {
        object_seq_value(items)
    }

    fn seq_slot(items: &mut Vec<Self>) -> Slot<'_> {
        struct_seq_slot(items)
    }

    fn option_seq_slot(items: &mut Option<Vec<Self>>) -> Slot<'_> {
        struct_option_seq_slot(items)
    }
}

impl<T: Struct + Default> MapElement for Box<T> {
    fn map_value(entries: &HashMap<String, Self>) -> Value<'_> {
        object_map_value(entries)
    }

    fn map_slot(entries: &mut HashMap<String, Self>) -> Slot<'_> {
        struct_map_slot(entries)
    }

    fn option_map_slot(entries: &mut Option<HashMap<String, Self>>) -> Slot<'_> {
        struct_option_map_slot(entries)
    }
}
