//! Plain data-transfer types: scalars, `Option`, `Vec`, `HashMap` and `Box`

use super::{
    DtoSlot, Elements, Entries, MapElement, Model, NullableElement, Reflect, SeqElement, Slot,
    Struct, Text, Value,
};
use crate::error::{FlexError, Result};
use autoflex_attr::StringEnum;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Target for a DTO string enum
pub trait EnumSlot {
    fn set(&mut self, value: &str);

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Target for a sequence of strings
pub trait StringsSlot {
    /// Replaces the target; `None` marks a null element
    fn set(&mut self, items: Vec<Option<String>>) -> Result<()>;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Target for a string-keyed map of strings
pub trait StringMapSlot {
    fn set(&mut self, entries: Vec<(String, Option<String>)>) -> Result<()>;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Target for a single nested struct.
///
/// `fill` receives a fresh default struct; it is stored only when `fill`
/// succeeds.
pub trait StructSlot {
    fn fill(&mut self, fill: &mut dyn FnMut(&mut dyn Struct) -> Result<()>) -> Result<()>;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Target for a sequence of nested structs
pub trait StructSeqSlot {
    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()>;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Target for nested structs keyed by string; `fill` returns each key
pub trait StructMapSlot {
    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<String>,
    ) -> Result<()>;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! dto_scalar {
    ($ty:ty, $slot:ident, $option_slot:ident, |$v:ident| $value:expr) => {
        impl Reflect for $ty {
            fn model(&self) -> Model {
                Model::Dto
            }

            fn value(&self) -> Value<'_> {
                let $v = self;
                $value
            }

            fn slot(&mut self) -> Option<Slot<'_>> {
                Some(Slot::Dto(DtoSlot::$slot(self)))
            }
        }

        impl NullableElement for $ty {
            fn present_value(&self) -> Value<'_> {
                let $v = self;
                $value
            }

            fn option_slot(option: &mut Option<Self>) -> Slot<'_> {
                Slot::Dto(DtoSlot::$option_slot(option))
            }
        }
    };
}

dto_scalar!(bool, Bool, OptionBool, |v| Value::Bool(*v));
dto_scalar!(i32, Int32, OptionInt32, |v| Value::Int(i64::from(*v)));
dto_scalar!(i64, Int64, OptionInt64, |v| Value::Int(*v));
dto_scalar!(f32, Float32, OptionFloat32, |v| Value::Float(f64::from(*v)));
dto_scalar!(f64, Float64, OptionFloat64, |v| Value::Float(*v));
dto_scalar!(String, String, OptionString, |v| Value::String(Text::plain(v.as_str())));
dto_scalar!(DateTime<Utc>, Time, OptionTime, |v| Value::Time(*v));

/// Borrowed strings can be read but never written.
impl Reflect for &str {
    fn model(&self) -> Model {
        Model::Dto
    }

    fn value(&self) -> Value<'_> {
        Value::String(Text::plain(*self))
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        None
    }
}

impl<T: NullableElement> Reflect for Option<T> {
    fn model(&self) -> Model {
        Model::Dto
    }

    fn value(&self) -> Value<'_> {
        match self {
            Some(value) => value.present_value(),
            None => Value::Null,
        }
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        Some(T::option_slot(self))
    }
}

impl<T: SeqElement> Reflect for Vec<T> {
    fn model(&self) -> Model {
        Model::Dto
    }

    fn value(&self) -> Value<'_> {
        T::seq_value(self)
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        Some(T::seq_slot(self))
    }
}

impl<T: MapElement> Reflect for HashMap<String, T> {
    fn model(&self) -> Model {
        Model::Dto
    }

    fn value(&self) -> Value<'_> {
        T::map_value(self)
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        Some(T::map_slot(self))
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn model(&self) -> Model {
        (**self).model()
    }

    fn value(&self) -> Value<'_> {
        (**self).value()
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        (**self).slot()
    }

    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_struct(&self) -> Option<&dyn Struct> {
        (**self).as_struct()
    }

    fn as_struct_mut(&mut self) -> Option<&mut dyn Struct> {
        (**self).as_struct_mut()
    }
}

impl<T: SeqElement> NullableElement for Vec<T> {
    fn present_value(&self) -> Value<'_> {
        T::seq_value(self)
    }

    fn option_slot(option: &mut Option<Self>) -> Slot<'_> {
        T::option_seq_slot(option)
    }
}

impl<T: MapElement> NullableElement for HashMap<String, T> {
    fn present_value(&self) -> Value<'_> {
        T::map_value(self)
    }

    fn option_slot(option: &mut Option<Self>) -> Slot<'_> {
        T::option_map_slot(option)
    }
}

/// Map entries sorted by key
pub(crate) fn sorted_entries<'a, T, V>(
    entries: &'a HashMap<String, T>,
    view: impl Fn(&'a T) -> V,
) -> Vec<(&'a str, V)> {
    let mut sorted: Vec<_> = entries.iter().map(|(k, v)| (k.as_str(), view(v))).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    sorted
}

impl SeqElement for String {
    fn seq_value(items: &[Self]) -> Value<'_> {
        Value::List(Elements::Strings(
            items.iter().map(|item| Some(item.as_str())).collect(),
        ))
    }

    fn seq_slot(items: &mut Vec<Self>) -> Slot<'_> {
        Slot::Dto(DtoSlot::Strings(items))
    }

    fn option_seq_slot(items: &mut Option<Vec<Self>>) -> Slot<'_> {
        Slot::Dto(DtoSlot::Strings(items))
    }
}

impl SeqElement for Option<String> {
    fn seq_value(items: &[Self]) -> Value<'_> {
        Value::List(Elements::Strings(
            items.iter().map(|item| item.as_deref()).collect(),
        ))
    }

    fn seq_slot(items: &mut Vec<Self>) -> Slot<'_> {
        Slot::Dto(DtoSlot::Strings(items))
    }

    fn option_seq_slot(items: &mut Option<Vec<Self>>) -> Slot<'_> {
        Slot::Dto(DtoSlot::Strings(items))
    }
}

impl MapElement for String {
    fn map_value(entries: &HashMap<String, Self>) -> Value<'_> {
        Value::Map(Entries::Strings(sorted_entries(entries, |v| Some(v.as_str()))))
    }

    fn map_slot(entries: &mut HashMap<String, Self>) -> Slot<'_> {
        Slot::Dto(DtoSlot::StringMap(entries))
    }

    fn option_map_slot(entries: &mut Option<HashMap<String, Self>>) -> Slot<'_> {
        Slot::Dto(DtoSlot::StringMap(entries))
    }
}

impl MapElement for Option<String> {
    fn map_value(entries: &HashMap<String, Self>) -> Value<'_> {
        Value::Map(Entries::Strings(sorted_entries(entries, |v| v.as_deref())))
    }

    fn map_slot(entries: &mut HashMap<String, Self>) -> Slot<'_> {
        Slot::Dto(DtoSlot::StringMap(entries))
    }

    fn option_map_slot(entries: &mut Option<HashMap<String, Self>>) -> Slot<'_> {
        Slot::Dto(DtoSlot::StringMap(entries))
    }
}

fn non_null<T>(value: Option<T>, target: &str) -> Result<T> {
    value.ok_or_else(|| FlexError::NullElement(target.to_string()))
}

impl StringsSlot for Vec<String> {
    fn set(&mut self, items: Vec<Option<String>>) -> Result<()> {
        *self = items
            .into_iter()
            .map(|item| non_null(item, "Vec<String>"))
            .collect::<Result<_>>()?;
        Ok(())
    }
}

impl StringsSlot for Vec<Option<String>> {
    fn set(&mut self, items: Vec<Option<String>>) -> Result<()> {
        *self = items;
        Ok(())
    }
}

impl StringsSlot for Option<Vec<String>> {
    fn set(&mut self, items: Vec<Option<String>>) -> Result<()> {
        let items = items
            .into_iter()
            .map(|item| non_null(item, "Option<Vec<String>>"))
            .collect::<Result<_>>()?;
        *self = Some(items);
        Ok(())
    }
}

impl StringsSlot for Option<Vec<Option<String>>> {
    fn set(&mut self, items: Vec<Option<String>>) -> Result<()> {
        *self = Some(items);
        Ok(())
    }
}

impl StringMapSlot for HashMap<String, String> {
    fn set(&mut self, entries: Vec<(String, Option<String>)>) -> Result<()> {
        *self = entries
            .into_iter()
            .map(|(k, v)| Ok((k, non_null(v, "HashMap<String, String>")?)))
            .collect::<Result<_>>()?;
        Ok(())
    }
}

impl StringMapSlot for HashMap<String, Option<String>> {
    fn set(&mut self, entries: Vec<(String, Option<String>)>) -> Result<()> {
        *self = entries.into_iter().collect();
        Ok(())
    }
}

impl StringMapSlot for Option<HashMap<String, String>> {
    fn set(&mut self, entries: Vec<(String, Option<String>)>) -> Result<()> {
        let entries = entries
            .into_iter()
            .map(|(k, v)| Ok((k, non_null(v, "Option<HashMap<String, String>>")?)))
            .collect::<Result<_>>()?;
        *self = Some(entries);
        Ok(())
    }
}

impl StringMapSlot for Option<HashMap<String, Option<String>>> {
    fn set(&mut self, entries: Vec<(String, Option<String>)>) -> Result<()> {
        *self = Some(entries.into_iter().collect());
        Ok(())
    }
}

impl<E: StringEnum> EnumSlot for Option<E> {
    fn set(&mut self, value: &str) {
        *self = Some(E::from_string_representation(value));
    }
}

impl<T: Struct + Default> StructSlot for Option<T> {
    fn fill(&mut self, fill: &mut dyn FnMut(&mut dyn Struct) -> Result<()>) -> Result<()> {
        let mut fresh = T::default();
        fill(&mut fresh)?;
        *self = Some(fresh);
        Ok(())
    }
}

fn fill_seq<T: Struct + Default>(
    len: usize,
    fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
) -> Result<Vec<T>> {
    let mut items = Vec::with_capacity(len);
    for i in 0..len {
        let mut fresh = T::default();
        fill(i, &mut fresh)?;
        items.push(fresh);
    }
    Ok(items)
}

fn fill_map<T: Struct + Default>(
    len: usize,
    fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<String>,
) -> Result<HashMap<String, T>> {
    let mut entries = HashMap::with_capacity(len);
    for i in 0..len {
        let mut fresh = T::default();
        let key = fill(i, &mut fresh)?;
        entries.insert(key, fresh);
    }
    Ok(entries)
}

impl<T: Struct + Default> StructSeqSlot for Vec<T> {
    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()> {
        *self = fill_seq(len, fill)?;
        Ok(())
    }
}

impl<T: Struct + Default> StructSeqSlot for Option<Vec<T>> {
    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()> {
        *self = Some(fill_seq(len, fill)?);
        Ok(())
    }
}

impl<T: Struct + Default> StructMapSlot for HashMap<String, T> {
    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<String>,
    ) -> Result<()> {
        *self = fill_map(len, fill)?;
        Ok(())
    }
}

impl<T: Struct + Default> StructMapSlot for Option<HashMap<String, T>> {
    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<String>,
    ) -> Result<()> {
        *self = Some(fill_map(len, fill)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_values() {
        assert!(matches!(true.value(), Value::Bool(true)));
        assert!(matches!(7_i32.value(), Value::Int(7)));
        assert!(matches!(Some(7.5_f32).value(), Value::Float(f) if f == 7.5));
        assert!(matches!(None::<i64>.value(), Value::Null));
        assert_eq!(String::from("x").model(), Model::Dto);
    }

    #[test]
    fn test_f32_widens_exactly() {
        let Value::Float(widened) = 7.7_f32.value() else {
            panic!("expected float");
        };
        assert_eq!(widened, f64::from(7.7_f32));
        assert_ne!(widened, 7.7_f64);
    }

    #[test]
    fn test_str_is_not_settable() {
        let mut value = "x";
        assert!(value.slot().is_none());
    }

    #[test]
    fn test_option_string_slot() {
        let mut target: Option<String> = None;
        match target.slot() {
            Some(Slot::Dto(DtoSlot::OptionString(slot))) => *slot = Some("a".to_string()),
            _ => panic!("unexpected slot"),
        }
        assert_eq!(target.as_deref(), Some("a"));
    }

    #[test]
    fn test_strings_slot_rejects_null_elements() {
        let mut target: Vec<String> = Vec::new();
        let err = StringsSlot::set(&mut target, vec![Some("a".into()), None]).unwrap_err();
        assert!(matches!(err, FlexError::NullElement(_)));

        let mut nullable: Vec<Option<String>> = Vec::new();
        StringsSlot::set(&mut nullable, vec![Some("a".into()), None]).unwrap();
        assert_eq!(nullable, vec![Some("a".to_string()), None]);
    }

    #[test]
    fn test_map_value_is_sorted() {
        let map: HashMap<String, String> = [("b", "2"), ("a", "1"), ("c", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let Value::Map(Entries::Strings(entries)) = map.value() else {
            panic!("expected string map");
        };
        assert_eq!(entries, vec![("a", Some("1")), ("b", Some("2")), ("c", Some("3"))]);
    }

    #[test]
    fn test_option_vec_value() {
        let none: Option<Vec<String>> = None;
        assert!(matches!(none.value(), Value::Null));

        let empty: Option<Vec<String>> = Some(Vec::new());
        assert!(matches!(empty.value(), Value::List(Elements::Strings(items)) if items.is_empty()));
    }
}
