//! Business object attributes

use super::{AttrSlot, Elements, Entries, Model, Reflect, Slot, Struct, Text, Value};
use crate::error::Result;
use autoflex_attr::{
    Arn, Attr, Enum, HasStringRepresentation, List, ListNested, Map, Object, Rfc3339, Set,
    SetNested, StringEnum, StringValue,
};

/// Payload types of [`Attr`] the engine understands.
pub trait AttrKind: Sized {
    /// The view of `Attr::Known(self)`
    fn known_value(&self) -> Value<'_>;

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_>;
}

impl<T: AttrKind> Reflect for Attr<T> {
    fn model(&self) -> Model {
        Model::Attr
    }

    fn value(&self) -> Value<'_> {
        match self {
            Attr::Null => Value::Null,
            Attr::Unknown => Value::Unknown,
            Attr::Known(value) => value.known_value(),
        }
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        Some(Slot::Attr(T::attr_slot(self)))
    }
}

/// Target for a string enum attribute
pub trait EnumAttrSlot {
    fn set(&mut self, value: &str);

    fn set_null(&mut self);

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Target for a nested object attribute or a collection of them.
///
/// `fill` is called once per element with a fresh default struct; the
/// attribute becomes known only when every element was filled.
pub trait NestedObjectSlot {
    fn set_null(&mut self);

    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()>;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl AttrKind for bool {
    fn known_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Bool(attr)
    }
}

impl AttrKind for i64 {
    fn known_value(&self) -> Value<'_> {
        Value::Int(*self)
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Int64(attr)
    }
}

impl AttrKind for f64 {
    fn known_value(&self) -> Value<'_> {
        Value::Float(*self)
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Float64(attr)
    }
}

impl AttrKind for String {
    fn known_value(&self) -> Value<'_> {
        Value::String(Text::plain(self.as_str()))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::String(attr)
    }
}

impl AttrKind for Rfc3339 {
    fn known_value(&self) -> Value<'_> {
        Value::String(Text::rfc3339(self.as_str()))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Rfc3339(attr)
    }
}

impl AttrKind for Arn {
    fn known_value(&self) -> Value<'_> {
        Value::String(Text::plain(self.as_str()))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Arn(attr)
    }
}

impl<E: StringEnum> AttrKind for Enum<E> {
    fn known_value(&self) -> Value<'_> {
        Value::String(Text::enumeration(self.string_representation()))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Enum(attr)
    }
}

impl<E: StringEnum> EnumAttrSlot for Attr<Enum<E>> {
    fn set(&mut self, value: &str) {
        *self = Attr::Known(Enum::from_string_representation(value));
    }

    fn set_null(&mut self) {
        *self = Attr::Null;
    }
}

fn string_elements(items: &[StringValue]) -> Elements<'_> {
    Elements::Strings(
        items
            .iter()
            .map(|item| item.get().map(String::as_str))
            .collect(),
    )
}

impl AttrKind for List<StringValue> {
    fn known_value(&self) -> Value<'_> {
        Value::List(string_elements(&self.0))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::List(attr)
    }
}

impl AttrKind for Set<StringValue> {
    fn known_value(&self) -> Value<'_> {
        Value::Set(string_elements(&self.0))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Set(attr)
    }
}

impl AttrKind for Map<StringValue> {
    fn known_value(&self) -> Value<'_> {
        Value::Map(Entries::Strings(
            self.0
                .iter()
                .map(|(k, v)| (k.as_str(), v.get().map(String::as_str)))
                .collect(),
        ))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Map(attr)
    }
}

impl<T: Struct + Default> AttrKind for Object<T> {
    fn known_value(&self) -> Value<'_> {
        Value::Object(self.get())
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::Object(attr)
    }
}

impl<T: Struct + Default> AttrKind for ListNested<T> {
    fn known_value(&self) -> Value<'_> {
        Value::List(Elements::Objects(
            self.0.iter().map(|item| item as &dyn Struct).collect(),
        ))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::NestedObjects(attr)
    }
}

impl<T: Struct + Default> AttrKind for SetNested<T> {
    fn known_value(&self) -> Value<'_> {
        Value::Set(Elements::Objects(
            self.0.iter().map(|item| item as &dyn Struct).collect(),
        ))
    }

    fn attr_slot(attr: &mut Attr<Self>) -> AttrSlot<'_> {
        AttrSlot::NestedObjects(attr)
    }
}

fn fill_objects<T: Struct + Default>(
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

impl<T: Struct + Default> NestedObjectSlot for Attr<Object<T>> {
    fn set_null(&mut self) {
        *self = Attr::Null;
    }

    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()> {
        let Some(item) = fill_objects::<T>(len.min(1), fill)?.pop() else {
            return Ok(());
        };
        *self = Attr::Known(Object::new(item));
        Ok(())
    }
}

impl<T: Struct + Default> NestedObjectSlot for Attr<ListNested<T>> {
    fn set_null(&mut self) {
        *self = Attr::Null;
    }

    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()> {
        *self = Attr::Known(ListNested(fill_objects(len, fill)?));
        Ok(())
    }
}

impl<T: Struct + Default> NestedObjectSlot for Attr<SetNested<T>> {
    fn set_null(&mut self) {
        *self = Attr::Null;
    }

    fn fill(
        &mut self,
        len: usize,
        fill: &mut dyn FnMut(usize, &mut dyn Struct) -> Result<()>,
    ) -> Result<()> {
        *self = Attr::Known(SetNested(fill_objects(len, fill)?));
        Ok(())
    }
}
