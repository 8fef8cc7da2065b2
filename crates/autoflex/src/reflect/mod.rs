//! Reflection front-end
//!
//! Every convertible type describes itself through [`Reflect`]: a read-only
//! [`Value`] view for the source side and a writable [`Slot`] view for the
//! target side. Structs additionally implement [`Struct`] so the walker can
//! enumerate and address their fields by name. Converters never see concrete
//! types; they `match` on these two closed unions.
//!
//! Plain types (`bool`, `String`, `DateTime<Utc>`, ...) and the attribute
//! model are covered here. User structs and string enums opt in with
//! [`flex_struct!`](crate::flex_struct) and [`flex_enum!`](crate::flex_enum).

mod attr;
mod dto;
pub mod derive;

pub use attr::{AttrKind, EnumAttrSlot, NestedObjectSlot};
pub use dto::{EnumSlot, StringMapSlot, StringsSlot, StructMapSlot, StructSeqSlot, StructSlot};

use autoflex_attr::{
    ArnValue, BoolValue, Float64Value, Int64Value, ListValue, MapValue, Rfc3339Value, SetValue,
    StringValue,
};
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::collections::HashMap;

/// Which data model a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    /// Null/unknown-aware business object attribute
    Attr,
    /// Plain data-transfer value
    Dto,
}

/// A value the engine can read from and write into.
pub trait Reflect {
    fn model(&self) -> Model;

    /// Read-only view of the current value
    fn value(&self) -> Value<'_>;

    /// Writable view, or `None` when the value cannot be set
    fn slot(&mut self) -> Option<Slot<'_>>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn as_struct(&self) -> Option<&dyn Struct> {
        None
    }

    fn as_struct_mut(&mut self) -> Option<&mut dyn Struct> {
        None
    }
}

/// A struct whose fields can be enumerated and addressed by name.
pub trait Struct {
    fn struct_name(&self) -> &'static str;

    /// Field names in declaration order
    fn field_names(&self) -> &'static [&'static str];

    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    fn has_field(&self, name: &str) -> bool {
        self.field_names().iter().any(|field| *field == name)
    }
}

/// How a string value should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKind {
    Plain,
    /// String representation of a domain enum
    Enum,
    /// RFC 3339 timestamp text
    Rfc3339,
}

/// A string value together with its interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<'a> {
    pub value: Cow<'a, str>,
    pub kind: StringKind,
}

impl<'a> Text<'a> {
    pub fn plain(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            value: value.into(),
            kind: StringKind::Plain,
        }
    }

    pub fn enumeration(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            value: value.into(),
            kind: StringKind::Enum,
        }
    }

    pub fn rfc3339(value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            value: value.into(),
            kind: StringKind::Rfc3339,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Elements of a list or set
pub enum Elements<'a> {
    /// `None` marks a null element
    Strings(Vec<Option<&'a str>>),
    Objects(Vec<&'a dyn Struct>),
}

impl Elements<'_> {
    pub fn len(&self) -> usize {
        match self {
            Elements::Strings(items) => items.len(),
            Elements::Objects(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entries of a string-keyed map, sorted by key
pub enum Entries<'a> {
    Strings(Vec<(&'a str, Option<&'a str>)>),
    Objects(Vec<(&'a str, &'a dyn Struct)>),
}

/// Read-only view of a source value
pub enum Value<'a> {
    Null,
    Unknown,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Text<'a>),
    Time(DateTime<Utc>),
    Object(&'a dyn Struct),
    List(Elements<'a>),
    Set(Elements<'a>),
    Map(Entries<'a>),
}

impl Value<'_> {
    /// Short shape name used in logs and errors
    pub fn describe(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Unknown => "unknown",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(text) => match text.kind {
                StringKind::Plain => "string",
                StringKind::Enum => "enum",
                StringKind::Rfc3339 => "rfc3339",
            },
            Value::Time(_) => "time",
            Value::Object(_) => "object",
            Value::List(Elements::Strings(_)) => "list[string]",
            Value::List(Elements::Objects(_)) => "list[object]",
            Value::Set(Elements::Strings(_)) => "set[string]",
            Value::Set(Elements::Objects(_)) => "set[object]",
            Value::Map(Entries::Strings(_)) => "map[string]",
            Value::Map(Entries::Objects(_)) => "map[object]",
        }
    }
}

/// Writable view of a plain data-transfer target
pub enum DtoSlot<'a> {
    Bool(&'a mut bool),
    OptionBool(&'a mut Option<bool>),
    Int32(&'a mut i32),
    OptionInt32(&'a mut Option<i32>),
    Int64(&'a mut i64),
    OptionInt64(&'a mut Option<i64>),
    Float32(&'a mut f32),
    OptionFloat32(&'a mut Option<f32>),
    Float64(&'a mut f64),
    OptionFloat64(&'a mut Option<f64>),
    String(&'a mut String),
    OptionString(&'a mut Option<String>),
    Time(&'a mut DateTime<Utc>),
    OptionTime(&'a mut Option<DateTime<Utc>>),
    Enum(&'a mut dyn EnumSlot),
    Strings(&'a mut dyn StringsSlot),
    StringMap(&'a mut dyn StringMapSlot),
    /// A single nested struct: `T`, `Option<T>` or `Option<Box<T>>`
    Struct(&'a mut dyn StructSlot),
    StructSeq(&'a mut dyn StructSeqSlot),
    /// Structs keyed by their map block key
    StructMap(&'a mut dyn StructMapSlot),
}

impl DtoSlot<'_> {
    pub fn describe(&self) -> String {
        let name = match self {
            DtoSlot::Bool(_) => "bool",
            DtoSlot::OptionBool(_) => "Option<bool>",
            DtoSlot::Int32(_) => "i32",
            DtoSlot::OptionInt32(_) => "Option<i32>",
            DtoSlot::Int64(_) => "i64",
            DtoSlot::OptionInt64(_) => "Option<i64>",
            DtoSlot::Float32(_) => "f32",
            DtoSlot::OptionFloat32(_) => "Option<f32>",
            DtoSlot::Float64(_) => "f64",
            DtoSlot::OptionFloat64(_) => "Option<f64>",
            DtoSlot::String(_) => "String",
            DtoSlot::OptionString(_) => "Option<String>",
            DtoSlot::Time(_) => "DateTime<Utc>",
            DtoSlot::OptionTime(_) => "Option<DateTime<Utc>>",
            DtoSlot::Enum(slot) => slot.target_type(),
            DtoSlot::Strings(slot) => slot.target_type(),
            DtoSlot::StringMap(slot) => slot.target_type(),
            DtoSlot::Struct(slot) => slot.target_type(),
            DtoSlot::StructSeq(slot) => slot.target_type(),
            DtoSlot::StructMap(slot) => slot.target_type(),
        };
        short_type_name(name)
    }
}

/// Writable view of a business object attribute
pub enum AttrSlot<'a> {
    Bool(&'a mut BoolValue),
    Int64(&'a mut Int64Value),
    Float64(&'a mut Float64Value),
    String(&'a mut StringValue),
    Rfc3339(&'a mut Rfc3339Value),
    Arn(&'a mut ArnValue),
    Enum(&'a mut dyn EnumAttrSlot),
    List(&'a mut ListValue),
    Set(&'a mut SetValue),
    Map(&'a mut MapValue),
    /// `ObjectValue<T>`
    Object(&'a mut dyn NestedObjectSlot),
    /// `ListNestedObjectValue<T>` or `SetNestedObjectValue<T>`
    NestedObjects(&'a mut dyn NestedObjectSlot),
}

impl AttrSlot<'_> {
    /// Stores an explicit null
    pub fn set_null(self) {
        match self {
            AttrSlot::Bool(attr) => attr.set_null(),
            AttrSlot::Int64(attr) => attr.set_null(),
            AttrSlot::Float64(attr) => attr.set_null(),
            AttrSlot::String(attr) => attr.set_null(),
            AttrSlot::Rfc3339(attr) => attr.set_null(),
            AttrSlot::Arn(attr) => attr.set_null(),
            AttrSlot::List(attr) => attr.set_null(),
            AttrSlot::Set(attr) => attr.set_null(),
            AttrSlot::Map(attr) => attr.set_null(),
            AttrSlot::Enum(slot) => slot.set_null(),
            AttrSlot::Object(slot) | AttrSlot::NestedObjects(slot) => slot.set_null(),
        }
    }

    pub fn describe(&self) -> String {
        let name = match self {
            AttrSlot::Bool(_) => "BoolValue",
            AttrSlot::Int64(_) => "Int64Value",
            AttrSlot::Float64(_) => "Float64Value",
            AttrSlot::String(_) => "StringValue",
            AttrSlot::Rfc3339(_) => "Rfc3339Value",
            AttrSlot::Arn(_) => "ArnValue",
            AttrSlot::List(_) => "ListValue",
            AttrSlot::Set(_) => "SetValue",
            AttrSlot::Map(_) => "MapValue",
            AttrSlot::Enum(slot) => slot.target_type(),
            AttrSlot::Object(slot) | AttrSlot::NestedObjects(slot) => slot.target_type(),
        };
        short_type_name(name)
    }
}

/// Writable view of a target value
pub enum Slot<'a> {
    Dto(DtoSlot<'a>),
    Attr(AttrSlot<'a>),
}

impl Slot<'_> {
    pub fn model(&self) -> Model {
        match self {
            Slot::Dto(_) => Model::Dto,
            Slot::Attr(_) => Model::Attr,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Slot::Dto(slot) => slot.describe(),
            Slot::Attr(slot) => slot.describe(),
        }
    }
}

/// Element types that may be wrapped in `Option`.
pub trait NullableElement: Sized {
    /// The view of `Some(self)`
    fn present_value(&self) -> Value<'_>;

    fn option_slot(option: &mut Option<Self>) -> Slot<'_>;
}

/// Element types that may be collected in a `Vec`.
pub trait SeqElement: Sized {
    fn seq_value(items: &[Self]) -> Value<'_>;

    fn seq_slot(items: &mut Vec<Self>) -> Slot<'_>;

    fn option_seq_slot(items: &mut Option<Vec<Self>>) -> Slot<'_>;
}

/// Element types that may be the values of a `HashMap<String, _>`.
pub trait MapElement: Sized {
    fn map_value(entries: &HashMap<String, Self>) -> Value<'_>;

    fn map_slot(entries: &mut HashMap<String, Self>) -> Slot<'_>;

    fn option_map_slot(entries: &mut Option<HashMap<String, Self>>) -> Slot<'_>;
}

/// Strips module paths from a type name:
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn short_type_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut segment_start = 0;
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }
    out
}
