//! AutoFlex attribute model
//!
//! Business-object values as a declarative resource framework sees them:
//! every attribute is [`Attr`]-wrapped and may be known, null or unknown.
//!
//! | Alias | Payload |
//! |---|---|
//! | [`BoolValue`] | `bool` |
//! | [`Int64Value`] | `i64` |
//! | [`Float64Value`] | `f64` |
//! | [`StringValue`] | `String` |
//! | [`Rfc3339Value`] | [`Rfc3339`] timestamp text |
//! | [`ArnValue`] | validated [`Arn`] |
//! | [`StringEnumValue`] | [`Enum`] over a [`StringEnum`] |
//! | [`ListValue`] / [`SetValue`] / [`MapValue`] | collections of [`StringValue`] |
//! | [`ObjectValue`] | one nested object |
//! | [`ListNestedObjectValue`] / [`SetNestedObjectValue`] | nested object collections |

pub mod collection;
pub mod error;
pub mod scalar;
pub mod value;

pub use collection::{List, ListNested, Map, Object, Set, SetNested};
pub use error::{AttrError, Result};
pub use scalar::{Arn, Enum, HasStringRepresentation, Rfc3339, StringEnum};
pub use value::Attr;

pub type BoolValue = Attr<bool>;
pub type Int64Value = Attr<i64>;
pub type Float64Value = Attr<f64>;
pub type StringValue = Attr<String>;
pub type Rfc3339Value = Attr<Rfc3339>;
pub type ArnValue = Attr<Arn>;
pub type StringEnumValue<E> = Attr<Enum<E>>;
pub type ListValue = Attr<List<StringValue>>;
pub type SetValue = Attr<Set<StringValue>>;
pub type MapValue = Attr<Map<StringValue>>;
pub type ObjectValue<T> = Attr<Object<T>>;
pub type ListNestedObjectValue<T> = Attr<ListNested<T>>;
pub type SetNestedObjectValue<T> = Attr<SetNested<T>>;
