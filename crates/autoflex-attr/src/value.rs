//! The three-state attribute value

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A typed attribute value that is either known, null or unknown.
///
/// `Null` is the default state. `Unknown` models a value that will only be
/// decided later (for example a computed attribute during planning) and is
/// never copied outward by a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Attr<T> {
    Null,
    Unknown,
    Known(T),
}

impl<T> Default for Attr<T> {
    fn default() -> Self {
        Attr::Null
    }
}

impl<T> Attr<T> {
    pub fn known(value: T) -> Self {
        Attr::Known(value)
    }

    pub const fn null() -> Self {
        Attr::Null
    }

    pub const fn unknown() -> Self {
        Attr::Unknown
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Attr::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Attr::Known(_))
    }

    pub fn set(&mut self, value: T) {
        *self = Attr::Known(value);
    }

    pub fn set_null(&mut self) {
        *self = Attr::Null;
    }

    pub fn set_unknown(&mut self) {
        *self = Attr::Unknown;
    }

    /// The known value, if any
    pub fn get(&self) -> Option<&T> {
        match self {
            Attr::Known(value) => Some(value),
            Attr::Null | Attr::Unknown => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Attr::Known(value) => Some(value),
            Attr::Null | Attr::Unknown => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Attr::Known(value) => Some(value),
            Attr::Null | Attr::Unknown => None,
        }
    }

    pub fn as_ref(&self) -> Attr<&T> {
        match self {
            Attr::Null => Attr::Null,
            Attr::Unknown => Attr::Unknown,
            Attr::Known(value) => Attr::Known(value),
        }
    }

    /// Maps the known value, keeping null and unknown as they are
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Attr<U> {
        match self {
            Attr::Null => Attr::Null,
            Attr::Unknown => Attr::Unknown,
            Attr::Known(value) => Attr::Known(f(value)),
        }
    }
}

impl Attr<String> {
    /// The known string, or `""` when null or unknown
    pub fn value_str(&self) -> &str {
        self.get().map(String::as_str).unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Attr<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Attr::Known(value),
            None => Attr::Null,
        }
    }
}

impl From<&str> for Attr<String> {
    fn from(value: &str) -> Self {
        Attr::Known(value.to_string())
    }
}

impl<T: Serialize> Serialize for Attr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Attr::Known(value) => serializer.serialize_some(value),
            Attr::Null | Attr::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Attr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Attr::from)
    }
}
