//! String-backed scalar kinds: RFC 3339 timestamps, ARNs and domain enums

use crate::error::{AttrError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A value that stores an underlying string but type-checks as a distinct
/// domain type.
pub trait HasStringRepresentation {
    fn string_representation(&self) -> Cow<'_, str>;
}

/// A string-backed enum that can be rebuilt from its representation.
///
/// Unrecognized strings must still produce a value (typically an
/// `Unknown(String)` variant), the way generated API enums do.
pub trait StringEnum: HasStringRepresentation + Sized {
    fn from_string_representation(value: &str) -> Self;
}

impl HasStringRepresentation for String {
    fn string_representation(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl HasStringRepresentation for str {
    fn string_representation(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// RFC 3339 timestamp text.
///
/// The text is validated only when it is turned into a structured time with
/// [`Rfc3339::to_time`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rfc3339(String);

impl Rfc3339 {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Formats a time in UTC with a `Z` suffix, keeping sub-second digits
    /// only when they are non-zero.
    pub fn from_time(time: DateTime<Utc>) -> Self {
        Self(time.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the text into a UTC time
    pub fn to_time(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|source| AttrError::InvalidTimestamp {
                value: self.0.clone(),
                source,
            })
    }
}

impl From<DateTime<Utc>> for Rfc3339 {
    fn from(time: DateTime<Utc>) -> Self {
        Self::from_time(time)
    }
}

impl fmt::Display for Rfc3339 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl HasStringRepresentation for Rfc3339 {
    fn string_representation(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

/// Amazon Resource Name, `arn:partition:service:region:account-id:resource`.
///
/// Unlike [`Rfc3339`] the text is validated when the value is built.
/// Region and account ID may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Arn(String);

impl Arn {
    const SECTIONS: usize = 6;

    pub fn parse(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let sections: Vec<&str> = text.splitn(Self::SECTIONS, ':').collect();
        let reason = match sections.as_slice() {
            [prefix, ..] if *prefix != "arn" => Some("invalid prefix"),
            sections if sections.len() < Self::SECTIONS => Some("not enough sections"),
            [_, partition, ..] if partition.is_empty() => Some("invalid partition"),
            [_, _, service, ..] if service.is_empty() => Some("invalid service"),
            [.., resource] if resource.is_empty() => Some("invalid resource"),
            _ => None,
        };
        match reason {
            Some(reason) => Err(AttrError::InvalidArn { value: text, reason }),
            None => Ok(Self(text)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn section(&self, index: usize) -> &str {
        self.0
            .splitn(Self::SECTIONS, ':')
            .nth(index)
            .unwrap_or_default()
    }

    pub fn partition(&self) -> &str {
        self.section(1)
    }

    pub fn service(&self) -> &str {
        self.section(2)
    }

    pub fn region(&self) -> &str {
        self.section(3)
    }

    pub fn account_id(&self) -> &str {
        self.section(4)
    }

    /// Everything after the account ID, including any `:` or `/` separators
    pub fn resource(&self) -> &str {
        self.section(5)
    }
}

impl FromStr for Arn {
    type Err = AttrError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl HasStringRepresentation for Arn {
    fn string_representation(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

impl<'de> Deserialize<'de> for Arn {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(text).map_err(serde::de::Error::custom)
    }
}

/// Attribute payload for a string-backed domain enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enum<E>(pub E);

impl<E> Enum<E> {
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: StringEnum> Enum<E> {
    pub fn from_string_representation(value: &str) -> Self {
        Self(E::from_string_representation(value))
    }
}

impl<E: HasStringRepresentation> HasStringRepresentation for Enum<E> {
    fn string_representation(&self) -> Cow<'_, str> {
        self.0.string_representation()
    }
}

impl<E: HasStringRepresentation> Serialize for Enum<E> {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.string_representation())
    }
}

impl<'de, E: StringEnum> Deserialize<'de> for Enum<E> {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_string_representation(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    enum Mode {
        Fast,
        Slow,
        Other(String),
    }

    impl HasStringRepresentation for Mode {
        fn string_representation(&self) -> Cow<'_, str> {
            match self {
                Mode::Fast => Cow::Borrowed("FAST"),
                Mode::Slow => Cow::Borrowed("SLOW"),
                Mode::Other(value) => Cow::Borrowed(value),
            }
        }
    }

    impl StringEnum for Mode {
        fn from_string_representation(value: &str) -> Self {
            match value {
                "FAST" => Mode::Fast,
                "SLOW" => Mode::Slow,
                other => Mode::Other(other.to_string()),
            }
        }
    }

    #[test]
    fn test_rfc3339_whole_seconds() {
        let time = Utc.with_ymd_and_hms(2013, 9, 25, 9, 34, 1).unwrap();
        assert_eq!(Rfc3339::from_time(time).as_str(), "2013-09-25T09:34:01Z");
    }

    #[test]
    fn test_rfc3339_parse() {
        let parsed = Rfc3339::new("2013-09-25T09:34:01Z").to_time().unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2013, 9, 25, 9, 34, 1).unwrap());

        let offset = Rfc3339::new("2013-09-25T11:34:01+02:00").to_time().unwrap();
        assert_eq!(offset, parsed);
    }

    #[test]
    fn test_arn_sections() {
        let arn = Arn::parse("arn:aws:iam::123456789012:role/service-role/test").unwrap();
        assert_eq!(arn.partition(), "aws");
        assert_eq!(arn.service(), "iam");
        assert_eq!(arn.region(), "");
        assert_eq!(arn.account_id(), "123456789012");
        assert_eq!(arn.resource(), "role/service-role/test");

        let arn: Arn = "arn:aws:lex:us-west-2:123456789012:bot:a:b".parse().unwrap();
        assert_eq!(arn.resource(), "bot:a:b");
        assert_eq!(arn.to_string(), "arn:aws:lex:us-west-2:123456789012:bot:a:b");
    }

    #[test]
    fn test_arn_invalid() {
        for (text, reason) in [
            ("", "invalid prefix"),
            ("urn:aws:iam::123456789012:root", "invalid prefix"),
            ("arn:aws:iam", "not enough sections"),
            ("arn::iam::123456789012:root", "invalid partition"),
            ("arn:aws:::123456789012:root", "invalid service"),
            ("arn:aws:iam::123456789012:", "invalid resource"),
        ] {
            let err = Arn::parse(text).unwrap_err();
            assert!(
                matches!(err, AttrError::InvalidArn { reason: r, .. } if r == reason),
                "{text}: {err}"
            );
        }
    }

    #[test]
    fn test_arn_serde_validates() {
        let arn: Arn = serde_json::from_str("\"arn:aws:s3:::bucket\"").unwrap();
        assert_eq!(arn.service(), "s3");
        assert_eq!(serde_json::to_string(&arn).unwrap(), "\"arn:aws:s3:::bucket\"");
        assert!(serde_json::from_str::<Arn>("\"bucket\"").is_err());
    }

    #[test]
    fn test_rfc3339_invalid() {
        let err = Rfc3339::new("yesterday").to_time().unwrap_err();
        assert!(matches!(
            err,
            AttrError::InvalidTimestamp { ref value, .. } if value == "yesterday"
        ));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_enum_representation() {
        let value = Enum::<Mode>::from_string_representation("SLOW");
        assert_eq!(value, Enum(Mode::Slow));
        assert_eq!(value.string_representation(), "SLOW");

        let unknown = Enum::<Mode>::from_string_representation("WARP");
        assert_eq!(unknown.into_inner(), Mode::Other("WARP".to_string()));
        assert_eq!(Enum(Mode::Fast).string_representation(), "FAST");
    }

    #[test]
    fn test_enum_serde() {
        let json = serde_json::to_string(&Enum(Mode::Fast)).unwrap();
        assert_eq!(json, "\"FAST\"");
        let parsed: Enum<Mode> = serde_json::from_str("\"SLOW\"").unwrap();
        assert_eq!(parsed, Enum(Mode::Slow));
    }
}
