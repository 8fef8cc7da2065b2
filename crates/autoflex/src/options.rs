//! Per-call conversion options

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Business object to DTO
    Expand,
    /// DTO to business object
    Flatten,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Expand => write!(f, "Expand"),
            Direction::Flatten => write!(f, "Flatten"),
        }
    }
}

/// Options shared by every field of one conversion call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Resource-name prefix that API field names embed, e.g. `Intent` for
    /// `IntentName` against a business field `Name`
    pub resource_prefix: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.resource_prefix = Some(prefix.into());
        self
    }

    /// The configured prefix with spaces removed, or `None` when it is empty
    pub fn resource_prefix(&self) -> Option<String> {
        let prefix: String = self
            .resource_prefix
            .as_deref()?
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        (!prefix.is_empty()).then_some(prefix)
    }
}
