//! Attribute model error types

use thiserror::Error;

/// Attribute model errors
#[derive(Error, Debug)]
pub enum AttrError {
    #[error("Invalid RFC 3339 timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid ARN {value:?}: {reason}")]
    InvalidArn { value: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, AttrError>;
