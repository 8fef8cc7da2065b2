//! Conversion error types

use autoflex_attr::AttrError;
use thiserror::Error;

/// Conversion errors
#[derive(Error, Debug)]
pub enum FlexError {
    #[error("Target ({0}) must be settable")]
    InvalidTarget(String),

    #[error("Does not implement an attribute value: {0}")]
    NotAnAttribute(String),

    #[error("Incompatible types: {from} cannot be converted to {to}")]
    IncompatibleShape { from: String, to: String },

    #[error("convert ({field}): {source}")]
    FieldConversion {
        field: String,
        #[source]
        source: Box<FlexError>,
    },

    /// Malformed RFC 3339 or ARN text
    #[error(transparent)]
    InvalidValue(#[from] AttrError),

    #[error("Unable to find map block key ({0})")]
    MissingMapKey(String),

    #[error("Null element cannot be stored in {0}")]
    NullElement(String),
}

impl FlexError {
    pub(crate) fn incompatible(from: impl Into<String>, to: impl Into<String>) -> Self {
        FlexError::IncompatibleShape {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Wraps a nested failure with the field it happened in
    pub fn in_field(field: impl Into<String>, source: FlexError) -> Self {
        FlexError::FieldConversion {
            field: field.into(),
            source: Box::new(source),
        }
    }

    /// Dotted path of the fields the error was raised in, outermost first.
    /// Empty when the error did not happen inside a field.
    pub fn field_path(&self) -> String {
        let mut path = Vec::new();
        let mut current = self;
        while let FlexError::FieldConversion { field, source } = current {
            path.push(field.as_str());
            current = source.as_ref();
        }
        path.join(".")
    }

    /// The innermost error, with field wrappers removed
    pub fn root_cause(&self) -> &FlexError {
        match self {
            FlexError::FieldConversion { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlexError>;
