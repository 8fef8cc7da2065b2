//! AutoFlex
//!
//! Bidirectional, convention-driven mapping between a null/unknown-aware
//! business object model ([`attr`]) and plain data-transfer structs.
//!
//! - **Expand**: business object to DTO. Null and unknown attributes leave
//!   the target untouched.
//! - **Flatten**: DTO to business object. Absent values become explicit
//!   nulls.
//!
//! Fields are paired by name ([`resolve`]), not by position. Conversions
//! never panic; every outcome is reported as [`Diagnostics`].
//!
//! ```ignore
//! let diags = autoflex::flatten(&input, &mut model);
//! if diags.has_error() {
//!     return Err(diags);
//! }
//! ```

pub mod diag;
pub mod engine;
pub mod error;
pub mod expand;
pub mod flatten;
mod macros;
pub mod options;
pub mod pluralize;
pub mod reflect;
pub mod resolve;
pub mod walk;

pub use autoflex_attr as attr;

pub use diag::{Diagnostic, Diagnostics, Severity};
pub use engine::{
    Context, DIAGNOSTIC_SUMMARY, Flexer, convert, convert_with, expand, expand_with, flatten,
    flatten_with,
};
pub use error::{FlexError, Result};
pub use expand::Expander;
pub use flatten::Flattener;
pub use options::{Direction, Options};
pub use reflect::{
    AttrSlot, DtoSlot, Elements, Entries, Model, Reflect, Slot, StringKind, Struct, Text, Value,
};
pub use resolve::resolve_field;
pub use walk::walk_struct;
