//! # shapekit
//!
//! Small, pure helpers for shaping JSON objects, converting identifier case
//! and formatting numbers for display.
//!
//! ## Usage
//!
//! ```
//! use shapekit::{dasherize, format_number, NumberFormat};
//!
//! assert_eq!(dasherize("encodeURIComponent"), "encode-uri-component");
//! assert_eq!(
//!     format_number(Some(1234.5), &NumberFormat::new().with_decimals(2)),
//!     "1,234.50"
//! );
//! ```
//!
//! ## Modules
//!
//! - `object` - Prune, filter, map, rename and clone JSON objects
//! - `text` - Identifier case conversion, pluralization and trimming
//! - `format` - Number grouping and string padding
//! - `kind` - Runtime type tags for JSON values
//! - `error` - Error type for the fallible `Value`-level entry points
//! - `app` - Configuration and logging for the command line front end
//! - `cli` - Command definitions and handlers for the `shapekit` binary
pub mod app;
pub mod cli;
pub mod error;
pub mod format;
pub mod kind;
pub mod object;
pub mod text;

pub use error::{ShapeError, ShapeResult};
pub use format::{format_number, format_number_value, pad, pad_right, NumberFormat};
pub use kind::{type_of, ValueKind};
pub use object::{
    deep_clone, filter_object, map_key, map_key_value, map_object, purify, purify_value,
};
pub use text::{
    camelize, constantize, convert, dasherize, pascalize, pluralize, trim, Case, CaseExt,
};
