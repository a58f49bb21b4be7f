//! Display formatting
//!
//! - `format_number`: fixed decimals with comma grouping and a prefix
//! - `pad` / `pad_right`: fill a string out to a character width

pub mod number;
pub mod pad;

pub use number::{format_number, format_number_value, NumberFormat};
pub use pad::{pad, pad_right};
