//! String casing and inflection
//!
//! Free functions live in [`case`] and [`inflect`]; [`CaseExt`] exposes the
//! same conversions as methods on `str`, and [`Case`] names a conversion so
//! it can be chosen at runtime.

pub mod case;
pub mod inflect;

pub use case::{camelize, constantize, dasherize, pascalize};
pub use inflect::{pluralize, trim};

use serde::{Deserialize, Serialize};

/// A named string conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// `foo-bar` -> `FooBar`
    Pascal,
    /// `foo-bar` -> `fooBar`
    Camel,
    /// `fooBar` -> `foo-bar`
    Dash,
    /// `foo-bar` -> `FOO_BAR`
    Constant,
    /// `category` -> `categories`
    Plural,
    /// Strip surrounding whitespace
    Trim,
}

/// Pure: Apply the conversion named by `case`
pub fn convert(case: Case, input: &str) -> String {
    match case {
        Case::Pascal => pascalize(input),
        Case::Camel => camelize(input),
        Case::Dash => dasherize(input),
        Case::Constant => constantize(input),
        Case::Plural => pluralize(input),
        Case::Trim => trim(input).to_string(),
    }
}

/// Case conversions as methods on string slices
///
/// ```
/// use shapekit::CaseExt;
///
/// assert_eq!("foo-bar".camelize(), "fooBar");
/// assert_eq!("fooBar".constantize(), "FOO_BAR");
/// ```
pub trait CaseExt {
    fn pascalize(&self) -> String;
    fn camelize(&self) -> String;
    fn dasherize(&self) -> String;
    fn constantize(&self) -> String;
    fn pluralize(&self) -> String;
    fn to_case(&self, case: Case) -> String;
}

impl CaseExt for str {
    fn pascalize(&self) -> String {
        pascalize(self)
    }

    fn camelize(&self) -> String {
        camelize(self)
    }

    fn dasherize(&self) -> String {
        dasherize(self)
    }

    fn constantize(&self) -> String {
        constantize(self)
    }

    fn pluralize(&self) -> String {
        pluralize(self)
    }

    fn to_case(&self, case: Case) -> String {
        convert(case, self)
    }
}
