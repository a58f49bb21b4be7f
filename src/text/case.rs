//! Identifier case conversion
//!
//! All conversions start from `pascalize`, which splits on runs of
//! whitespace, `-` and `_`:
//! - `pascalize`: `foo-bar` -> `FooBar`
//! - `camelize`: `foo-bar` -> `fooBar`
//! - `dasherize`: `encodeURIComponent` -> `encode-uri-component`
//! - `constantize`: `foo-bar` -> `FOO_BAR`

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Input made only of capitals and separators, e.g. `FOO_BAR`
static SHOUTING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z_-]+$").expect("Valid regex pattern"));

/// Runs of word separators
static SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("Valid regex pattern"));

/// Pure: Convert separated words to PascalCase
///
/// Input written entirely in capitals and separators is lowercased first so
/// `FOO_BAR` becomes `FooBar` rather than staying an acronym. Text without
/// separators is treated as a single word.
///
/// ```
/// use shapekit::pascalize;
///
/// assert_eq!(pascalize("foo-bar"), "FooBar");
/// assert_eq!(pascalize("FOO_BAR"), "FooBar");
/// assert_eq!(pascalize("hello  big_world"), "HelloBigWorld");
/// ```
pub fn pascalize(input: &str) -> String {
    let source: Cow<'_, str> = if SHOUTING_REGEX.is_match(input) {
        Cow::Owned(input.to_lowercase())
    } else {
        Cow::Borrowed(input)
    };

    SEPARATOR_REGEX
        .split(&source)
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Pure: Convert separated words to camelCase
pub fn camelize(input: &str) -> String {
    let pascal = pascalize(input);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pure: Convert to dash-case
///
/// Acronyms collapse into a single word: `encodeURIComponent` becomes
/// `encode-uri-component` rather than `encode-u-r-i-component`. The last
/// capital of an acronym that runs into a lowercase letter starts the next
/// word.
///
/// ```
/// use shapekit::dasherize;
///
/// assert_eq!(dasherize("encodeURIComponent"), "encode-uri-component");
/// assert_eq!(dasherize("XMLHttpRequest"), "xml-http-request");
/// assert_eq!(dasherize("foo_bar"), "foo-bar");
/// ```
pub fn dasherize(input: &str) -> String {
    let collapsed = collapse_acronyms(&pascalize(input));
    let mut result = String::with_capacity(collapsed.len() + 8);

    for ch in collapsed.chars() {
        if ch.is_ascii_uppercase() {
            result.push('-');
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result.trim_matches('-').to_string()
}

/// Pure: Convert to CONSTANT_CASE
pub fn constantize(input: &str) -> String {
    dasherize(input).replace('-', "_").to_uppercase()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the tail of every run of two or more ASCII capitals
///
/// `EncodeURIComponent` becomes `EncodeUriComponent`: the run `URIC` keeps
/// its first letter, and its last letter stays uppercase because a lowercase
/// letter follows it. A run at the end of the input is a single word.
fn collapse_acronyms(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut result = String::with_capacity(word.len());
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_ascii_uppercase() {
            result.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_uppercase() {
            i += 1;
        }
        let run = &chars[start..i];

        if run.len() < 2 {
            result.extend(run);
            continue;
        }

        let starts_next_word = chars.get(i).is_some_and(|c| c.is_ascii_lowercase());
        let (acronym, next_word_start) = if starts_next_word {
            (&run[..run.len() - 1], Some(run[run.len() - 1]))
        } else {
            (run, None)
        };

        result.push(acronym[0]);
        for ch in &acronym[1..] {
            result.push(ch.to_ascii_lowercase());
        }
        if let Some(ch) = next_word_start {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascalize_separators() {
        assert_eq!(pascalize("foo-bar"), "FooBar");
        assert_eq!(pascalize("foo_bar"), "FooBar");
        assert_eq!(pascalize("foo bar"), "FooBar");
        assert_eq!(pascalize("foo \t-_ bar"), "FooBar");
    }

    #[test]
    fn test_pascalize_shouting_input_is_lowercased() {
        assert_eq!(pascalize("FOO_BAR"), "FooBar");
        assert_eq!(pascalize("FOO-BAR-BAZ"), "FooBarBaz");
        assert_eq!(pascalize("URL"), "Url");
    }

    #[test]
    fn test_pascalize_keeps_inner_case() {
        assert_eq!(pascalize("encodeURIComponent"), "EncodeURIComponent");
        assert_eq!(pascalize("Foo_BAR"), "FooBAR");
    }

    #[test]
    fn test_pascalize_degrades_to_single_segment() {
        assert_eq!(pascalize("hello"), "Hello");
        assert_eq!(pascalize("hello.world"), "Hello.world");
    }

    #[test]
    fn test_pascalize_edge_separators() {
        assert_eq!(pascalize(""), "");
        assert_eq!(pascalize("--"), "");
        assert_eq!(pascalize("_private_"), "Private");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("foo-bar"), "fooBar");
        assert_eq!(camelize("FOO_BAR"), "fooBar");
        assert_eq!(camelize("Already"), "already");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_dasherize_acronyms() {
        assert_eq!(dasherize("encodeURIComponent"), "encode-uri-component");
        assert_eq!(dasherize("XMLHttpRequest"), "xml-http-request");
        assert_eq!(dasherize("getAPIUrl"), "get-api-url");
    }

    #[test]
    fn test_dasherize_trailing_acronym() {
        assert_eq!(dasherize("parseURL"), "parse-url");
        assert_eq!(dasherize("fooBAR"), "foo-bar");
    }

    #[test]
    fn test_dasherize_plain_words() {
        assert_eq!(dasherize("fooBar"), "foo-bar");
        assert_eq!(dasherize("FooBarBaz"), "foo-bar-baz");
        assert_eq!(dasherize("foo_bar baz"), "foo-bar-baz");
        assert_eq!(dasherize("FOO_BAR"), "foo-bar");
        assert_eq!(dasherize("a"), "a");
        assert_eq!(dasherize(""), "");
    }

    #[test]
    fn test_dasherize_single_capital_words() {
        assert_eq!(dasherize("aBc"), "a-bc");
        assert_eq!(dasherize("isA"), "is-a");
    }

    #[test]
    fn test_dasherize_splits_only_on_ascii_capitals() {
        assert_eq!(dasherize("fooÉtat"), "fooÉtat");
        assert_eq!(dasherize("naïveURLÉcole"), "naïve-urlÉcole");
        assert_eq!(collapse_acronyms("ÀBCd"), "ÀBCd");
    }

    #[test]
    fn test_constantize() {
        assert_eq!(constantize("foo-bar"), "FOO_BAR");
        assert_eq!(constantize("encodeURIComponent"), "ENCODE_URI_COMPONENT");
        assert_eq!(constantize("FOO_BAR"), "FOO_BAR");
    }

    #[test]
    fn test_collapse_acronyms() {
        assert_eq!(collapse_acronyms("EncodeURIComponent"), "EncodeUriComponent");
        assert_eq!(collapse_acronyms("ParseURL"), "ParseUrl");
        assert_eq!(collapse_acronyms("FooBar"), "FooBar");
    }
}
