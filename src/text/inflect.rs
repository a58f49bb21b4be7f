/// Pure: Naive English plural
///
/// A trailing `y` becomes `ies`, anything else gets an `s`. Irregular
/// plurals are not handled.
///
/// ```
/// use shapekit::pluralize;
///
/// assert_eq!(pluralize("category"), "categories");
/// assert_eq!(pluralize("cat"), "cats");
/// ```
pub fn pluralize(word: &str) -> String {
    match word.strip_suffix('y') {
        Some(stem) => format!("{}ies", stem),
        None => format!("{}s", word),
    }
}

/// Pure: Strip surrounding whitespace, byte order marks and no-break spaces
pub fn trim(input: &str) -> &str {
    input.trim_matches(is_trimmable)
}

fn is_trimmable(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}' || ch == '\u{00A0}'
}
