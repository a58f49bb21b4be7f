use std::fmt::Display;
use std::iter;

/// Pure: Left-pad `input` with `fill` up to `width` characters
///
/// Input already at or beyond `width` is returned unchanged. Width counts
/// characters, not bytes.
///
/// ```
/// use shapekit::pad;
///
/// assert_eq!(pad("5", '0', 3), "005");
/// assert_eq!(pad(42, ' ', 4), "  42");
/// assert_eq!(pad("123", '0', 3), "123");
/// ```
pub fn pad(input: impl Display, fill: char, width: usize) -> String {
    let text = input.to_string();
    let missing = width.saturating_sub(text.chars().count());
    if missing == 0 {
        return text;
    }

    let mut padded: String = iter::repeat(fill).take(missing).collect();
    padded.push_str(&text);
    padded
}

/// Pure: Right-pad `input` with `fill` up to `width` characters
pub fn pad_right(input: impl Display, fill: char, width: usize) -> String {
    let mut text = input.to_string();
    let missing = width.saturating_sub(text.chars().count());
    text.extend(iter::repeat(fill).take(missing));
    text
}
