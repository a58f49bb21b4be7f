use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for [`format_number`]
///
/// Built with `with_*` methods; every field has a usable default (no
/// decimals, empty placeholder, no prefix).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Digits after the decimal point
    pub decimals: usize,
    /// Text shown for missing or non-finite numbers
    pub empty_value: String,
    /// Text placed before every result, including the empty value
    pub prefix: String,
}

impl NumberFormat {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Set the placeholder for missing numbers
    pub fn with_empty_value(mut self, empty_value: impl Into<String>) -> Self {
        self.empty_value = empty_value.into();
        self
    }

    /// Set the prefix, e.g. a currency symbol
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

/// Pure: Format a number with fixed decimals and comma grouping
///
/// `None`, NaN and infinities produce `prefix + empty_value`. Exact ties
/// round away from zero (`2.5` -> `3`), and a result that rounds to zero
/// never carries a minus sign.
///
/// # Examples
///
/// ```
/// use shapekit::{format_number, NumberFormat};
///
/// let two_places = NumberFormat::new().with_decimals(2);
/// assert_eq!(format_number(Some(1234.5), &two_places), "1,234.50");
///
/// let missing = NumberFormat::new().with_empty_value("N/A");
/// assert_eq!(format_number(None, &missing), "N/A");
///
/// let money = two_places.with_empty_value("N/A").with_prefix("$");
/// assert_eq!(format_number(Some(f64::NAN), &money), "$N/A");
/// ```
pub fn format_number(value: Option<f64>, format: &NumberFormat) -> String {
    let Some(number) = value.filter(|n| n.is_finite()) else {
        return format!("{}{}", format.prefix, format.empty_value);
    };

    let magnitude = round_half_away(number.abs(), format.decimals);
    let sign = if number < 0.0 && magnitude != 0.0 { "-" } else { "" };

    let fixed = format!("{:.*}", format.decimals, magnitude);
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut result =
        String::with_capacity(format.prefix.len() + fixed.len() + integer.len() / 3);
    result.push_str(&format.prefix);
    result.push_str(sign);
    result.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Format a JSON value as a number
///
/// Numbers and numeric strings are formatted; anything else is treated as
/// a missing number.
pub fn format_number_value(value: &Value, format: &NumberFormat) -> String {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    format_number(number, format)
}

/// Round a non-negative value to `decimals` places, ties away from zero
///
/// Values too large to scale are already exact at that precision and are
/// returned unchanged.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = i32::try_from(decimals)
        .map(|d| 10f64.powi(d))
        .unwrap_or(f64::INFINITY);
    let scaled = value * scale;
    if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

/// Insert a comma every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
