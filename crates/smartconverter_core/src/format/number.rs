//! Parse-or-zero input handling and 0..2 fraction digit formatting.
//!
//! # Invariants
//! - `parse_value` is total: empty or malformed input is `0.0`.
//! - `format_value` returns literal `"0"` for empty raw input, whatever the
//!   computed value is.
//! - Rounding is half to even on the shortest round-trip decimal digits of
//!   the double, so `0.025` renders `0.02` and `0.075` renders `0.08`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_FRACTION_DIGITS: usize = 2;
const EMPTY_INPUT_DISPLAY: &str = "0";

static DECIMAL_NUMERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid decimal numeral regex")
});

/// Separators used when rendering a formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLocale {
    pub grouping_separator: String,
    pub decimal_separator: String,
    /// Digits per integer group; `0` disables grouping.
    pub grouping_size: usize,
}

impl NumberLocale {
    /// en-US separators: `1,234.5`.
    pub fn en_us() -> Self {
        Self {
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            grouping_size: 3,
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Parses raw user text into a number.
///
/// Accepts an optional sign, digits with an optional fraction (or a
/// leading-dot fraction) and an optional exponent. Anything else, including
/// surrounding whitespace and `inf`/`nan` spellings, yields `0.0`. Numerals
/// beyond the `f64` range parse to signed infinity.
pub fn parse_value(raw: &str) -> f64 {
    if !DECIMAL_NUMERAL_RE.is_match(raw) {
        return 0.0;
    }
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Formats `value` for display using the default (en-US) locale.
pub fn format_value(raw: &str, value: f64) -> String {
    format_value_with(raw, value, &NumberLocale::default())
}

/// Formats `value` for display with explicit locale separators.
///
/// Empty `raw` always renders as `"0"`.
pub fn format_value_with(raw: &str, value: f64, locale: &NumberLocale) -> String {
    if raw.is_empty() {
        return EMPTY_INPUT_DISPLAY.to_string();
    }
    format_number(value, locale)
}

fn format_number(value: f64, locale: &NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let (integer_digits, fraction_digits) = round_shortest_decimal(value.abs());
    let rounds_to_zero =
        integer_digits.bytes().all(|digit| digit == b'0') && fraction_digits.is_empty();

    let mut out = String::with_capacity(integer_digits.len() * 4 / 3 + fraction_digits.len() + 2);
    // Negative values that round to zero print unsigned "0", unlike the
    // platform formatter's "-0".
    if value.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    push_grouped(&mut out, &integer_digits, locale);
    if !fraction_digits.is_empty() {
        out.push_str(&locale.decimal_separator);
        out.push_str(&fraction_digits);
    }
    out
}

/// Rounds a finite, non-negative value to `MAX_FRACTION_DIGITS` using half to
/// even on its shortest round-trip decimal digits.
///
/// Returns integer digits (no leading zeros, at least one digit) and fraction
/// digits (no trailing zeros).
fn round_shortest_decimal(value: f64) -> (String, String) {
    // `{:e}` yields the shortest digits that round-trip, e.g. `2.675e0`.
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent = exponent.parse::<i64>().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|digit| digit - b'0')
        .collect::<Vec<_>>();

    // Number of significant digits that sit left of the decimal point.
    let point = exponent + 1;
    let (mut integer, fraction) = if point <= 0 {
        let mut fraction = vec![0; point.unsigned_abs() as usize];
        fraction.extend_from_slice(&digits);
        (vec![0], fraction)
    } else if point as usize >= digits.len() {
        let mut integer = digits.clone();
        integer.resize(point as usize, 0);
        (integer, Vec::new())
    } else {
        let (integer, fraction) = digits.split_at(point as usize);
        (integer.to_vec(), fraction.to_vec())
    };

    let mut kept = fraction
        .iter()
        .copied()
        .take(MAX_FRACTION_DIGITS)
        .collect::<Vec<_>>();
    kept.resize(MAX_FRACTION_DIGITS, 0);
    let dropped = fraction.get(MAX_FRACTION_DIGITS..).unwrap_or(&[]);

    let round_up = match dropped.first() {
        Some(&first) if first > 5 => true,
        Some(&5) => dropped[1..].iter().any(|&digit| digit != 0) || kept[kept.len() - 1] % 2 == 1,
        _ => false,
    };

    if round_up && increment(&mut kept) && increment(&mut integer) {
        integer.insert(0, 1);
    }

    let first_significant = integer
        .iter()
        .position(|&digit| digit != 0)
        .unwrap_or(integer.len() - 1);
    while kept.last() == Some(&0) {
        kept.pop();
    }

    let to_text = |digits: &[u8]| digits.iter().map(|&d| char::from(b'0' + d)).collect::<String>();
    (to_text(&integer[first_significant..]), to_text(&kept))
}

/// Adds one to a big-endian digit run. Returns `true` on carry out.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

fn push_grouped(out: &mut String, digits: &str, locale: &NumberLocale) {
    let size = locale.grouping_size;
    if size == 0 || digits.len() <= size {
        out.push_str(digits);
        return;
    }

    let lead = match digits.len() % size {
        0 => size,
        rem => rem,
    };
    out.push_str(&digits[..lead]);
    for chunk in digits.as_bytes()[lead..].chunks(size) {
        out.push_str(&locale.grouping_separator);
        // ASCII digits only, so every chunk is valid UTF-8.
        out.extend(chunk.iter().map(|&digit| digit as char));
    }
}
