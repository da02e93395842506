// Numeric text recognition

use once_cell::sync::Lazy;
use regex::Regex;

// Leading numeral: optional whitespace (byte order mark included) and sign,
// then `Infinity` or a decimal literal with an optional exponent. Anything
// after the match is ignored.
static LEADING_FLOAT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[\s\x{FEFF}]*",
        r"([+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))"
    ))
    .unwrap()
});

// ASCII digits only; `\d` would accept other Unicode digits.
static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// Parse the leading numeral of `text`.
///
/// Returns `None` when there is no leading numeral. The result may be
/// infinite (`"Infinity"`, `"1e999"`); callers decide whether that is
/// acceptable.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let numeral = LEADING_FLOAT_REGEX.captures(text)?.get(1)?.as_str();

    match numeral.trim_start_matches(['+', '-']) {
        "Infinity" if numeral.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => numeral.parse().ok(),
    }
}

/// Check that the whole of `text` is an optionally negative run of digits.
pub fn is_integer_literal(text: &str) -> bool {
    INTEGER_REGEX.is_match(text)
}

/// Parse a strict integer literal into an `i64`.
///
/// Literals outside the `i64` range are rejected rather than rounded.
pub fn parse_integer(text: &str) -> Option<i64> {
    if !is_integer_literal(text) {
        return None;
    }
    text.parse().ok()
}

/// Convert a JSON float holding a whole number into an `i64`.
pub fn integral_f64(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}
