//! Lenient integer coercion for loosely-typed record values.
//!
//! The API sends integers either as JSON numbers or as strings, sometimes
//! with trailing text (dates such as `"2017-05-03 00:00:00"` end up here
//! too). Coercion takes the leading integer and ignores the rest.

use serde_json::{Number, Value};

/// Coerce a record value to an integer.
///
/// Returns `None` for `null`, booleans, arrays, objects, strings without
/// a leading integer, and values outside the `i64` range.
pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => number_to_int(n),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn number_to_int(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Positive integers past i64::MAX.
    if n.is_u64() {
        return None;
    }

    let f = n.as_f64()?;
    if !f.is_finite() {
        return None;
    }
    let truncated = f.trunc();
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Parse the leading integer of `input`.
///
/// Leading whitespace and a single `+`/`-` sign are accepted, as is a
/// `0x`/`0X` prefix selecting hexadecimal. Parsing stops at the first
/// character that is not a digit in the selected radix.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i128::from_str_radix(&digits[..end], radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
