//! Numeric format detection.
//!
//! Classifies values, and text that looks like a number, as integers, floats or
//! hexadecimal literals. Text must be exactly the number: surrounding
//! whitespace disqualifies it.

use crate::value::Value;

/// Returns true for integers and for text holding a base-10 `i64`.
///
/// Floats are never integers, even when they have no fractional part.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Text(s) => s.parse::<i64>().is_ok(),
        _ => false,
    }
}

/// Returns true for integers, finite floats, and text holding either.
pub fn is_float(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite(),
        // "inf" and "NaN" parse but are not numbers here
        Value::Text(s) => s.parse::<f64>().is_ok_and(f64::is_finite),
        _ => false,
    }
}

/// Returns true for text of the form `0x` followed by one or more hex digits.
///
/// Numbers are never hexadecimal: by the time a literal is a number its base is
/// gone.
pub fn is_hexadecimal(value: &Value) -> bool {
    let Value::Text(s) = value else {
        return false;
    };
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => !digits.is_empty() && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
