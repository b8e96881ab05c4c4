//! Helpers for converting, searching and iterating over sequences of values.
//!
//! Functions here take borrowed slices and return new owned data; none of them
//! mutate their input. Traversal helpers that accept either a sequence or a
//! scalar live in [`each`](mod@each).

use crate::value::Value;

pub mod each;

pub use each::{Flow, each, map, map_string, sliceify};

/// Strict equality: same variant, same content.
pub fn strict_eq(_index: usize, first: &Value, second: &Value) -> bool {
    first == second
}

/// Relaxed equality: strictly equal, or both render to the same text.
///
/// `Value::Int(1)`, `Value::Float(1.0)` and `Value::Text("1")` are all relaxed
/// equal. Null is only relaxed equal to null.
pub fn relaxed_eq(_index: usize, first: &Value, second: &Value) -> bool {
    if first == second {
        return true;
    }
    if first.is_null() || second.is_null() {
        return false;
    }
    first.to_string() == second.to_string()
}

/// Returns whether the slice contains the value under strict equality.
pub fn contains(slice: &[Value], value: &Value) -> bool {
    contains_by(slice, value, strict_eq)
}

/// Returns whether the slice contains the value under the given comparator.
///
/// The comparator receives the index of the element being compared, the
/// searched-for value and the element.
pub fn contains_by<F>(slice: &[Value], value: &Value, comparator: F) -> bool
where
    F: Fn(usize, &Value, &Value) -> bool,
{
    slice
        .iter()
        .enumerate()
        .any(|(index, current)| comparator(index, value, current))
}

/// Returns whether the string slice contains the given string.
pub fn contains_string<S: AsRef<str>>(list: &[S], elem: &str) -> bool {
    list.iter().any(|item| item.as_ref() == elem)
}

/// Returns whether the string slice contains any of the given strings.
pub fn contains_any_string<S: AsRef<str>, E: AsRef<str>>(list: &[S], elems: &[E]) -> bool {
    elems.iter().any(|elem| contains_string(list, elem.as_ref()))
}

/// Returns whether the string slice contains all of the given strings.
pub fn contains_all_strings<S: AsRef<str>, E: AsRef<str>>(list: &[S], elems: &[E]) -> bool {
    elems.iter().all(|elem| contains_string(list, elem.as_ref()))
}

/// Returns the non-empty values of the slice, in order.
///
/// Null and zero-length text, lists and maps are dropped. Zero numbers and
/// `false` are kept.
pub fn compact(slice: &[Value]) -> Vec<Value> {
    slice.iter().filter(|v| !v.is_empty()).cloned().collect()
}

/// Returns the non-empty strings of the slice, in order.
pub fn compact_string<S: AsRef<str>>(list: &[S]) -> Vec<String> {
    list.iter()
        .map(|item| item.as_ref())
        .filter(|s: &&str| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders each item of a sequence as text. Returns `None` for non-sequences.
pub fn stringify(value: &Value) -> Option<Vec<String>> {
    value
        .as_sequence()
        .map(|items| items.iter().map(ToString::to_string).collect())
}

/// Returns the first value that is neither empty nor the zero value of its type.
pub fn or(values: &[Value]) -> Option<&Value> {
    values.iter().find(|v| !v.is_zero())
}

/// Returns the first non-empty string, or `""` when there is none.
pub fn or_string<S: AsRef<str>>(values: &[S]) -> &str {
    values
        .iter()
        .map(|item| item.as_ref())
        .find(|s: &&str| !s.is_empty())
        .unwrap_or("")
}

/// Returns the element at `index` of a sequence, or the character at `index`
/// of a text value as one-character text.
///
/// `None` when the index is out of range or the value is not indexable.
pub fn at(value: &Value, index: usize) -> Option<Value> {
    match value {
        Value::Text(s) => s.chars().nth(index).map(|c| Value::Text(c.to_string())),
        _ => value.as_sequence()?.get(index).cloned(),
    }
}

/// Returns the distinct values of the slice under strict equality, keeping the
/// first occurrence of each in order.
pub fn unique(slice: &[Value]) -> Vec<Value> {
    unique_by(slice, strict_eq)
}

/// Returns the distinct values of the slice under the given comparator.
pub fn unique_by<F>(slice: &[Value], comparator: F) -> Vec<Value>
where
    F: Fn(usize, &Value, &Value) -> bool,
{
    let mut values: Vec<Value> = Vec::new();
    for (index, current) in slice.iter().enumerate() {
        if !values
            .iter()
            .any(|existing| comparator(index, existing, current))
        {
            values.push(current.clone());
        }
    }
    values
}
