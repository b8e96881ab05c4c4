//! Array-or-scalar traversal.
//!
//! [`each`] visits every item of a sequence, or a scalar once. The callback
//! steers the traversal with a three-way result:
//!
//! - `Ok(Flow::Continue)` visits the next item;
//! - `Ok(Flow::Stop)` ends the traversal, which then reports success;
//! - `Err(e)` ends the traversal and `e` is returned unchanged.

use std::convert::Infallible;

use crate::value::Value;

/// Signal returned by an [`each`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Calls `f` once per item of a sequence, or once with `(0, value)` for
/// anything else.
///
/// # Errors
///
/// Returns the first error produced by `f`. Stopping early is not an error.
///
/// # Examples
///
/// ```
/// use stockutil::Value;
/// use stockutil::sliceutil::{Flow, each};
///
/// let items = Value::List(vec![1.into(), 2.into(), 3.into()]);
/// let mut seen = Vec::new();
///
/// each(&items, |_, item| {
///     seen.push(item.clone());
///     Ok::<_, String>(if seen.len() == 2 { Flow::Stop } else { Flow::Continue })
/// })?;
///
/// assert_eq!(seen, vec![Value::from(1), Value::from(2)]);
/// # Ok::<(), String>(())
/// ```
pub fn each<E, F>(value: &Value, mut f: F) -> Result<(), E>
where
    F: FnMut(usize, &Value) -> Result<Flow, E>,
{
    match value.as_sequence() {
        Some(items) => {
            for (index, item) in items.iter().enumerate() {
                if f(index, item)? == Flow::Stop {
                    break;
                }
            }
        }
        None => {
            f(0, value)?;
        }
    }
    Ok(())
}

/// Traversal whose callback can neither fail nor stop.
fn visit_all<F>(value: &Value, mut f: F)
where
    F: FnMut(usize, &Value),
{
    let result = each::<Infallible, _>(value, |index, item| {
        f(index, item);
        Ok(Flow::Continue)
    });
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Returns the items of a sequence, or the scalar as a one-item vector.
pub fn sliceify(value: &Value) -> Vec<Value> {
    let mut out = Vec::new();
    visit_all(value, |_, item| out.push(item.clone()));
    out
}

/// Returns `f` applied to every item, in order.
pub fn map<F>(value: &Value, mut f: F) -> Vec<Value>
where
    F: FnMut(usize, &Value) -> Value,
{
    let mut out = Vec::new();
    visit_all(value, |index, item| out.push(f(index, item)));
    out
}

/// Returns `f` applied to the text rendering of every item, in order.
pub fn map_string<F>(value: &Value, mut f: F) -> Vec<String>
where
    F: FnMut(usize, String) -> String,
{
    let mut out = Vec::new();
    visit_all(value, |index, item| out.push(f(index, item.to_string())));
    out
}
