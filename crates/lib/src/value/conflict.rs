//! Conflict sequences recorded by the merge engine.
//!
//! A [`Conflict`] is an ordered, append-only list of the distinct values that
//! different operands contributed to the same key. It is never nested: pushing
//! a `Value::Conflict` appends its items instead of the conflict itself, so a
//! key disputed by three operands reads `[v1, v2, v3]` however the merges were
//! grouped.

use serde::{Deserialize, Serialize};

use super::Value;

/// Ordered values contributed to one key by disagreeing operands.
///
/// # Examples
///
/// ```
/// use stockutil::{Conflict, Value};
///
/// let mut conflict = Conflict::pair("First".into(), "Second".into());
/// conflict.push(Value::from(3));
///
/// assert_eq!(conflict.len(), 3);
/// assert_eq!(conflict.get(0), Some(&Value::from("First")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct Conflict {
    values: Vec<Value>,
}

impl Conflict {
    /// Creates an empty conflict
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the first two colliding values, `first` ahead of `second`.
    pub fn pair(first: Value, second: Value) -> Self {
        let mut conflict = Self::new();
        conflict.push(first);
        conflict.push(second);
        conflict
    }

    /// Builds a conflict from values in order.
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut conflict = Self::new();
        for value in values {
            conflict.push(value.into());
        }
        conflict
    }

    /// Appends a value. A `Value::Conflict` contributes its items.
    pub fn push(&mut self, value: Value) {
        match value {
            Value::Conflict(other) => self.values.extend(other.values),
            value => self.values.push(value),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }
}

// Deserialized sequences are pushed one by one so nested conflicts flatten
impl From<Vec<Value>> for Conflict {
    fn from(values: Vec<Value>) -> Self {
        Self::from_values(values)
    }
}

impl From<Conflict> for Vec<Value> {
    fn from(conflict: Conflict) -> Self {
        conflict.values
    }
}

impl Extend<Value> for Conflict {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for value in iter {
            self.push(value);
        }
    }
}

impl IntoIterator for Conflict {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Conflict {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
