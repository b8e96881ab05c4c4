//! String-keyed mappings and the conflict-preserving merge.
//!
//! [`Mapping`] is both the input and the output of [`merge_all`], so merges
//! can be folded over any number of operands. See [`merge`](mod@merge) for
//! the conflict-resolution rules.
//!
//! ```
//! use stockutil::{Conflict, Mapping, Value, maputil};
//!
//! let first = Mapping::new().with("name", "First").with("enabled", Value::Null);
//! let second = Mapping::new().with("name", "Second").with("enabled", true);
//!
//! let merged = maputil::merge(Some(&first), Some(&second));
//! assert_eq!(
//!     merged.get("name"),
//!     Some(&Value::Conflict(Conflict::from_values(["First", "Second"])))
//! );
//! assert_eq!(merged.get("enabled"), Some(&Value::Bool(true)));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

pub mod merge;

pub use merge::{merge, merge_all};

/// A string-keyed collection of [`Value`]s. Key order is not significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: HashMap<String, Value>,
}

impl Mapping {
    /// Create a new empty `Mapping`.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Set a key-value pair, returning the previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder method to set a key-value pair
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a mutable value by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Returns true if the key is present, including keys mapped to null.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key-value pair.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Get an iterator over the keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Get an iterator over the values.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Get an iterator over all key-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Get the number of entries, including null ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a reference to the internal HashMap.
    pub fn as_hashmap(&self) -> &HashMap<String, Value> {
        &self.entries
    }

    /// Returns the keys whose values are recorded conflicts.
    pub fn conflicted_keys(&self) -> impl Iterator<Item = &String> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_conflict())
            .map(|(key, _)| key)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Mapping {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<Mapping> for HashMap<String, Value> {
    fn from(map: Mapping) -> Self {
        map.entries
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
