//! The binary merge operation folded by [`merge_all`](crate::maputil::merge_all).

/// A type-homogeneous merge: two values of a type combine into a third.
///
/// Folding is strictly left to right. `a.merge(&b).merge(&c)` is the
/// definition of merging three operands; implementations are not required to
/// give the same result for `a.merge(&b.merge(&c))`.
///
/// Merging is total: it never fails and never mutates `other`.
///
/// # Examples
///
/// ```
/// use stockutil::{Mapping, Merge, Value};
///
/// let left = Mapping::new().with("name", "First");
/// let right = Mapping::new().with("age", 2);
///
/// let merged = left.merge(&right);
/// assert_eq!(merged.get("name"), Some(&Value::from("First")));
/// assert_eq!(merged.get("age"), Some(&Value::from(2)));
/// ```
pub trait Merge: Clone {
    /// Fold `other` into `self` in place.
    fn merge_from(&mut self, other: &Self);

    /// Merge with another instance, returning a new merged instance.
    fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.merge_from(other);
        merged
    }
}
