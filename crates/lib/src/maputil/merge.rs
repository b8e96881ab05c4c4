//! Conflict-preserving merge of [`Mapping`]s.
//!
//! Operands are folded left to right into an owned accumulator. For each key of
//! the incoming operand:
//!
//! 1. a key the accumulator has never seen is copied in;
//! 2. an incoming null never replaces what the accumulator holds;
//! 3. an accumulated null is replaced by the incoming value;
//! 4. a strictly equal incoming value changes nothing;
//! 5. anything else is a conflict, and both values are kept as a
//!    [`Conflict`] in encounter order. An existing conflict is appended to,
//!    so a key disputed by three operands reads `[v1, v2, v3]`.
//!
//! Keys only present in the accumulator pass through. Merging never fails and
//! never touches its operands.

use tracing::{debug, trace};

use super::Mapping;
use crate::traits::Merge;
use crate::value::{Conflict, Value};

impl Merge for Mapping {
    fn merge_from(&mut self, other: &Self) {
        for (key, incoming) in other {
            match self.entries.get_mut(key) {
                Some(existing) => resolve(key, existing, incoming),
                None => {
                    self.entries.insert(key.clone(), incoming.clone());
                }
            }
        }
    }
}

/// Apply the per-key rule for a key present on both sides.
fn resolve(key: &str, existing: &mut Value, incoming: &Value) {
    if incoming.is_null() || existing == incoming {
        return;
    }

    // An empty conflict contributes no values
    if matches!(incoming, Value::Conflict(conflict) if conflict.is_empty()) {
        return;
    }

    if existing.is_null() {
        *existing = incoming.clone();
        return;
    }

    trace!(
        key,
        left = existing.type_name(),
        right = incoming.type_name(),
        "Conflicting values, keeping both"
    );

    match existing {
        Value::Conflict(conflict) => conflict.push(incoming.clone()),
        _ => {
            let first = std::mem::take(existing);
            *existing = Value::Conflict(Conflict::pair(first, incoming.clone()));
        }
    }
}

/// Merge any number of mappings, left to right.
///
/// `None` operands contribute nothing, so an empty or all-`None` sequence
/// yields an empty mapping and a single mapping yields a copy of itself.
///
/// # Examples
///
/// ```
/// use stockutil::{Conflict, Mapping, Value, maputil::merge_all};
///
/// let a = Mapping::new().with("k", 1);
/// let b = Mapping::new().with("k", 2);
/// let c = Mapping::new().with("k", 3);
///
/// let merged = merge_all([Some(&a), None, Some(&b), Some(&c)]);
/// assert_eq!(
///     merged.get("k"),
///     Some(&Value::Conflict(Conflict::from_values([1, 2, 3])))
/// );
///
/// assert!(merge_all(Vec::<Option<&Mapping>>::new()).is_empty());
/// ```
pub fn merge_all<'a, I>(operands: I) -> Mapping
where
    I: IntoIterator<Item = Option<&'a Mapping>>,
{
    let mut count = 0usize;
    let merged = operands
        .into_iter()
        .inspect(|_| count += 1)
        .flatten()
        .fold(Mapping::new(), |mut acc, next| {
            acc.merge_from(next);
            acc
        });

    debug!(
        operands = count,
        keys = merged.len(),
        conflicts = merged.conflicted_keys().count(),
        "Merged mappings"
    );
    merged
}

/// Merge two mappings; `first`'s values precede `second`'s in any conflict.
pub fn merge(first: Option<&Mapping>, second: Option<&Mapping>) -> Mapping {
    merge_all([first, second])
}
