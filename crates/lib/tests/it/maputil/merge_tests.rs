use serde_json::json;
use stockutil::{
    Mapping, Merge, Value,
    maputil::{merge, merge_all},
};

use crate::helpers::*;

// ===== IDENTITY =====

#[test]
fn test_merge_nothing_is_empty() {
    assert!(merge(None, None).is_empty());
    assert!(merge_all(Vec::<Option<&Mapping>>::new()).is_empty());
    assert!(merge_all([None, None, None]).is_empty());
}

#[test]
fn test_merge_with_absent_operand_is_a_copy() {
    let first = mapping(json!({"name": "First", "enabled": true}));

    assert_eq!(merge(Some(&first), None), first);
    assert_eq!(merge(None, Some(&first)), first);
    assert_eq!(merge_all([Some(&first)]), first);
}

#[test]
fn test_merge_with_empty_mapping_is_a_copy() {
    let first = mapping(json!({"name": "First", "tags": ["a", "b"]}));
    let empty = Mapping::new();

    assert_eq!(first.merge(&empty), first);
    assert_eq!(empty.merge(&first), first);
}

// ===== KEY UNION =====

#[test]
fn test_merge_disjoint_keys() {
    let first = mapping(json!({"name": "First"}));
    let second = mapping(json!({"age": 2}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(to_json(&out), json!({"name": "First", "age": 2}));
    assert!(out.conflicted_keys().next().is_none());
}

#[test]
fn test_keys_only_in_accumulator_pass_through() {
    let first = mapping(json!({"name": "First", "only_left": [1, 2]}));
    let second = mapping(json!({"name": "First"}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(out, first);
}

// ===== CONFLICTS =====

#[test]
fn test_merge_conflicting_key_keeps_both_in_order() {
    let first = mapping(json!({"name": "First"}));
    let second = mapping(json!({"name": "Second", "age": 2}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(out.get("name"), Some(&conflict(["First", "Second"])));
    assert_eq!(out.get("age"), Some(&Value::Int(2)));
    assert_eq!(
        to_json(&out),
        json!({"name": ["First", "Second"], "age": 2})
    );
}

#[test]
fn test_merge_operand_order_decides_conflict_order() {
    let first = mapping(json!({"name": "First"}));
    let second = mapping(json!({"name": "Second"}));

    let forward = merge(Some(&first), Some(&second));
    let backward = merge(Some(&second), Some(&first));

    assert_eq!(forward.get("name"), Some(&conflict(["First", "Second"])));
    assert_eq!(backward.get("name"), Some(&conflict(["Second", "First"])));
    assert_keys(&forward, &["name"]);
    assert_keys(&backward, &["name"]);
}

#[test]
fn test_merge_type_sensitive_conflict() {
    let first = mapping(json!({"name": "First", "age": "yes"}));
    let second = mapping(json!({"name": "Second", "age": 42}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(
        out.get("age"),
        Some(&conflict([Value::from("yes"), Value::from(42)]))
    );
    assert_eq!(
        to_json(&out),
        json!({"name": ["First", "Second"], "age": ["yes", 42]})
    );
}

#[test]
fn test_numeric_looking_text_is_not_a_number() {
    let first = mapping(json!({"count": "2"}));
    let second = mapping(json!({"count": 2}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(
        out.get("count"),
        Some(&conflict([Value::from("2"), Value::from(2)]))
    );
}

#[test]
fn test_int_and_float_are_different_types() {
    let first = mapping(json!({"ratio": 1}));
    let second = mapping(json!({"ratio": 1.0}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(
        out.get("ratio"),
        Some(&conflict([Value::Int(1), Value::Float(1.0)]))
    );
}

#[test]
fn test_repeated_conflicts_stay_flat() {
    let a = mapping(json!({"k": "v1"}));
    let b = mapping(json!({"k": "v2"}));
    let c = mapping(json!({"k": "v3"}));

    let out = merge_all([Some(&a), Some(&b), Some(&c)]);

    assert_eq!(out.get("k"), Some(&conflict(["v1", "v2", "v3"])));
    assert_eq!(to_json(&out), json!({"k": ["v1", "v2", "v3"]}));
}

#[test]
fn test_fold_matches_pairwise_merges() {
    let a = mapping(json!({"k": "v1", "x": null}));
    let b = mapping(json!({"k": "v2", "x": 1}));
    let c = mapping(json!({"k": "v3", "x": 2, "y": true}));

    let folded = merge_all([Some(&a), Some(&b), Some(&c)]);
    let pairwise = merge(Some(&merge(Some(&a), Some(&b))), Some(&c));

    assert_eq!(folded, pairwise);
    assert_eq!(folded, a.merge(&b).merge(&c));
}

#[test]
fn test_merging_merged_outputs_stays_flat() {
    let left = merge(
        Some(&mapping(json!({"k": 1}))),
        Some(&mapping(json!({"k": 2}))),
    );
    let right = merge(
        Some(&mapping(json!({"k": 3}))),
        Some(&mapping(json!({"k": 4}))),
    );

    let out = left.merge(&right);

    assert_eq!(out.get("k"), Some(&conflict([1, 2, 3, 4])));
}

#[test]
fn test_conflict_repeats_are_recorded() {
    let a = mapping(json!({"k": "x"}));
    let b = mapping(json!({"k": "y"}));

    let out = merge_all([Some(&a), Some(&b), Some(&a)]);

    assert_eq!(out.get("k"), Some(&conflict(["x", "y", "x"])));
}

// ===== NULL HANDLING =====

#[test]
fn test_null_left_takes_right_value() {
    let first = mapping(json!({"name": "First", "enabled": null}));
    let second = mapping(json!({"name": "Second", "enabled": true}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(
        to_json(&out),
        json!({"name": ["First", "Second"], "enabled": true})
    );
}

#[test]
fn test_null_right_never_overwrites() {
    let first = mapping(json!({"enabled": false}));
    let second = mapping(json!({"enabled": null}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(out.get("enabled"), Some(&Value::Bool(false)));
}

#[test]
fn test_null_survives_only_when_every_side_is_null() {
    let a = mapping(json!({"gone": null, "back": null}));
    let b = mapping(json!({"gone": null}));
    let c = mapping(json!({"back": "here"}));

    let out = merge_all([Some(&a), Some(&b), Some(&c)]);

    assert_eq!(out.get("gone"), Some(&Value::Null));
    assert_eq!(out.get("back"), Some(&Value::from("here")));
}

#[test]
fn test_null_between_conflicts_is_skipped() {
    let a = mapping(json!({"k": 1}));
    let b = mapping(json!({"k": null}));
    let c = mapping(json!({"k": 2}));

    let out = merge_all([Some(&a), Some(&b), Some(&c)]);

    assert_eq!(out.get("k"), Some(&conflict([1, 2])));
}

// ===== EQUAL VALUES =====

#[test]
fn test_equal_values_are_not_wrapped() {
    let first = mapping(json!({"name": "Same", "n": 3, "on": true}));
    let second = mapping(json!({"name": "Same", "n": 3, "on": true}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(out, first);
    assert!(out.conflicted_keys().next().is_none());
}

#[test]
fn test_self_merge_is_identity() {
    let first = mapping(json!({"name": "First", "tags": ["a"], "meta": {"x": 1}}));
    assert_eq!(first.merge(&first), first);
}

// ===== CALLER-SUPPLIED CONTAINERS =====

#[test]
fn test_caller_lists_are_opaque() {
    let first = mapping(json!({"tags": ["a", "b"]}));
    let second = mapping(json!({"tags": ["c"]}));

    let out = merge(Some(&first), Some(&second));

    let expected = conflict([
        Value::List(vec!["a".into(), "b".into()]),
        Value::List(vec!["c".into()]),
    ]);
    assert_eq!(out.get("tags"), Some(&expected));
    assert_eq!(to_json(&out), json!({"tags": [["a", "b"], ["c"]]}));
}

#[test]
fn test_equal_caller_lists_are_not_wrapped() {
    let first = mapping(json!({"tags": ["a", "b"]}));

    let out = merge(Some(&first), Some(&first.clone()));

    assert_eq!(
        out.get("tags"),
        Some(&Value::List(vec!["a".into(), "b".into()]))
    );
}

#[test]
fn test_nested_mappings_are_not_merged_recursively() {
    let first = mapping(json!({"meta": {"a": 1}}));
    let second = mapping(json!({"meta": {"b": 2}}));

    let out = merge(Some(&first), Some(&second));

    assert_eq!(
        to_json(&out),
        json!({"meta": [{"a": 1}, {"b": 2}]})
    );
}

// ===== OWNERSHIP =====

#[test]
fn test_inputs_are_untouched() {
    let first = mapping(json!({"name": "First", "tags": ["a"]}));
    let second = mapping(json!({"name": "Second", "tags": ["b"]}));
    let (first_before, second_before) = (first.clone(), second.clone());

    let mut out = merge(Some(&first), Some(&second));
    if let Some(Value::Conflict(c)) = out.get_mut("name") {
        c.push(Value::from("Third"));
    }

    assert_eq!(first, first_before);
    assert_eq!(second, second_before);
    assert_eq!(out.get("name"), Some(&conflict(["First", "Second", "Third"])));
}

#[test]
fn test_merge_many_operands() {
    let operands: Vec<Mapping> = (0..10)
        .map(|i| mapping(json!({"shared": i, format!("own_{i}"): i})))
        .collect();

    let out = merge_all(operands.iter().map(Some));

    assert_eq!(out.len(), 11);
    assert_eq!(out.get("shared"), Some(&conflict(0..10)));
    assert_eq!(out.get("own_7"), Some(&Value::Int(7)));
}
