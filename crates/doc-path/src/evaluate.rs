//! Reading values by key path.

use serde_json::Value;

use crate::resolve::resolve_step;
use crate::types::{Evaluated, Step};

/// Read the value at `key_path`.
///
/// Arrays met along the way fan the read out over their elements. An element
/// that does not resolve contributes [`Evaluated::Absent`], so every fanned
/// result is as long as the array it came from. Missing data is never an
/// error.
///
/// # Example
///
/// ```
/// use doc_path::{evaluate_path, Evaluated};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}, "list": [{"f": "A"}, {"f": "B"}]});
/// assert_eq!(evaluate_path(&doc, "a.b"), Evaluated::Leaf(&json!(1)));
/// assert_eq!(evaluate_path(&doc, "list.f").to_value(), json!(["A", "B"]));
/// assert!(evaluate_path(&doc, "a.c").is_absent());
/// ```
pub fn evaluate_path<'a>(root: &'a Value, key_path: &str) -> Evaluated<'a> {
    match (resolve_step(root, key_path), root) {
        (Step::Fanout, Value::Array(items)) => Evaluated::Fanned(
            items
                .iter()
                .map(|item| evaluate_path(item, key_path))
                .collect(),
        ),
        (Step::Literal(key), Value::Object(map))
        | (Step::Descend { head: key, rest: None }, Value::Object(map)) => {
            Evaluated::from_option(map.get(key))
        }
        (Step::Descend { head, rest: Some(rest) }, Value::Object(map)) => match map.get(head) {
            Some(next) => evaluate_path(next, rest),
            None => Evaluated::Absent,
        },
        _ => Evaluated::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_key() {
        let doc = json!({"testProperty": "testValue"});
        assert_eq!(
            evaluate_path(&doc, "testProperty"),
            Evaluated::Leaf(&json!("testValue"))
        );
        assert!(evaluate_path(&json!({}), "testProperty").is_absent());
    }

    #[test]
    fn test_scalar_root_is_absent() {
        assert!(evaluate_path(&json!(null), "a").is_absent());
        assert!(evaluate_path(&json!(42), "a").is_absent());
        assert!(evaluate_path(&json!("str"), "a.b").is_absent());
    }

    #[test]
    fn test_stored_null_is_absent() {
        assert!(evaluate_path(&json!({"a": null}), "a").is_absent());
        assert!(evaluate_path(&json!({"a": {"b": null}}), "a.b").is_absent());
    }

    #[test]
    fn test_falsy_values_resolve() {
        let doc = json!({"zero": 0, "empty": "", "no": false});
        assert_eq!(evaluate_path(&doc, "zero").as_leaf(), Some(&json!(0)));
        assert_eq!(evaluate_path(&doc, "empty").as_leaf(), Some(&json!("")));
        assert_eq!(evaluate_path(&doc, "no").as_leaf(), Some(&json!(false)));
    }

    #[test]
    fn test_literal_key_wins() {
        let doc = json!({
            "testProperty": {"testProperty2": "testVal"},
            "testProperty.testProperty2": "testVal2"
        });
        assert_eq!(
            evaluate_path(&doc, "testProperty.testProperty2").as_leaf(),
            Some(&json!("testVal2"))
        );
    }

    #[test]
    fn test_literal_key_at_depth() {
        let doc = json!({"outer": {"a.b": 1, "a": {"b": 2}}});
        assert_eq!(evaluate_path(&doc, "outer.a.b").as_leaf(), Some(&json!(1)));
    }

    #[test]
    fn test_array_value_as_leaf() {
        let doc = json!({"list": [1, 2]});
        assert_eq!(evaluate_path(&doc, "list").as_leaf(), Some(&json!([1, 2])));
    }

    #[test]
    fn test_fanout_keeps_length() {
        let doc = json!({"list": [{"f": 1}, 2, null, {"g": 3}]});
        let result = evaluate_path(&doc, "list.f");
        assert_eq!(result.to_value(), json!([1, null, null, null]));
        assert_eq!(result.as_fanned().map(|items| items.len()), Some(4));
    }

    #[test]
    fn test_empty_array_fans_to_empty() {
        let doc = json!({"list": []});
        assert_eq!(evaluate_path(&doc, "list.f"), Evaluated::Fanned(vec![]));
    }

    #[test]
    fn test_nested_arrays_nest_results() {
        let doc = json!([[{"a": 1}, {"a": 2}], [{"a": 3}]]);
        assert_eq!(evaluate_path(&doc, "a").to_value(), json!([[1, 2], [3]]));
    }
}
