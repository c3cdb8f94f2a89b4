//! Decides how one level of a key path is accessed.

use serde_json::Value;

use crate::types::Step;

/// Split a key path at its first `.`.
///
/// # Example
///
/// ```
/// use doc_path::resolve::split_path;
///
/// assert_eq!(split_path("a.b.c"), ("a", Some("b.c")));
/// assert_eq!(split_path("a"), ("a", None));
/// assert_eq!(split_path(".a"), ("", Some("a")));
/// ```
pub fn split_path(key_path: &str) -> (&str, Option<&str>) {
    match key_path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (key_path, None),
    }
}

/// Check if the key path is stored verbatim as a key of `container`.
pub fn has_literal_key(container: &Value, key_path: &str) -> bool {
    match container {
        Value::Object(map) => map.contains_key(key_path),
        _ => false,
    }
}

/// Resolve the access strategy for `key_path` at `container`.
///
/// Arrays always fan out. Otherwise a literal key equal to the whole path
/// wins over splitting it at the first dot.
///
/// # Example
///
/// ```
/// use doc_path::resolve::resolve_step;
/// use doc_path::Step;
/// use serde_json::json;
///
/// let doc = json!({"a.b": 1, "a": {"b": 2}});
/// assert_eq!(resolve_step(&doc, "a.b"), Step::Literal("a.b"));
/// assert_eq!(
///     resolve_step(&doc, "a.c"),
///     Step::Descend { head: "a", rest: Some("c") }
/// );
/// assert_eq!(resolve_step(&json!([]), "a.b"), Step::Fanout);
/// ```
pub fn resolve_step<'p>(container: &Value, key_path: &'p str) -> Step<'p> {
    if container.is_array() {
        return Step::Fanout;
    }
    if has_literal_key(container, key_path) {
        return Step::Literal(key_path);
    }
    let (head, rest) = split_path(key_path);
    Step::Descend { head, rest }
}
