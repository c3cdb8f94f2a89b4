//! Writing values by key path.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::guard::touches_reserved;
use crate::resolve::resolve_step;
use crate::types::Step;
use crate::DocPathError;

/// Write `value` at `key_path` and return `root`.
///
/// Missing or scalar intermediate values are replaced with empty objects.
/// Arrays met along the way receive the write on every element; they are
/// never extended. Writes through a reserved segment (see
/// [`crate::guard`]) are dropped without an error.
///
/// # Errors
///
/// - `DocPathError::MissingRoot` - if `root` is `null`
/// - `DocPathError::MissingKeyPath` - if `key_path` is empty
///
/// # Example
///
/// ```
/// use doc_path::set_path;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// set_path(&mut doc, "a.b", json!("v")).unwrap();
/// assert_eq!(doc, json!({"a": {"b": "v"}}));
///
/// let mut doc = json!({"features": [{"feature": "A/C"}, {"feature": "Radio"}]});
/// set_path(&mut doc, "features.feature", json!("None")).unwrap();
/// assert_eq!(doc, json!({"features": [{"feature": "None"}, {"feature": "None"}]}));
/// ```
pub fn set_path<'a>(
    root: &'a mut Value,
    key_path: &str,
    value: Value,
) -> Result<&'a mut Value, DocPathError> {
    set_path_checked(Some(root), Some(key_path), value)
}

/// Like [`set_path`], for callers whose root or key path may be missing.
///
/// The root is checked before the key path.
///
/// # Example
///
/// ```
/// use doc_path::{set_path_checked, DocPathError};
/// use serde_json::json;
///
/// let err = set_path_checked(None, Some("x"), json!("v")).unwrap_err();
/// assert_eq!(err, DocPathError::MissingRoot);
///
/// let mut doc = json!({});
/// let err = set_path_checked(Some(&mut doc), None, json!("v")).unwrap_err();
/// assert_eq!(err, DocPathError::MissingKeyPath);
/// ```
pub fn set_path_checked<'a>(
    root: Option<&'a mut Value>,
    key_path: Option<&str>,
    value: Value,
) -> Result<&'a mut Value, DocPathError> {
    let root = match root {
        Some(root) if !root.is_null() => root,
        _ => return Err(DocPathError::MissingRoot),
    };
    let key_path = match key_path {
        Some(key_path) if !key_path.is_empty() => key_path,
        _ => return Err(DocPathError::MissingKeyPath),
    };

    if touches_reserved(key_path) {
        debug!(key_path, "dropping write through reserved segment");
        return Ok(root);
    }

    assign(root, key_path, value);
    Ok(root)
}

fn assign(container: &mut Value, key_path: &str, value: Value) {
    match (resolve_step(container, key_path), container) {
        (Step::Fanout, Value::Array(items)) => {
            for item in items.iter_mut() {
                assign(item, key_path, value.clone());
            }
        }
        (Step::Literal(key), Value::Object(map))
        | (Step::Descend { head: key, rest: None }, Value::Object(map)) => {
            map.insert(key.to_string(), value);
        }
        (Step::Descend { head, rest: Some(rest) }, Value::Object(map)) => {
            let next = map
                .entry(head)
                .or_insert_with(|| Value::Object(Map::new()));
            if !matches!(next, Value::Object(_) | Value::Array(_)) {
                *next = Value::Object(Map::new());
            }
            assign(next, rest, value);
        }
        (_, other) => {
            trace!(key_path, target = %other, "skipping write into scalar");
        }
    }
}
