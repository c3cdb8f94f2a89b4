//! Type definitions for dot-notation paths.

use serde_json::Value;

/// The result of reading a key path.
///
/// A read that crosses an array fans out into one entry per element, so the
/// shape of the result mirrors the array nesting of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated<'a> {
    /// Nothing is stored at the path, or the stored value is `null`.
    Absent,
    /// A single value found at the path.
    Leaf(&'a Value),
    /// One result per element of an array met along the path, in array order.
    Fanned(Vec<Evaluated<'a>>),
}

impl<'a> Evaluated<'a> {
    pub(crate) fn from_option(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => Evaluated::Absent,
            Some(v) => Evaluated::Leaf(v),
        }
    }

    /// Check if nothing was found.
    pub fn is_absent(&self) -> bool {
        matches!(self, Evaluated::Absent)
    }

    /// Get the value if this is a single leaf.
    pub fn as_leaf(&self) -> Option<&'a Value> {
        match self {
            Evaluated::Leaf(v) => Some(v),
            _ => None,
        }
    }

    /// Get the per-element results if the read fanned out over an array.
    pub fn as_fanned(&self) -> Option<&[Evaluated<'a>]> {
        match self {
            Evaluated::Fanned(items) => Some(items),
            _ => None,
        }
    }

    /// Convert into an owned JSON value.
    ///
    /// `Absent` becomes `null` and fan-out becomes an array.
    ///
    /// # Example
    ///
    /// ```
    /// use doc_path::evaluate_path;
    /// use serde_json::json;
    ///
    /// let doc = json!([{"f": "A"}, {"g": "B"}]);
    /// assert_eq!(evaluate_path(&doc, "f").to_value(), json!(["A", null]));
    /// ```
    pub fn to_value(&self) -> Value {
        match self {
            Evaluated::Absent => Value::Null,
            Evaluated::Leaf(v) => (*v).clone(),
            Evaluated::Fanned(items) => Value::Array(items.iter().map(Self::to_value).collect()),
        }
    }
}

impl From<Evaluated<'_>> for Value {
    fn from(result: Evaluated<'_>) -> Self {
        result.to_value()
    }
}

/// How a single level of a key path is accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'p> {
    /// The container is an array; the whole key path applies to each element.
    Fanout,
    /// The whole key path is a literal key of the container.
    Literal(&'p str),
    /// Access `head`, then continue with `rest` if there is one.
    Descend { head: &'p str, rest: Option<&'p str> },
}

impl<'p> Step<'p> {
    /// The key accessed at this level, if any.
    pub fn key(&self) -> Option<&'p str> {
        match self {
            Step::Fanout => None,
            Step::Literal(key) => Some(key),
            Step::Descend { head, .. } => Some(head),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_collapses_to_absent() {
        let null = json!(null);
        assert!(Evaluated::from_option(Some(&null)).is_absent());
        assert!(Evaluated::from_option(None).is_absent());

        let zero = json!(0);
        assert_eq!(Evaluated::from_option(Some(&zero)).as_leaf(), Some(&json!(0)));
    }

    #[test]
    fn test_to_value_nested() {
        let a = json!("A");
        let result = Evaluated::Fanned(vec![
            Evaluated::Fanned(vec![Evaluated::Leaf(&a), Evaluated::Absent]),
            Evaluated::Absent,
        ]);
        assert_eq!(result.to_value(), json!([["A", null], null]));
        assert_eq!(result.as_fanned().map(|items| items.len()), Some(2));
        assert_eq!(result.as_leaf(), None);
    }

    #[test]
    fn test_step_key() {
        assert_eq!(Step::Fanout.key(), None);
        assert_eq!(Step::Literal("a.b").key(), Some("a.b"));
        assert_eq!(
            Step::Descend {
                head: "a",
                rest: Some("b")
            }
            .key(),
            Some("a")
        );
    }
}
