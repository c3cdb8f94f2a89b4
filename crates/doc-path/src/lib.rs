//! Dot-notation path access for nested JSON documents.
//!
//! A key path such as `"features.packages.name"` is walked through objects
//! one segment at a time. Arrays met along the way fan the operation out
//! over their elements: reads collect one result per element, writes are
//! broadcast to every element. A key that itself contains dots is matched
//! literally before the path is split.
//!
//! # Example
//!
//! ```
//! use doc_path::{evaluate_path, set_path};
//! use serde_json::json;
//!
//! let mut doc = json!({
//!     "features": [
//!         {"packages": [{"name": "Base"}, {"name": "Premium"}]},
//!         {"packages": [{"name": "Convenience"}, 5]}
//!     ]
//! });
//!
//! let names = evaluate_path(&doc, "features.packages.name");
//! assert_eq!(names.to_value(), json!([["Base", "Premium"], ["Convenience", null]]));
//!
//! set_path(&mut doc, "features.packages.name", json!("None")).unwrap();
//! assert_eq!(
//!     evaluate_path(&doc, "features.packages.name").to_value(),
//!     json!([["None", "None"], ["None", null]])
//! );
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod types;
pub use types::{Evaluated, Step};

pub mod resolve;
pub use resolve::{resolve_step, split_path};

pub mod guard;

mod evaluate;
pub use evaluate::evaluate_path;

mod set;
pub use set::{set_path, set_path_checked};

pub mod cli;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocPathError {
    #[error("No object was provided.")]
    MissingRoot,
    #[error("No keyPath was provided.")]
    MissingKeyPath,
}

/// Path access as methods on a JSON value.
///
/// # Example
///
/// ```
/// use doc_path::DocPath;
/// use serde_json::json;
///
/// let mut doc = json!({});
/// doc.set_path("a.b", json!(1)).unwrap();
/// assert_eq!(doc.evaluate_path("a.b").as_leaf(), Some(&json!(1)));
/// ```
pub trait DocPath {
    fn evaluate_path(&self, key_path: &str) -> Evaluated<'_>;

    fn set_path(&mut self, key_path: &str, value: Value) -> Result<&mut Self, DocPathError>;
}

impl DocPath for Value {
    fn evaluate_path(&self, key_path: &str) -> Evaluated<'_> {
        evaluate_path(self, key_path)
    }

    fn set_path(&mut self, key_path: &str, value: Value) -> Result<&mut Self, DocPathError> {
        set_path(self, key_path, value)
    }
}
