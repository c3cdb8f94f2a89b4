//! String-in, string-out helpers behind the `doc-path` binary.
//!
//! - `doc-path get <key-path>`          — print the value at a path
//! - `doc-path set <key-path> <value>`  — print the document after a write

use serde_json::Value;

use crate::{evaluate_path, set_path_checked, DocPathError};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    Json(serde_json::Error),
    Path(DocPathError),
    Usage(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Json(e)  => write!(f, "{e}"),
            CliError::Path(e)  => write!(f, "{e}"),
            CliError::Usage(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self { CliError::Json(e) }
}

impl From<DocPathError> for CliError {
    fn from(e: DocPathError) -> Self { CliError::Path(e) }
}

// ── get ───────────────────────────────────────────────────────────────────

/// Read `key_path` from a document.
///
/// Returns the result as a pretty-printed JSON string. Nothing found prints
/// as `null`; a fanned-out read prints as a (possibly nested) array.
pub fn lookup_path(doc_json: &str, key_path: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let result = evaluate_path(&doc, key_path).to_value();
    Ok(serde_json::to_string_pretty(&result)?)
}

// ── set ───────────────────────────────────────────────────────────────────

/// Parse a value argument. Anything that is not valid JSON is taken as a
/// plain string, so `set name Base` works without quoting.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Write `value_raw` at `key_path` in a document.
///
/// Returns the whole document as a pretty-printed JSON string. An empty
/// document string counts as a missing root.
pub fn assign_path(doc_json: &str, key_path: &str, value_raw: &str) -> Result<String, CliError> {
    let mut doc: Option<Value> = if doc_json.is_empty() {
        None
    } else {
        Some(serde_json::from_str(doc_json)?)
    };
    let out = set_path_checked(doc.as_mut(), Some(key_path), parse_value(value_raw))?;
    Ok(serde_json::to_string_pretty(out)?)
}

/// Dispatch command-line arguments (without the program name).
pub fn run(args: &[String], stdin: &str) -> Result<String, CliError> {
    match args {
        [cmd, key_path] if cmd == "get" => lookup_path(stdin.trim(), key_path),
        [cmd, key_path, value] if cmd == "set" => assign_path(stdin.trim(), key_path, value),
        [cmd] if cmd == "set" => Err(DocPathError::MissingKeyPath.into()),
        _ => Err(CliError::Usage(
            "Usage: doc-path get <key-path> | doc-path set <key-path> <value>".to_string(),
        )),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
