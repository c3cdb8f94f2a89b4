//! Reserved segment names that writes refuse to touch.
//!
//! JSON objects here are plain maps with no prototype chain, so nothing can
//! actually be polluted. Writes through these names are still dropped so
//! that documents behave the same as with the JavaScript `doc-path` package
//! that callers and fixtures were written against.

/// Segment names a write may never create, replace, or pass through.
pub const RESERVED_SEGMENTS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Check if a single segment is reserved.
pub fn is_reserved(segment: &str) -> bool {
    RESERVED_SEGMENTS.contains(&segment)
}

/// Check if any `.`-separated segment of `key_path` is reserved.
///
/// Empty segments produced by leading, trailing, or doubled dots are
/// inspected like any other, so `.prototype.test` is caught.
///
/// # Example
///
/// ```
/// use doc_path::guard::touches_reserved;
///
/// assert!(touches_reserved("__proto__.polluted"));
/// assert!(touches_reserved(".prototype.test"));
/// assert!(touches_reserved("a.constructor"));
/// assert!(!touches_reserved("prototypes.constructors"));
/// ```
pub fn touches_reserved(key_path: &str) -> bool {
    key_path.split('.').any(is_reserved)
}
