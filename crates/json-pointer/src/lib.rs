//! Locations inside a JSON document.
//!
//! A location is the concrete route from the document root to one node: a
//! sequence of object keys and array indices. The path evaluator reports every
//! match with its location, and the patch applier follows the same location to
//! rebuild the document spine. Locations render to RFC 6901 JSON Pointers for
//! diagnostics and for callers that address nodes by pointer.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("json pointer must be absolute or empty")]
    NotAbsolute,
}

/// One step of a location: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl From<&str> for PathStep {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for PathStep {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for PathStep {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(k) => f.write_str(k),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

/// Unescapes one JSON Pointer token component.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes one JSON Pointer token component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse an absolute pointer into unescaped tokens.
///
/// Examples:
/// - `"" -> []`
/// - `"/" -> [""]`
/// - `"/a~1b/~0k/0" -> ["a/b", "~k", "0"]`
pub fn parse_json_pointer(pointer: &str) -> Result<Vec<String>, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    if !pointer.starts_with('/') {
        return Err(JsonPointerError::NotAbsolute);
    }
    Ok(pointer.split('/').skip(1).map(unescape_component).collect())
}

/// Format a location as an RFC 6901 pointer. The root location is `""`.
pub fn format_json_pointer(location: &[PathStep]) -> String {
    let mut out = String::new();
    for step in location {
        out.push('/');
        match step {
            PathStep::Key(key) => out.push_str(&escape_component(key)),
            PathStep::Index(index) => out.push_str(&index.to_string()),
        }
    }
    out
}

/// Resolve a location against `doc`.
///
/// A key step only descends into objects and an index step only into arrays.
pub fn find<'a>(doc: &'a Value, location: &[PathStep]) -> Option<&'a Value> {
    let mut current = doc;
    for step in location {
        current = match (step, current) {
            (PathStep::Key(key), Value::Object(map)) => map.get(key)?,
            (PathStep::Index(index), Value::Array(arr)) => arr.get(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Mutable counterpart of [`find`].
pub fn find_mut<'a>(doc: &'a mut Value, location: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in location {
        current = match (step, current) {
            (PathStep::Key(key), Value::Object(map)) => map.get_mut(key)?,
            (PathStep::Index(index), Value::Array(arr)) => arr.get_mut(*index)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Resolve a pointer string against `doc`.
///
/// Tokens address object keys verbatim; on arrays a token must be a
/// non-negative decimal index.
pub fn find_by_pointer<'a>(
    doc: &'a Value,
    pointer: &str,
) -> Result<Option<&'a Value>, JsonPointerError> {
    let tokens = parse_json_pointer(pointer)?;
    let mut current = doc;
    for token in &tokens {
        let next = match current {
            Value::Object(map) => map.get(token),
            Value::Array(arr) => parse_array_index(token).and_then(|idx| arr.get(idx)),
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

fn parse_array_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if token.len() > 1 && token.starts_with('0') {
        return None;
    }
    token.parse().ok()
}
