//! Patch operations, options, and errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use variant_json_path::{ParseError, PathExpression, PathParser};

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PatchError {
    #[error("malformed path: {0}")]
    Malformed(#[from] ParseError),
    #[error("path matched nothing: {path}")]
    NotFound { path: String },
    #[error("path matched {matches} locations, expected one: {path}")]
    Ambiguous { path: String, matches: usize },
    #[error("operation {index} failed: {source}")]
    Operation {
        index: usize,
        #[source]
        source: Box<PatchError>,
    },
}

impl PatchError {
    /// The error behind any batch wrapping.
    pub fn root_cause(&self) -> &PatchError {
        match self {
            PatchError::Operation { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// What to do when a path matches more than one location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleMatches {
    /// Replace the first match in document order.
    #[default]
    First,
    /// Fail with [`PatchError::Ambiguous`].
    Reject,
}

/// Knobs for patch application. Deserializable so hosts can embed it in their
/// own configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyOptions {
    pub multiple_matches: MultipleMatches,
}

impl ApplyOptions {
    /// Options that reject ambiguous paths.
    pub fn strict() -> Self {
        Self {
            multiple_matches: MultipleMatches::Reject,
        }
    }
}

// ── Operation ─────────────────────────────────────────────────────────────

/// One edit request, serialized as `{"op": "replace", "path": "$...", "value": ...}`.
///
/// The path is kept as source text so the filter token extractor can classify
/// it before it is compiled or evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Replace { path: String, value: Value },
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        PatchOperation::Replace {
            path: path.into(),
            value,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Replace { path, .. } => path,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            PatchOperation::Replace { value, .. } => value,
        }
    }

    pub fn compile(&self) -> Result<PathExpression, ParseError> {
        PathParser::compile(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn operation_serde_shape() {
        let op = PatchOperation::replace("$.values[?(@.alias == 'title')].value", json!("Hi"));
        let encoded = serde_json::to_value(&op).unwrap();
        assert_eq!(
            encoded,
            json!({"op": "replace", "path": "$.values[?(@.alias == 'title')].value", "value": "Hi"})
        );
        let decoded: PatchOperation = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, op);
    }

    #[test]
    fn unknown_op_is_rejected() {
        let res: Result<PatchOperation, _> =
            serde_json::from_value(json!({"op": "remove", "path": "$.a"}));
        assert!(res.is_err());
    }

    #[test]
    fn root_cause_unwraps_batch_errors() {
        let err = PatchError::Operation {
            index: 2,
            source: Box::new(PatchError::NotFound { path: "$.a".into() }),
        };
        assert_eq!(err.root_cause(), &PatchError::NotFound { path: "$.a".into() });
        assert_eq!(err.to_string(), "operation 2 failed: path matched nothing: $.a");
    }

    #[test]
    fn options_default_to_first_match() {
        assert_eq!(ApplyOptions::default().multiple_matches, MultipleMatches::First);
        let strict: ApplyOptions =
            serde_json::from_value(json!({"multiple_matches": "reject"})).unwrap();
        assert_eq!(strict, ApplyOptions::strict());
        let empty: ApplyOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty, ApplyOptions::default());
    }
}
