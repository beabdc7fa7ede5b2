//! Replace operations over variant-aware JSON documents.
//!
//! A patch locates its target with a [`variant_json_path`] expression and
//! produces a new document; the input document is never mutated, so callers
//! can keep the pre-patch value for diffing or audit.
//!
//! ```
//! use serde_json::json;
//! use variant_json_patch::apply_replace;
//! use variant_json_path::PathParser;
//!
//! let doc = json!({"values": [{"alias": "title", "culture": null, "value": "Old"}]});
//! let path = PathParser::compile("$.values[?(@.alias == 'title' && @.culture == null)].value").unwrap();
//! let patched = apply_replace(&doc, &path, json!("New")).unwrap();
//! assert_eq!(patched["values"][0]["value"], "New");
//! assert_eq!(doc["values"][0]["value"], "Old");
//! ```

mod apply;
mod types;

pub use apply::{apply_all, apply_operation, apply_replace, apply_replace_with};
pub use types::{ApplyOptions, MultipleMatches, PatchError, PatchOperation};
