//! Restricted JSONPath for variant-aware content documents.
//!
//! Paths are anchored at `$` and chain two kinds of segments: `.name` property
//! access and `[?(@.field == literal && ...)]` array filters, where a literal
//! is a single- or double-quoted string or `null`. Nothing else from JSONPath
//! (wildcards, indices, slices, recursive descent, functions, relational
//! operators) is accepted.
//!
//! ```
//! use serde_json::json;
//! use variant_json_path::{PathEval, PathParser};
//!
//! let doc = json!({"values": [
//!     {"alias": "title", "culture": null, "value": "Invariant"},
//!     {"alias": "title", "culture": "en-US", "value": "English"}
//! ]});
//! let path = PathParser::compile("$.values[?(@.alias == 'title' && @.culture == null)].value").unwrap();
//! assert_eq!(PathEval::select(&doc, &path), vec![&json!("Invariant")]);
//! ```

mod builder;
mod error;
mod eval;
mod parser;
mod types;
mod util;
mod value;

pub use builder::{variant_value_path, PathBuilder};
pub use error::ParseError;
pub use eval::PathEval;
pub use parser::PathParser;
pub use types::{Condition, Literal, PathExpression, Segment};
pub use util::{accessed_properties, filter_fields};
pub use value::ValueNode;

pub use variant_json_pointer::PathStep;
