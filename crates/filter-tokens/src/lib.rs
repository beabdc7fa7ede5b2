//! Classify path strings by the culture and segment variants they filter on.
//!
//! Callers use this before any document is loaded, e.g. to authorize a batch
//! of edits per language and to decide which variant timestamps to bump. The
//! scan is lexical and tolerant: paths are never compiled here, and culture
//! literals are de-duplicated without regard to case.
//!
//! ```
//! use variant_filter_tokens::{any_operation_targets_invariant_culture, extract_cultures};
//!
//! let cultures = extract_cultures("$.values[?(@.culture=='en-US' || @.culture=='EN-US')]");
//! assert_eq!(cultures.len(), 1);
//! assert!(any_operation_targets_invariant_culture([
//!     "$.values[?(@.alias == 'title' && @.culture == 'da-DK')]",
//!     "$.values[?(@.alias == 'count' && @.culture == null)]",
//! ]));
//! ```

mod extract;
#[cfg(feature = "parallel")]
mod parallel;
mod scope;
mod tokens;

pub use extract::{
    any_operation_targets_invariant_culture, any_operation_targets_null_segment,
    contains_invariant_culture_filter, contains_null_segment_filter, extract_cultures,
    extract_cultures_from_operations, extract_segments, extract_segments_from_operations,
};
#[cfg(feature = "parallel")]
pub use parallel::par_extract_cultures_from_operations;
pub use scope::VariantScope;
pub use tokens::TokenSet;
