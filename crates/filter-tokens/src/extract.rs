//! Token scanning over raw path strings.
//!
//! Nothing here parses the path: a string that would not compile (an `||`,
//! a missing bracket) is still scanned, and literal text that merely looks
//! like a filter is counted. Exact matching is the evaluator's job.

use std::sync::LazyLock;

use regex::Regex;

use crate::TokenSet;

struct FieldPatterns {
    literal: Regex,
    null: Regex,
}

impl FieldPatterns {
    fn new(field: &str) -> Self {
        // Field names and `null` are bounded by non-identifier chars; `-` is an identifier char.
        let literal = format!(r#"(?:^|[^\w-]){field}\s*==\s*(?:'([^']*)'|"([^"]*)")"#);
        let null = format!(r"(?:^|[^\w-]){field}\s*==\s*null(?:$|[^\w-])");
        Self {
            literal: Regex::new(&literal).expect("literal token pattern must compile"),
            null: Regex::new(&null).expect("null token pattern must compile"),
        }
    }

    fn collect_into(&self, path: &str, out: &mut TokenSet) {
        for caps in self.literal.captures_iter(path) {
            if let Some(value) = caps.get(1).or_else(|| caps.get(2)) {
                out.insert(value.as_str());
            }
        }
    }

    fn literals(&self, path: &str) -> TokenSet {
        let mut out = TokenSet::new();
        self.collect_into(path, &mut out);
        out
    }

    fn has_null(&self, path: &str) -> bool {
        self.null.is_match(path)
    }
}

static CULTURE: LazyLock<FieldPatterns> = LazyLock::new(|| FieldPatterns::new("culture"));
static SEGMENT: LazyLock<FieldPatterns> = LazyLock::new(|| FieldPatterns::new("segment"));

pub(crate) fn collect_cultures_into(path: &str, out: &mut TokenSet) {
    CULTURE.collect_into(path, out);
}

/// Distinct `culture == '<literal>'` values in `path`.
pub fn extract_cultures(path: &str) -> TokenSet {
    CULTURE.literals(path)
}

/// Distinct `segment == '<literal>'` values in `path`.
pub fn extract_segments(path: &str) -> TokenSet {
    SEGMENT.literals(path)
}

/// Whether `path` filters on `culture == null`.
pub fn contains_invariant_culture_filter(path: &str) -> bool {
    CULTURE.has_null(path)
}

/// Whether `path` filters on `segment == null`.
pub fn contains_null_segment_filter(path: &str) -> bool {
    SEGMENT.has_null(path)
}

/// Union of [`extract_cultures`] over `paths`.
pub fn extract_cultures_from_operations<I, S>(paths: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = TokenSet::new();
    for path in paths {
        collect_cultures_into(path.as_ref(), &mut out);
    }
    out
}

/// Union of [`extract_segments`] over `paths`.
pub fn extract_segments_from_operations<I, S>(paths: I) -> TokenSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = TokenSet::new();
    for path in paths {
        SEGMENT.collect_into(path.as_ref(), &mut out);
    }
    out
}

/// Whether any path in `paths` filters on `culture == null`.
pub fn any_operation_targets_invariant_culture<I, S>(paths: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .any(|path| contains_invariant_culture_filter(path.as_ref()))
}

/// Whether any path in `paths` filters on `segment == null`.
pub fn any_operation_targets_null_segment<I, S>(paths: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .any(|path| contains_null_segment_filter(path.as_ref()))
}
