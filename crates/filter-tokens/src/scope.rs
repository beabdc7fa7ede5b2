//! Which variants a batch of edits intends to touch.

use serde::Serialize;

use crate::{
    contains_invariant_culture_filter, contains_null_segment_filter, extract_cultures,
    extract_segments, TokenSet,
};

/// Variant footprint of one or more path strings, as seen by the token scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantScope {
    pub cultures: TokenSet,
    pub segments: TokenSet,
    /// Some path filters on `culture == null`.
    pub invariant_culture: bool,
    /// Some path filters on `segment == null`.
    pub null_segment: bool,
}

impl VariantScope {
    pub fn from_path(path: &str) -> Self {
        Self {
            cultures: extract_cultures(path),
            segments: extract_segments(path),
            invariant_culture: contains_invariant_culture_filter(path),
            null_segment: contains_null_segment_filter(path),
        }
    }

    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .fold(Self::default(), |mut acc, path| {
                acc.merge(Self::from_path(path.as_ref()));
                acc
            })
    }

    pub fn merge(&mut self, other: VariantScope) {
        self.cultures.merge(other.cultures);
        self.segments.merge(other.segments);
        self.invariant_culture |= other.invariant_culture;
        self.null_segment |= other.null_segment;
    }

    /// True when no culture or segment filter of any kind was found.
    pub fn is_unfiltered(&self) -> bool {
        self.cultures.is_empty()
            && self.segments.is_empty()
            && !self.invariant_culture
            && !self.null_segment
    }
}
