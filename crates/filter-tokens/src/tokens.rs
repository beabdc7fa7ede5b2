//! Case-insensitive set of filter literals.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Distinct literal values in first-seen order.
///
/// Values that differ only by case are one entry; the spelling of the first
/// occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    entries: IndexMap<String, String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if an entry equal up to case was already present.
    pub fn insert(&mut self, value: &str) -> bool {
        let key = value.to_lowercase();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, value.to_string());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(&value.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Add every entry of `other`, keeping existing spellings.
    pub fn merge(&mut self, other: TokenSet) {
        for (key, value) in other.entries {
            self.entries.entry(key).or_insert(value);
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.entries.into_values().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for value in iter {
            set.insert(value.as_ref());
        }
        set
    }
}

impl IntoIterator for TokenSet {
    type Item = String;
    type IntoIter = indexmap::map::IntoValues<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
