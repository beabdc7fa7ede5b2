//! Rayon-backed batch classification for large operation lists.

use rayon::prelude::*;

use crate::extract::collect_cultures_into;
use crate::{TokenSet, VariantScope};

/// Parallel [`crate::extract_cultures_from_operations`]; same result,
/// including which spelling survives case-folding.
pub fn par_extract_cultures_from_operations<S>(paths: &[S]) -> TokenSet
where
    S: AsRef<str> + Sync,
{
    paths
        .par_iter()
        .fold(TokenSet::new, |mut acc, path| {
            collect_cultures_into(path.as_ref(), &mut acc);
            acc
        })
        .reduce(TokenSet::new, |mut left, right| {
            left.merge(right);
            left
        })
}

impl VariantScope {
    /// Parallel [`VariantScope::from_paths`].
    pub fn par_from_paths<S>(paths: &[S]) -> Self
    where
        S: AsRef<str> + Sync,
    {
        paths
            .par_iter()
            .map(|path| VariantScope::from_path(path.as_ref()))
            .reduce(VariantScope::default, |mut left, right| {
                left.merge(right);
                left
            })
    }
}
