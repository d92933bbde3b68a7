//! Class name composition.
//!
//! Fragments are joined in order and merged with Tailwind conflict
//! resolution: a later utility replaces an earlier one from the same group,
//! and duplicates collapse.

use tw_merge::tw_merge;

/// Merge class fragments into a single class list. Empty fragments are skipped.
pub fn compose<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = fragments
        .into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        return joined;
    }
    tw_merge!(joined)
}
