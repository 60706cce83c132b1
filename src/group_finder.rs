//! Representative word of the largest anagram group in a corpus.
//!
//! Ties between equally large groups go to the group whose first member
//! appears earliest in the corpus; its alphabetically first word is returned.
//! That is not necessarily the smallest word across all tied groups. Callers
//! who need that can use [`largest_groups`].

use crate::corpus_index::{build_index, AnagramGroup, CorpusIndex};
use crate::AnagramError;

/// Build an index over `corpus` and return the representative of its largest
/// group, or an empty string when no group has more than one member.
pub fn find_largest_group_representative<I, S>(corpus: I) -> Result<String, AnagramError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let index = build_index(corpus)?;
    Ok(representative_of(&index))
}

/// Representative of an already built index. Empty string means no anagrams.
pub fn representative_of(index: &CorpusIndex) -> String {
    let max_size = index.largest_group_size();
    if max_size <= 1 {
        return String::new();
    }
    index
        .groups()
        .find(|group| group.len() == max_size)
        .and_then(AnagramGroup::first_alphabetical)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Every group tied at the maximum size, in first-occurrence order. Empty when
/// no group has more than one member.
pub fn largest_groups(index: &CorpusIndex) -> Vec<&AnagramGroup> {
    let max_size = index.largest_group_size();
    if max_size <= 1 {
        return Vec::new();
    }
    index.groups().filter(|g| g.len() == max_size).collect()
}
