//! `IndexStats` summarises a built index: word and group counts plus a
//! histogram of group sizes. Used by the CLI tools.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::info;

use crate::corpus_index::CorpusIndex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub total_words: usize,
    pub groups: usize,
    pub skipped_words: usize,
    pub largest_group: usize,
    /// Group size to number of groups of that size.
    pub size_histogram: BTreeMap<usize, usize>,
}

impl IndexStats {
    pub fn from_index(index: &CorpusIndex) -> Self {
        let mut size_histogram = BTreeMap::new();
        for group in index.groups() {
            *size_histogram.entry(group.len()).or_insert(0) += 1;
        }
        Self {
            total_words: index.word_count(),
            groups: index.len(),
            skipped_words: index.skipped().len(),
            largest_group: index.largest_group_size(),
            size_histogram,
        }
    }

    /// Groups with more than one member.
    pub fn anagram_groups(&self) -> usize {
        self.size_histogram
            .iter()
            .filter(|&(&size, _)| size > 1)
            .map(|(_, &count)| count)
            .sum()
    }

    pub fn report(&self) {
        info!(
            words = self.total_words,
            groups = self.groups,
            anagram_groups = self.anagram_groups(),
            largest = self.largest_group,
            skipped = self.skipped_words,
            "index summary"
        );
    }
}
