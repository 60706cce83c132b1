//! Fingerprint-keyed grouping of a word corpus.
//!
//! One linear pass over the corpus: each word is fingerprinted and appended
//! to the group for that fingerprint. Groups keep first-occurrence order and
//! words inside a group keep corpus order. Nothing is normalized or filtered
//! here; an uppercase or non-alphabetic word is an `InvalidCharacter` unless
//! the [`InvalidWordPolicy::Skip`] policy is selected.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::fingerprint::{fingerprint, Fingerprint};
use crate::{AnagramError, Config, InvalidWordPolicy};

/// Words of a corpus that share one fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    pub fingerprint: Fingerprint,
    words: Vec<String>,
}

impl AnagramGroup {
    fn new(fingerprint: Fingerprint) -> Self {
        Self {
            fingerprint,
            words: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Members in corpus order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Members sorted alphabetically.
    pub fn alphabetized(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.words.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    pub fn first_alphabetical(&self) -> Option<&str> {
        self.words.iter().map(String::as_str).min()
    }
}

/// Fingerprint to group mapping for one corpus snapshot.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    groups: Vec<AnagramGroup>,
    positions: HashMap<Fingerprint, usize>,
    skipped: Vec<String>,
}

/// Index `corpus`, aborting on the first word that cannot be fingerprinted.
pub fn build_index<I, S>(corpus: I) -> Result<CorpusIndex, AnagramError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_index_with(corpus, InvalidWordPolicy::Abort)
}

/// Index `corpus` using the invalid-word policy from `cfg`.
pub fn build_index_from_config<I, S>(corpus: I, cfg: &Config) -> Result<CorpusIndex, AnagramError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build_index_with(corpus, cfg.invalid_word_policy)
}

/// Index `corpus` with an explicit policy for unfingerprintable words.
pub fn build_index_with<I, S>(
    corpus: I,
    policy: InvalidWordPolicy,
) -> Result<CorpusIndex, AnagramError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index = CorpusIndex::default();
    for word in corpus {
        let word = word.as_ref();
        match index.insert(word) {
            Ok(()) => {}
            Err(err @ AnagramError::InvalidCharacter { .. })
                if policy == InvalidWordPolicy::Skip =>
            {
                warn!(word, error = %err, "skipping word");
                index.skipped.push(word.to_string());
            }
            Err(err) => return Err(err),
        }
    }
    debug!(
        words = index.word_count(),
        groups = index.len(),
        skipped = index.skipped.len(),
        "built corpus index"
    );
    Ok(index)
}

impl CorpusIndex {
    /// Append `word` to the group for its fingerprint.
    pub fn insert(&mut self, word: &str) -> Result<(), AnagramError> {
        let fp = fingerprint(word)?;
        let pos = match self.positions.get(&fp) {
            Some(&pos) => pos,
            None => {
                let pos = self.groups.len();
                self.groups.push(AnagramGroup::new(fp.clone()));
                self.positions.insert(fp, pos);
                pos
            }
        };
        self.groups[pos].words.push(word.to_string());
        Ok(())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of indexed words, duplicates included.
    pub fn word_count(&self) -> usize {
        self.groups.iter().map(AnagramGroup::len).sum()
    }

    /// Words dropped under [`InvalidWordPolicy::Skip`], in corpus order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    pub fn get(&self, fp: &Fingerprint) -> Option<&AnagramGroup> {
        self.positions.get(fp).map(|&pos| &self.groups[pos])
    }

    /// The group `word` would belong to. `word` need not be in the corpus.
    pub fn group_of(&self, word: &str) -> Result<Option<&AnagramGroup>, AnagramError> {
        Ok(self.get(&fingerprint(word)?))
    }

    /// Groups in first-occurrence order.
    pub fn groups(&self) -> impl Iterator<Item = &AnagramGroup> {
        self.groups.iter()
    }

    /// Size of the biggest group, 0 for an empty index.
    pub fn largest_group_size(&self) -> usize {
        self.groups.iter().map(AnagramGroup::len).max().unwrap_or(0)
    }
}
