//! Pairwise anagram checks against a dictionary.
//!
//! A pair is only compared once it passes the top-level checks, in order:
//! same length, both words in the dictionary, words not identical. Every
//! failure reports "not a pair"; nothing here returns an error.

use crate::comparator::{AnagramComparator, PrimeComparator};
use crate::dictionary::WordOracle;
use crate::fingerprint::normalize;
use crate::Config;

/// Outcome of the top-level checks for a pair of words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairCheck {
    /// Both words passed; carries their lowercase forms.
    Candidate { left: String, right: String },
    /// The words have a different number of characters.
    LengthMismatch,
    /// This (normalized) word is not in the dictionary.
    NotInDictionary(String),
    /// Both words normalize to the same word.
    Identical,
}

impl PairCheck {
    pub fn is_candidate(&self) -> bool {
        matches!(self, PairCheck::Candidate { .. })
    }
}

/// Run the top-level checks shared by every comparison strategy.
pub fn top_level_check<O: WordOracle + ?Sized>(word1: &str, word2: &str, oracle: &O) -> PairCheck {
    let left = normalize(word1);
    let right = normalize(word2);

    if left.chars().count() != right.chars().count() {
        return PairCheck::LengthMismatch;
    }
    if !oracle.contains(&left) {
        return PairCheck::NotInDictionary(left);
    }
    if !oracle.contains(&right) {
        return PairCheck::NotInDictionary(right);
    }
    if left == right {
        return PairCheck::Identical;
    }
    PairCheck::Candidate { left, right }
}

/// Whether two words are anagrams, using the prime fingerprint.
pub fn is_anagram<O: WordOracle + ?Sized>(word1: &str, word2: &str, oracle: &O) -> bool {
    PairChecker::new(oracle, PrimeComparator).is_anagram(word1, word2)
}

/// A dictionary bound to a comparison strategy.
pub struct PairChecker<O, C> {
    oracle: O,
    comparator: C,
}

impl<O: WordOracle> PairChecker<O, Box<dyn AnagramComparator>> {
    /// Checker using the strategy named in `cfg`.
    pub fn from_config(oracle: O, cfg: &Config) -> Self {
        Self::new(oracle, cfg.strategy.comparator())
    }
}

impl<O: WordOracle, C: AnagramComparator> PairChecker<O, C> {
    pub fn new(oracle: O, comparator: C) -> Self {
        Self { oracle, comparator }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.comparator.name()
    }

    /// Top-level checks only. Use this to tell invalid input apart from a
    /// genuine non-anagram pair.
    pub fn check(&self, word1: &str, word2: &str) -> PairCheck {
        top_level_check(word1, word2, &self.oracle)
    }

    pub fn is_anagram(&self, word1: &str, word2: &str) -> bool {
        match self.check(word1, word2) {
            PairCheck::Candidate { left, right } => self.comparator.same_letters(&left, &right),
            _ => false,
        }
    }
}
