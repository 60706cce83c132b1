use clap::ValueEnum;

use crate::AnagramError;

/// What `build_index` does with a word that cannot be fingerprinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InvalidWordPolicy {
    /// Stop indexing and return the `InvalidCharacter` error.
    #[default]
    Abort,
    /// Drop the word and keep going. Skipped words are counted on the index.
    Skip,
}

/// Letter comparison used once both words pass the top-level checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Product of per-letter primes.
    #[default]
    Prime,
    /// Per-letter occurrence counts.
    LetterCount,
    /// Sorted letter sequences.
    Sorted,
    /// Check off each letter against the other word.
    Elimination,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Prime,
        Strategy::LetterCount,
        Strategy::Sorted,
        Strategy::Elimination,
    ];
}

/// Runtime configuration for dictionaries, indexing and pair checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Shortest word accepted into a `WordList`.
    pub min_word_len: usize,
    /// Longest word accepted into a `WordList`.
    pub max_word_len: usize,
    /// Handling of unfingerprintable words while indexing.
    pub invalid_word_policy: InvalidWordPolicy,
    /// Comparator used by `PairChecker::from_config`.
    pub strategy: Strategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_word_len: 2,
            max_word_len: 7,
            invalid_word_policy: InvalidWordPolicy::Abort,
            strategy: Strategy::Prime,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), AnagramError> {
        if self.min_word_len == 0 {
            return Err(AnagramError::Config("min_word_len must be at least 1".into()));
        }
        if self.min_word_len > self.max_word_len {
            return Err(AnagramError::Config(format!(
                "min_word_len {} exceeds max_word_len {}",
                self.min_word_len, self.max_word_len
            )));
        }
        Ok(())
    }

    /// Whether a word of `len` characters falls inside the configured bounds.
    pub fn accepts_len(&self, len: usize) -> bool {
        (self.min_word_len..=self.max_word_len).contains(&len)
    }
}
