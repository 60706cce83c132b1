//! Word-validity oracle.
//!
//! The pair checker only asks one question of a dictionary: is this word in
//! it? [`WordOracle`] is that seam. [`WordList`] is the stock implementation,
//! restricted to alphabetic words inside the configured length bounds.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::info;

use crate::{AnagramError, Config};

/// Embedded wordlist, lowercase, one word per line, 2 to 7 letters.
static WORDS_DATA: &str = include_str!("../data/words.txt");

static BUNDLED: Lazy<WordList> =
    Lazy::new(|| WordList::from_words(WORDS_DATA.lines(), &Config::default()));

pub trait WordOracle {
    fn contains(&self, word: &str) -> bool;
}

impl<T: WordOracle + ?Sized> WordOracle for &T {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl WordOracle for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl WordOracle for HashSet<&str> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

/// Lowercase alphabetic words within a length range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: BTreeSet<String>,
}

impl WordList {
    /// The process-wide embedded list (2 to 7 letters).
    pub fn bundled() -> &'static WordList {
        &BUNDLED
    }

    /// Build a list from raw entries. Entries are trimmed and lowercased;
    /// blank lines, `#` comments, non-alphabetic entries and entries outside
    /// `cfg`'s length bounds are dropped.
    pub fn from_words<I, S>(words: I, cfg: &Config) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|raw| {
                let word = raw.as_ref().trim();
                if word.is_empty() || word.starts_with('#') {
                    return None;
                }
                let word = word.to_lowercase();
                let alphabetic = word.chars().all(|c| c.is_ascii_lowercase());
                (alphabetic && cfg.accepts_len(word.chars().count())).then_some(word)
            })
            .collect();
        Self { words }
    }

    /// Load a list from a file with one word per line.
    pub fn load<P: AsRef<Path>>(path: P, cfg: &Config) -> Result<Self, AnagramError> {
        cfg.validate()?;
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let list = Self::from_words(data.lines(), cfg);
        info!(
            path = %path.display(),
            words = list.len(),
            "loaded word list"
        );
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl WordOracle for WordList {
    /// Case-insensitive membership test.
    fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}
