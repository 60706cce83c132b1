//! Prime-product anagram fingerprints, pair checks and corpus grouping.
//!
//! Each letter `a..=z` maps to a distinct prime. The product of a word's
//! letter primes is its [`Fingerprint`]; two words are anagrams exactly when
//! their fingerprints are equal. [`is_anagram`] checks a pair against a
//! dictionary, [`build_index`] groups a corpus by fingerprint in one pass and
//! [`find_largest_group_representative`] picks a word from the biggest group.

pub mod checker;
pub mod comparator;
pub mod config;
pub mod corpus_index;
pub mod dictionary;
mod error;
pub mod fingerprint;
pub mod group_finder;
pub mod io_utils;
pub mod prime_map;
pub mod stats;

pub use checker::{is_anagram, top_level_check, PairCheck, PairChecker};
pub use comparator::{
    AnagramComparator, EliminationComparator, LetterCountComparator, PrimeComparator,
    SortedComparator,
};
pub use config::{Config, InvalidWordPolicy, Strategy};
pub use corpus_index::{
    build_index, build_index_from_config, build_index_with, AnagramGroup, CorpusIndex,
};
pub use dictionary::{WordList, WordOracle};
pub use error::AnagramError;
pub use fingerprint::{fingerprint, normalize, Fingerprint};
pub use group_finder::{find_largest_group_representative, largest_groups, representative_of};
pub use stats::IndexStats;
