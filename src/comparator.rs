//! Interchangeable letter-multiset comparisons.
//!
//! Every comparator answers the same question for two already normalized
//! words: do they use exactly the same letters with the same multiplicity?
//! The top-level checks (length, dictionary, identity) live in
//! [`crate::checker`] and are shared by all of them.

use std::collections::HashMap;

use crate::config::Strategy;
use crate::fingerprint::fingerprint;

pub trait AnagramComparator {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Whether `a` and `b` are letter-multiset equal.
    fn same_letters(&self, a: &str, b: &str) -> bool;
}

/// Compares prime-product fingerprints. A word that cannot be fingerprinted
/// never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimeComparator;

impl AnagramComparator for PrimeComparator {
    fn name(&self) -> &'static str {
        "is_anagram_prime"
    }

    fn same_letters(&self, a: &str, b: &str) -> bool {
        match (fingerprint(a), fingerprint(b)) {
            (Ok(fa), Ok(fb)) => fa == fb,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LetterCountComparator;

fn letter_counts(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in word.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl AnagramComparator for LetterCountComparator {
    fn name(&self) -> &'static str {
        "is_anagram_lettercount"
    }

    fn same_letters(&self, a: &str, b: &str) -> bool {
        letter_counts(a) == letter_counts(b)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SortedComparator;

impl AnagramComparator for SortedComparator {
    fn name(&self) -> &'static str {
        "is_anagram_sort"
    }

    fn same_letters(&self, a: &str, b: &str) -> bool {
        let mut left: Vec<char> = a.chars().collect();
        let mut right: Vec<char> = b.chars().collect();
        left.sort_unstable();
        right.sort_unstable();
        left == right
    }
}

/// Checks off each letter of `a` against a working copy of `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EliminationComparator;

impl AnagramComparator for EliminationComparator {
    fn name(&self) -> &'static str {
        "is_anagram_checkoff"
    }

    fn same_letters(&self, a: &str, b: &str) -> bool {
        let mut remaining: Vec<Option<char>> = b.chars().map(Some).collect();
        for ch in a.chars() {
            match remaining.iter().position(|r| *r == Some(ch)) {
                Some(pos) => remaining[pos] = None,
                None => return false,
            }
        }
        remaining.iter().all(Option::is_none)
    }
}

impl Strategy {
    pub fn comparator(self) -> Box<dyn AnagramComparator> {
        match self {
            Strategy::Prime => Box::new(PrimeComparator),
            Strategy::LetterCount => Box::new(LetterCountComparator),
            Strategy::Sorted => Box::new(SortedComparator),
            Strategy::Elimination => Box::new(EliminationComparator),
        }
    }
}

impl<C: AnagramComparator + ?Sized> AnagramComparator for Box<C> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn same_letters(&self, a: &str, b: &str) -> bool {
        (**self).same_letters(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_strategy_agrees_on_basic_pairs() {
        let cases = [
            ("beast", "baste", true),
            ("listen", "silent", true),
            ("aab", "abb", false),
            ("abc", "abcd", false),
            ("", "", true),
        ];
        for strategy in Strategy::ALL {
            let cmp = strategy.comparator();
            for (a, b, expected) in cases {
                assert_eq!(
                    cmp.same_letters(a, b),
                    expected,
                    "{} on ({a}, {b})",
                    cmp.name()
                );
            }
        }
    }

    #[test]
    fn prime_rejects_unmapped_characters() {
        assert!(!PrimeComparator.same_letters("it's", "its'"));
        // The other strategies do not depend on the prime table.
        assert!(SortedComparator.same_letters("it's", "its'"));
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = Strategy::ALL
            .iter()
            .map(|s| s.comparator().name())
            .collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Strategy::ALL.len());
    }
}
