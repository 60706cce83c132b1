//! Order-independent numeric fingerprint of a word.
//!
//! The fingerprint is the product of the primes assigned to each letter, with
//! multiplicity. By unique factorisation two words share a fingerprint exactly
//! when one is a rearrangement of the other.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use serde::{Serialize, Serializer};

use crate::prime_map::prime_for;
use crate::AnagramError;

/// Product of the letter primes of a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(BigUint);

impl Fingerprint {
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// The fingerprint as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Fingerprint(BigUint::from(value))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Decimal string so JSON consumers never truncate large products.
impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Lowercase a word for comparison. Case never affects identity.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Compute the fingerprint of `word`.
///
/// The word must already be lowercase: every character has to be one of
/// `a..=z`, otherwise [`AnagramError::InvalidCharacter`] is returned. The
/// product is accumulated in a `u64` and spills into a [`BigUint`] once it
/// would overflow, so arbitrarily long words are exact. The empty word has
/// fingerprint `1`.
pub fn fingerprint(word: &str) -> Result<Fingerprint, AnagramError> {
    let mut small: u64 = 1;
    let mut big: Option<BigUint> = None;
    for ch in word.chars() {
        let prime = prime_for(ch).ok_or_else(|| AnagramError::InvalidCharacter {
            ch,
            word: word.to_string(),
        })? as u64;
        match small.checked_mul(prime) {
            Some(product) => small = product,
            None => {
                let acc = big.get_or_insert_with(BigUint::one);
                *acc *= small;
                small = prime;
            }
        }
    }
    let value = match big {
        Some(acc) => acc * small,
        None => BigUint::from(small),
    };
    Ok(Fingerprint(value))
}
