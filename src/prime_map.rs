//! Fixed letter-to-prime table used by the fingerprint.
//!
//! Letter `a` maps to the first prime, `b` to the second and so on up to `z`.
//! The table is a compile-time constant and is never written.

/// Number of letters covered by the table.
pub const ALPHABET_LEN: usize = 26;

/// The first 26 primes, indexed by `letter - 'a'`.
pub const PRIMES: [u32; ALPHABET_LEN] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

/// Return the prime assigned to `ch`, or `None` when `ch` is not a lowercase
/// ASCII letter.
#[inline]
pub fn prime_for(ch: char) -> Option<u32> {
    if ch.is_ascii_lowercase() {
        Some(PRIMES[(ch as u8 - b'a') as usize])
    } else {
        None
    }
}

/// Iterate over `(letter, prime)` pairs in alphabetical order.
pub fn entries() -> impl Iterator<Item = (char, u32)> {
    ('a'..='z').zip(PRIMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_prime(n: u32) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn primes_are_distinct_and_increasing() {
        for pair in PRIMES.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
        assert!(PRIMES.iter().all(|&p| is_prime(p)));
    }

    #[test]
    fn table_is_the_first_26_primes() {
        let first: Vec<u32> = (2..).filter(|&n| is_prime(n)).take(ALPHABET_LEN).collect();
        assert_eq!(first, PRIMES.to_vec());
    }

    #[test]
    fn lookup_by_letter() {
        assert_eq!(prime_for('a'), Some(2));
        assert_eq!(prime_for('e'), Some(11));
        assert_eq!(prime_for('z'), Some(101));
        assert_eq!(prime_for('A'), None);
        assert_eq!(prime_for('\''), None);
        assert_eq!(prime_for('7'), None);
        assert_eq!(prime_for('é'), None);
    }

    #[test]
    fn entries_cover_alphabet() {
        let all: Vec<(char, u32)> = entries().collect();
        assert_eq!(all.len(), ALPHABET_LEN);
        assert_eq!(all[0], ('a', 2));
        assert_eq!(all[25], ('z', 101));
    }
}
