use honggfuzz::fuzz;
use primegram::{fingerprint, AnagramError};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(word) = std::str::from_utf8(data) else {
                return;
            };
            match fingerprint(word) {
                Ok(fp) => {
                    assert!(word.chars().all(|c| c.is_ascii_lowercase()));
                    let mut rev: Vec<char> = word.chars().collect();
                    rev.reverse();
                    let rev: String = rev.into_iter().collect();
                    assert_eq!(fingerprint(&rev).ok(), Some(fp));
                }
                Err(AnagramError::InvalidCharacter { ch, .. }) => {
                    assert!(!ch.is_ascii_lowercase());
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        });
    }
}
