use honggfuzz::fuzz;
use primegram::{build_index_with, representative_of, InvalidWordPolicy};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = String::from_utf8_lossy(data);
            let words: Vec<&str> = text.split_whitespace().collect();
            let index = build_index_with(&words, InvalidWordPolicy::Skip).unwrap();
            assert_eq!(index.word_count() + index.skipped().len(), words.len());
            let rep = representative_of(&index);
            if !rep.is_empty() {
                let group = index.group_of(&rep).unwrap().unwrap();
                assert_eq!(group.len(), index.largest_group_size());
            }
        });
    }
}
