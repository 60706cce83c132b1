//! Prints the number of anagram groups of each size for a corpus file.
//! Words that cannot be fingerprinted are skipped and counted.

use std::{env, fs, path::Path};

use primegram::io_utils::{anagram_cli_error, init_tracing, io_cli_error, simple_cli_error};
use primegram::{build_index_with, representative_of, IndexStats, InvalidWordPolicy};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err(simple_cli_error(&format!("Usage: {} <corpus_file>", args[0])).into());
    }

    let path = Path::new(&args[1]);
    let text = fs::read_to_string(path).map_err(|e| io_cli_error("reading corpus", path, e))?;
    let words = text.lines().map(str::trim).filter(|w| !w.is_empty());
    let index = build_index_with(words, InvalidWordPolicy::Skip)
        .map_err(|e| anagram_cli_error("indexing corpus", e))?;
    let stats = IndexStats::from_index(&index);

    for (size, count) in &stats.size_histogram {
        println!("{size}-word groups: {count}");
    }
    println!("Total words: {}", stats.total_words);
    println!("Skipped words: {}", stats.skipped_words);
    println!("Largest group representative: {}", representative_of(&index));

    Ok(())
}
