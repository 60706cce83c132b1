use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use primegram::io_utils::{anagram_cli_error, init_tracing, io_cli_error, simple_cli_error};
use primegram::{
    build_index_from_config, representative_of, Config, IndexStats, InvalidWordPolicy,
    PairChecker, Strategy, WordList,
};
use serde_json::json;

#[derive(Parser)]
#[command(name = "primegram", version, about = "Prime-product anagram checks and grouping")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether two words are anagrams of each other
    Check {
        word1: String,
        word2: String,
        /// Comparison strategy
        #[arg(long, value_enum, default_value_t = Strategy::Prime)]
        strategy: Strategy,
        /// Run every strategy
        #[arg(long, conflicts_with = "strategy")]
        all: bool,
        /// Word list file, one word per line (defaults to the bundled list)
        #[arg(long)]
        dictionary: Option<PathBuf>,
        /// Shortest dictionary word
        #[arg(long, default_value_t = 2)]
        min_len: usize,
        /// Longest dictionary word
        #[arg(long, default_value_t = 7)]
        max_len: usize,
    },
    /// Print a word from the largest anagram group (empty line if none)
    Largest(CorpusArgs),
    /// Print every anagram group in first-occurrence order
    Groups {
        #[command(flatten)]
        corpus: CorpusArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Also write the groups to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CorpusArgs {
    /// Corpus file, one word per line
    file: Option<PathBuf>,
    /// Corpus words given inline (appended after the file)
    #[arg(long, num_args = 1..)]
    words: Vec<String>,
    /// Skip words that are not lowercase a-z instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

impl CorpusArgs {
    fn config(&self) -> Config {
        Config {
            invalid_word_policy: if self.skip_invalid {
                InvalidWordPolicy::Skip
            } else {
                InvalidWordPolicy::Abort
            },
            ..Config::default()
        }
    }

    fn load(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        if self.file.is_none() && self.words.is_empty() {
            return Err(simple_cli_error("Provide a corpus file or --words").into());
        }
        let mut corpus = Vec::new();
        if let Some(path) = &self.file {
            corpus.extend(read_lines(path)?);
        }
        corpus.extend(self.words.iter().cloned());
        Ok(corpus)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path).map_err(|e| io_cli_error("reading corpus", path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check {
            word1,
            word2,
            strategy,
            all,
            dictionary,
            min_len,
            max_len,
        } => {
            let cfg = Config {
                min_word_len: min_len,
                max_word_len: max_len,
                strategy,
                ..Config::default()
            };
            cfg.validate()
                .map_err(|e| anagram_cli_error("checking pair", e))?;
            let defaults = Config::default();
            let loaded;
            let dict: &WordList = match &dictionary {
                Some(path) => {
                    loaded = WordList::load(path, &cfg)
                        .map_err(|e| anagram_cli_error("loading dictionary", e))?;
                    &loaded
                }
                None if cfg.min_word_len == defaults.min_word_len
                    && cfg.max_word_len == defaults.max_word_len =>
                {
                    WordList::bundled()
                }
                None => {
                    loaded = WordList::from_words(WordList::bundled().iter(), &cfg);
                    &loaded
                }
            };
            let strategies = if all {
                Strategy::ALL.to_vec()
            } else {
                vec![cfg.strategy]
            };
            for strategy in strategies {
                let checker = PairChecker::new(dict, strategy.comparator());
                println!(
                    "{}- {}, {}: {}",
                    checker.strategy_name(),
                    word1,
                    word2,
                    checker.is_anagram(&word1, &word2)
                );
            }
        }
        Command::Largest(corpus) => {
            let words = corpus.load()?;
            let index = build_index_from_config(&words, &corpus.config())
                .map_err(|e| anagram_cli_error("indexing corpus", e))?;
            println!("{}", representative_of(&index));
        }
        Command::Groups { corpus, json, csv } => {
            let words = corpus.load()?;
            let index = build_index_from_config(&words, &corpus.config())
                .map_err(|e| anagram_cli_error("indexing corpus", e))?;
            let stats = IndexStats::from_index(&index);
            stats.report();

            if let Some(path) = &csv {
                let file = File::create(path).map_err(|e| io_cli_error("writing CSV", path, e))?;
                let mut wtr = csv::Writer::from_writer(file);
                wtr.write_record(["fingerprint", "size", "words"])?;
                for group in index.groups() {
                    wtr.write_record([
                        group.fingerprint.to_string(),
                        group.len().to_string(),
                        group.words().join(" "),
                    ])?;
                }
                wtr.flush()?;
            }

            if json {
                let groups: Vec<_> = index.groups().collect();
                let out = json!({
                    "groups": groups,
                    "representative": representative_of(&index),
                    "stats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for group in index.groups() {
                    println!("{}: {}", group.fingerprint, group.words().join(", "));
                }
            }
        }
    }
    Ok(())
}
