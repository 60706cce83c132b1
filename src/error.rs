use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    /// A character with no entry in the prime table.
    #[error("invalid character {ch:?} in word {word:?}")]
    InvalidCharacter { ch: char, word: String },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
