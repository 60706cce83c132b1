use std::fmt;
use std::io;
use std::path::Path;

use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions for word list,
/// corpus and CSV files.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check the path. Corpus and dictionary files are plain text, one word per line.",
        PermissionDenied => "Check that the file is readable, or that the CSV target directory is writable.",
        InvalidData => "The file is not UTF-8 text. Re-save it as UTF-8 with one word per line.",
        WriteZero => "Nothing could be written to the CSV target. The disk may be full.",
        _ => "Check the path and try again.",
    };
    format!("Error {} '{}': {}. {}", operation, path.display(), err, suggestion)
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn anagram_cli_error(context: &str, err: crate::AnagramError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &crate::AnagramError) -> String {
    use crate::AnagramError::*;
    match err {
        InvalidCharacter { ch, word } => format!(
            "{ch:?} in {word:?} is not a lowercase letter. Use --skip-invalid to ignore such words."
        ),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
    }
}

/// Install the stderr log subscriber used by the binaries. `RUST_LOG`
/// overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
