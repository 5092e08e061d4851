//! Error types for puzzle building and persistence, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E007) for documentation lookup:
//!
//! - E001: `EmptyWordList` (No usable words submitted)
//! - E002: `TooFewWords` (Fewer than two usable words)
//! - E003: `LayoutFailed` (No word could be placed on the grid)
//! - E004: `InvalidWord` (Word is not letters-only / long enough)
//! - E005: `EmptyClue` (Word submitted without a clue)
//! - E006: `InvalidSaveFile` (Save file fails structural validation)
//! - E007: `JsonError` (Underlying JSON (de)serialization failure)
//!
//! # Examples
//!
//! ```
//! use wordweave::errors::PuzzleError;
//!
//! let err = PuzzleError::TooFewWords { count: 1 };
//! println!("Error: {}", err);
//! println!("Code: {}", err.code());
//! if let Some(help) = err.help() {
//!     println!("Help: {}", help);
//! }
//! ```

use std::io;

/// Custom error type for puzzle construction and save/load operations.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("no usable words submitted")]
    EmptyWordList,

    #[error("need at least 2 words to build a crossword, got {count}")]
    TooFewWords { count: usize },

    #[error("could not place any of the submitted words on the grid")]
    LayoutFailed,

    #[error("invalid word \"{word}\" (must be at least 2 letters, A-Z only)")]
    InvalidWord { word: String },

    #[error("word \"{word}\" has an empty clue")]
    EmptyClue { word: String },

    #[error("invalid save file: {reason}")]
    InvalidSaveFile { reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyWordList => "E001",
            PuzzleError::TooFewWords { .. } => "E002",
            PuzzleError::LayoutFailed => "E003",
            PuzzleError::InvalidWord { .. } => "E004",
            PuzzleError::EmptyClue { .. } => "E005",
            PuzzleError::InvalidSaveFile { .. } => "E006",
            PuzzleError::JsonError(_) => "E007",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyWordList => Some("Add word/clue pairs before generating (e.g., 'CAT;feline')"),
            PuzzleError::TooFewWords { .. } => Some("A crossword needs at least two intersecting words"),
            PuzzleError::LayoutFailed => Some("Words must share letters to intersect; try words with common letters or a larger grid"),
            PuzzleError::InvalidWord { .. } => Some("Words must be at least 2 letters and contain only letters (accents are folded automatically)"),
            PuzzleError::EmptyClue { .. } => Some("Every word needs a non-empty clue"),
            PuzzleError::InvalidSaveFile { .. } => Some("Expected a JSON object with 'theme', 'words' and 'gridData' as produced by --save"),
            PuzzleError::JsonError(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
