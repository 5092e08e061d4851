//! `word` — Word/clue input handling for the layout engine.
//!
//! This module owns the one precondition the engine itself never checks:
//! a [`WordEntry`] handed to the layout engine must be uppercase A–Z only,
//! at least two letters long, with a non-empty clue. Everything that feeds
//! the engine — manual entry, a word-list file, an external suggestion
//! service — goes through [`sanitize_word`] first.
//!
//! The word-list file format is one entry per line, `WORD;clue`:
//! - Lines without a semicolon are skipped silently.
//! - The word part is sanitized (accents folded, non-letters dropped,
//!   uppercased); entries that end up shorter than two letters are skipped.
//! - Input order is preserved, because the engine's stable length sort
//!   breaks ties by input order and layouts must stay reproducible.
//! - Duplicate words keep the first occurrence.

use serde::{Deserialize, Serialize};

/// Minimum word length accepted after sanitization.
pub const MIN_WORD_LEN: usize = 2;

/// One word/clue pair, ready for the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Uppercase A–Z letters only, length ≥ 2.
    pub word: String,
    /// Non-empty display clue.
    pub clue: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> WordEntry {
        WordEntry { word: word.into(), clue: clue.into() }
    }

    /// Character count of the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

/// Fold a common accented Latin letter to its base letter, pass ASCII
/// letters through, and map everything else to `None`.
fn fold_letter(c: char) -> Option<char> {
    if c.is_ascii_alphabetic() {
        return Some(c.to_ascii_uppercase());
    }
    let folded = match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'é' | 'è' | 'ê' | 'ë' | 'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'í' | 'ì' | 'î' | 'ï' | 'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' | 'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ú' | 'ù' | 'û' | 'ü' | 'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'ç' | 'Ç' => 'C',
        'ñ' | 'Ñ' => 'N',
        'ý' | 'ÿ' | 'Ý' => 'Y',
        _ => return None,
    };
    Some(folded)
}

/// Normalize a raw word to the engine's input alphabet: accents folded to
/// their base letters, anything that still isn't a letter dropped, result
/// uppercased. Returns an empty string if nothing survives.
#[must_use]
pub fn sanitize_word(raw: &str) -> String {
    raw.chars().filter_map(fold_letter).collect()
}

/// A parsed, sanitized word list in input order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub entries: Vec<WordEntry>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string.
    ///
    /// Each line should be `WORD;clue`. Invalid lines (no semicolon, blank
    /// clue, word shorter than two letters after sanitization) are skipped
    /// silently, as are duplicate words.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut entries: Vec<WordEntry> = Vec::new();
        for raw_line in contents.lines() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let Some((word_raw, clue_raw)) = line.split_once(';') else {
                continue;
            };
            let word = sanitize_word(word_raw);
            let clue = clue_raw.trim();
            if word.len() < MIN_WORD_LEN || clue.is_empty() {
                continue;
            }
            // First occurrence wins; input order is significant downstream.
            if entries.iter().any(|e| e.word == word) {
                continue;
            }
            entries.push(WordEntry::new(word, clue));
        }
        WordList { entries }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file at `path` cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data))
    }
}
