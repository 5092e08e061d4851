//! Caller-side puzzle builder: validates word entries against the layout
//! engine's preconditions, applies the editor's two-word minimum, and maps
//! engine failures onto [`PuzzleError`].
//!
//! The engine in [`crate::layout`] deliberately never inspects its input
//! beyond placement; this module is where "letters only, length ≥ 2,
//! non-empty clue" is actually enforced.
//!
//! ```
//! use wordweave::puzzle::build_puzzle;
//! use wordweave::word::WordEntry;
//!
//! let words = vec![
//!     WordEntry::new("CAT", "feline"),
//!     WordEntry::new("CAR", "vehicle"),
//! ];
//! let layout = build_puzzle(&words, 20)?;
//! assert_eq!(layout.placed_words.len(), 2);
//! # Ok::<(), wordweave::errors::PuzzleError>(())
//! ```

use log::info;

use crate::errors::PuzzleError;
use crate::grid::Layout;
use crate::layout::generate_layout;
use crate::word::{WordEntry, MIN_WORD_LEN};

/// Default grid side length, matching the original editor.
pub const DEFAULT_MAX_DIM: usize = 20;

/// Check a single entry against the engine's preconditions.
///
/// # Errors
///
/// Returns [`PuzzleError::InvalidWord`] for words that are too short or not
/// letters-only, and [`PuzzleError::EmptyClue`] for blank clues.
pub fn validate_entry(entry: &WordEntry) -> Result<(), PuzzleError> {
    let ok = entry.len() >= MIN_WORD_LEN && entry.word.chars().all(|c| c.is_ascii_uppercase());
    if !ok {
        return Err(PuzzleError::InvalidWord { word: entry.word.clone() });
    }
    if entry.clue.trim().is_empty() {
        return Err(PuzzleError::EmptyClue { word: entry.word.clone() });
    }
    Ok(())
}

/// Validate `words` and run the layout engine.
///
/// Requires at least two usable words — a crossword with fewer cannot
/// intersect. (The engine itself tolerates a single word; callers that
/// want that behavior can invoke [`generate_layout`] directly.)
///
/// # Errors
///
/// - [`PuzzleError::EmptyWordList`] / [`PuzzleError::TooFewWords`] when the
///   input is too small.
/// - [`PuzzleError::InvalidWord`] / [`PuzzleError::EmptyClue`] when an
///   entry violates the engine's preconditions.
/// - [`PuzzleError::LayoutFailed`] when the engine places nothing.
pub fn build_puzzle(words: &[WordEntry], max_dim: usize) -> Result<Layout, PuzzleError> {
    if words.is_empty() {
        return Err(PuzzleError::EmptyWordList);
    }
    if words.len() < 2 {
        return Err(PuzzleError::TooFewWords { count: words.len() });
    }
    for entry in words {
        validate_entry(entry)?;
    }

    let layout = generate_layout(words, max_dim).ok_or(PuzzleError::LayoutFailed)?;
    info!(
        "placed {} of {} words on a {}x{} grid",
        layout.placed_words.len(),
        words.len(),
        max_dim,
        max_dim
    );
    Ok(layout)
}
