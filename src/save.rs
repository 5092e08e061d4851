//! Save/load of a complete game as a flat, human-readable JSON record.
//!
//! The file holds `{ theme, words, gridData }` exactly as the editor last
//! saw them: the raw word list (so the user can keep editing after a load)
//! and the finished layout (so the loaded grid is identical to the saved
//! one rather than re-generated). Loading validates the structure before
//! accepting it — `words` must be an array and `gridData.grid` a non-empty
//! square grid — and otherwise restores the record verbatim.

use serde::{Deserialize, Serialize};

use crate::errors::PuzzleError;
use crate::grid::Layout;
use crate::word::WordEntry;

/// A saved game: theme, editable word list, and the laid-out grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub theme: String,
    pub words: Vec<WordEntry>,
    pub grid_data: Layout,
}

impl SavedGame {
    pub fn new(theme: impl Into<String>, words: Vec<WordEntry>, grid_data: Layout) -> SavedGame {
        SavedGame { theme: theme.into(), words, grid_data }
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::JsonError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PuzzleError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a saved game from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::JsonError`] for malformed JSON and
    /// [`PuzzleError::InvalidSaveFile`] when the structure parses but fails
    /// validation (empty or non-square grid).
    pub fn from_json(text: &str) -> Result<SavedGame, PuzzleError> {
        let game: SavedGame = serde_json::from_str(text)?;
        game.validate()?;
        Ok(game)
    }

    fn validate(&self) -> Result<(), PuzzleError> {
        let grid = &self.grid_data.grid;
        if grid.is_empty() {
            return Err(PuzzleError::InvalidSaveFile { reason: "gridData.grid is empty".to_string() });
        }
        let size = grid.len();
        if grid.iter().any(|row| row.len() != size) {
            return Err(PuzzleError::InvalidSaveFile {
                reason: format!("gridData.grid is not square ({size} rows)"),
            });
        }
        Ok(())
    }

    /// Write the saved game to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save_to_path<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
    }

    /// Read and validate a saved game from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails structural validation.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<SavedGame> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read save file '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::from_json(&data)?)
    }
}
