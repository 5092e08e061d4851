//! Core data model for a laid-out crossword grid.
//!
//! The serde field names deliberately match the JSON the save files use
//! (`char`, `isBlocker`, `number`, `placedWords`, `direction: "across"`),
//! so a serialized [`Layout`] is directly interchangeable with the save
//! format in [`crate::save`].

use serde::{Deserialize, Serialize};

use crate::word::WordEntry;

/// Placement axis of a word: left-to-right or top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    /// The perpendicular axis.
    #[must_use]
    pub fn crossed(self) -> Orientation {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// The cell `i` steps along this axis from `(row, col)`.
    #[must_use]
    pub fn cell_at(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Across => (row, col + i),
            Orientation::Down => (row + i, col),
        }
    }
}

/// One grid position.
///
/// Invariants (established by the layout engine):
/// - `is_blocker` is true exactly when no placed word covers the cell.
/// - `number` is set exactly when the cell starts at least one placed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// The solution letter, or `None` while the cell is empty.
    #[serde(rename = "char")]
    pub letter: Option<char>,
    pub is_blocker: bool,
    /// Clue number if a word starts here.
    pub number: Option<u32>,
}

impl Cell {
    pub(crate) fn blank() -> Cell {
        Cell { letter: None, is_blocker: false, number: None }
    }
}

/// A word bound to a location on the grid.
///
/// Invariant: `number` equals the `number` of the cell at `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    pub direction: Orientation,
    pub number: u32,
}

impl PlacedWord {
    /// The grid cells this word covers, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.word.chars().count();
        (0..len).map(move |i| self.direction.cell_at(self.row, self.col, i))
    }
}

/// One display record per distinct (number, orientation) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    pub text: String,
    pub word: String,
}

/// Across and down clue lists, each sorted ascending by number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSet {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

/// The finished product of one layout run: a square grid plus the clue
/// lists and placement records derived from it. Immutable once returned;
/// the renderer, player state, exporter and save file all consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Square grid, side length = the `max_dim` the engine was called with.
    pub grid: Vec<Vec<Cell>>,
    pub clues: ClueSet,
    pub placed_words: Vec<PlacedWord>,
    /// Words that could not be fit. Absent from the serialized form when
    /// empty so fully-placed saves keep the original file shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<WordEntry>,
}

impl Layout {
    /// Side length of the (square) grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_crossed() {
        assert_eq!(Orientation::Across.crossed(), Orientation::Down);
        assert_eq!(Orientation::Down.crossed(), Orientation::Across);
    }

    #[test]
    fn test_cell_at_walks_the_right_axis() {
        assert_eq!(Orientation::Across.cell_at(3, 4, 2), (3, 6));
        assert_eq!(Orientation::Down.cell_at(3, 4, 2), (5, 4));
    }

    #[test]
    fn test_placed_word_cells() {
        let p = PlacedWord {
            word: "CAT".to_string(),
            clue: "feline".to_string(),
            row: 1,
            col: 2,
            direction: Orientation::Down,
            number: 1,
        };
        let cells: Vec<_> = p.cells().collect();
        assert_eq!(cells, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_cell_serde_field_names() {
        let cell = Cell { letter: Some('A'), is_blocker: false, number: Some(3) };
        let json = serde_json::to_string(&cell).unwrap();
        assert!(json.contains("\"char\":\"A\""));
        assert!(json.contains("\"isBlocker\":false"));
        assert!(json.contains("\"number\":3"));
    }

    #[test]
    fn test_orientation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Orientation::Across).unwrap(), "\"across\"");
        assert_eq!(serde_json::to_string(&Orientation::Down).unwrap(), "\"down\"");
    }
}
