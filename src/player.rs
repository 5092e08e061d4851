//! Interactive solving state: a fill-in grid the shape of the solution,
//! per-cell correctness checks, and reveal/clear actions.
//!
//! Nothing here mutates the [`Layout`] it plays against; the layout is the
//! answer key and the player state owns only the user's letters.

use crate::grid::{Layout, Orientation};

/// Per-cell result of the last check pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCheck {
    Correct,
    Incorrect,
    Unchecked,
}

/// Outcome of a check pass over the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// Filled cells whose letter matches the solution.
    pub correct: usize,
    /// Cells the player has filled in.
    pub filled: usize,
    /// Open (non-blocked) cells in the grid.
    pub fillable: usize,
}

impl CheckReport {
    /// True when every open cell is filled in correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct == self.fillable && self.filled == self.fillable
    }
}

/// The player's fill grid and validation overlay for one layout.
#[derive(Debug, Clone)]
pub struct PlayerState {
    fill: Vec<Vec<Option<char>>>,
    validation: Vec<Vec<CellCheck>>,
}

impl PlayerState {
    /// A blank fill grid the shape of `layout`'s grid.
    #[must_use]
    pub fn new(layout: &Layout) -> PlayerState {
        let size = layout.size();
        PlayerState {
            fill: vec![vec![None; size]; size],
            validation: vec![vec![CellCheck::Unchecked; size]; size],
        }
    }

    /// The player's letter at `(row, col)`, if any.
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.fill.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Validation state of `(row, col)` from the last check pass.
    #[must_use]
    pub fn check_at(&self, row: usize, col: usize) -> CellCheck {
        self.validation
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(CellCheck::Unchecked)
    }

    /// Enter a letter into an open cell. Input is uppercased; writes to
    /// blocked or out-of-bounds cells are ignored.
    pub fn set_letter(&mut self, layout: &Layout, row: usize, col: usize, letter: char) {
        let open = layout
            .grid
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|cell| !cell.is_blocker);
        if open {
            self.fill[row][col] = Some(letter.to_ascii_uppercase());
        }
    }

    /// Erase the player's letter at `(row, col)`.
    pub fn clear_letter(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.fill.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = None;
        }
    }

    /// Compare every filled cell against the solution, updating the
    /// per-cell validation overlay, and report the counts.
    pub fn check(&mut self, layout: &Layout) -> CheckReport {
        let mut report = CheckReport { correct: 0, filled: 0, fillable: 0 };
        for (r, row) in layout.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_blocker {
                    self.validation[r][c] = CellCheck::Unchecked;
                    continue;
                }
                report.fillable += 1;
                let Some(entered) = self.fill[r][c] else {
                    self.validation[r][c] = CellCheck::Unchecked;
                    continue;
                };
                report.filled += 1;
                if cell.letter == Some(entered) {
                    report.correct += 1;
                    self.validation[r][c] = CellCheck::Correct;
                } else {
                    self.validation[r][c] = CellCheck::Incorrect;
                }
            }
        }
        report
    }

    /// Fill in the solution for the placed word with the given clue number
    /// and orientation. The orientation matters: the same number can start
    /// both an across and a down word.
    pub fn reveal_word(&mut self, layout: &Layout, number: u32, direction: Orientation) {
        let Some(placed) = layout
            .placed_words
            .iter()
            .find(|p| p.number == number && p.direction == direction)
        else {
            return;
        };
        for ((r, c), ch) in placed.cells().zip(placed.word.chars()) {
            self.fill[r][c] = Some(ch);
        }
    }

    /// Fill in the entire solution.
    pub fn reveal_all(&mut self, layout: &Layout) {
        for (r, row) in layout.grid.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                self.fill[r][c] = cell.letter;
            }
        }
    }

    /// Wipe all entered letters and validation state.
    pub fn clear(&mut self) {
        for row in &mut self.fill {
            row.fill(None);
        }
        for row in &mut self.validation {
            row.fill(CellCheck::Unchecked);
        }
    }
}
