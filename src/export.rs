//! Document export: trims the grid to its used bounding box and renders
//! the puzzle (grid plus across/down clue tables) as printable text.

use std::fmt::Write;

use crate::grid::{Cell, Clue, Layout};

/// A grid trimmed to the bounding box of its open cells, with the offsets
/// back into the full grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactGrid {
    pub cells: Vec<Vec<Cell>>,
    pub row_offset: usize,
    pub col_offset: usize,
}

/// Trim uniformly blocked border rows and columns. A fully blocked grid
/// compacts to nothing.
#[must_use]
pub fn compact(grid: &[Vec<Cell>]) -> CompactGrid {
    let mut min_row = grid.len();
    let mut max_row = None;
    let mut min_col = grid.first().map_or(0, Vec::len);
    let mut max_col = 0;

    for (r, row) in grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_blocker {
                continue;
            }
            min_row = min_row.min(r);
            max_row = Some(max_row.map_or(r, |m: usize| m.max(r)));
            min_col = min_col.min(c);
            max_col = max_col.max(c);
        }
    }

    let Some(max_row) = max_row else {
        return CompactGrid { cells: Vec::new(), row_offset: 0, col_offset: 0 };
    };

    let cells = grid[min_row..=max_row]
        .iter()
        .map(|row| row[min_col..=max_col].to_vec())
        .collect();
    CompactGrid { cells, row_offset: min_row, col_offset: min_col }
}

fn render_clue_section(out: &mut String, heading: &str, clues: &[Clue]) {
    if clues.is_empty() {
        return;
    }
    let _ = writeln!(out, "{heading}:");
    for clue in clues {
        let _ = writeln!(out, "  {}. {}", clue.number, clue.text);
    }
}

/// Render the puzzle as plain text: a title, the compacted grid (blocked
/// cells solid, open cells blank or holding the solution letters), and the
/// numbered clue lists.
#[must_use]
pub fn render_puzzle(layout: &Layout, theme: &str, show_solution: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Crossword: {theme}");
    out.push('\n');

    let compacted = compact(&layout.grid);
    for row in &compacted.cells {
        for cell in row {
            let glyph = if cell.is_blocker {
                '#'
            } else if show_solution {
                cell.letter.unwrap_or('.')
            } else {
                '.'
            };
            out.push(glyph);
            out.push(' ');
        }
        // Drop the trailing space on each row.
        out.pop();
        out.push('\n');
    }
    out.push('\n');

    render_clue_section(&mut out, "Across", &layout.clues.across);
    render_clue_section(&mut out, "Down", &layout.clues.down);
    out
}
