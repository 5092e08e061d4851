//! The layout engine: arranges an unordered set of word/clue pairs into a
//! numbered, intersecting crossword grid.
//!
//! The engine is a pure function over its inputs. Each invocation allocates
//! a fresh `max_dim` × `max_dim` grid, places what it can, and returns an
//! immutable [`Layout`]; nothing survives across calls and concurrent
//! invocations share no state.
//!
//! # Algorithm
//!
//! 1. Sort the words by descending length (stable, so equal-length words
//!    keep their input order). Longer words anchor the grid more reliably.
//! 2. Place the first word horizontally, centered on the grid.
//! 3. For each further word, enumerate every (new-word char, placed word,
//!    placed-word char) pair with matching letters, compute the
//!    perpendicular placement that makes the letters coincide, and keep the
//!    valid candidate with the highest fit score (count of cells already
//!    holding the right letter). Ties go to the first candidate found, so
//!    layouts are reproducible.
//! 4. Words with no valid candidate are dropped; they are reported in
//!    [`Layout::dropped`] but do not fail the run unless nothing at all
//!    could be placed.
//! 5. Letterless cells become blockers, start cells are numbered in
//!    row-major order, and the across/down clue lists are derived from the
//!    placements.
//!
//! # Example
//!
//! ```
//! use wordweave::layout::generate_layout;
//! use wordweave::word::WordEntry;
//!
//! let words = vec![
//!     WordEntry::new("SATURNO", "Ringed planet"),
//!     WordEntry::new("JUPITER", "Largest planet"),
//! ];
//! let layout = generate_layout(&words, 20).expect("two crossing words fit");
//! assert_eq!(layout.grid.len(), 20);
//! assert_eq!(layout.placed_words.len(), 2);
//! assert!(layout.dropped.is_empty());
//! ```

use std::collections::HashMap;

use log::{debug, warn};

use crate::grid::{Cell, Clue, ClueSet, Layout, Orientation, PlacedWord};
use crate::word::WordEntry;

/// A committed placement before clue numbers exist.
struct Placement {
    word: String,
    clue: String,
    row: usize,
    col: usize,
    direction: Orientation,
}

/// A candidate position for a word under evaluation.
struct Candidate {
    row: usize,
    col: usize,
    direction: Orientation,
    score: usize,
}

/// Lay out `words` on a square grid of side `max_dim`.
///
/// Returns `None` if `words` is empty, `max_dim` is zero, or no word could
/// be placed at all. Words that fail to intersect anything placeable are
/// excluded from the result (and listed in [`Layout::dropped`]) without
/// failing the run.
#[must_use]
pub fn generate_layout(words: &[WordEntry], max_dim: usize) -> Option<Layout> {
    if words.is_empty() || max_dim == 0 {
        return None;
    }

    let mut grid = vec![vec![Cell::blank(); max_dim]; max_dim];
    let mut placements: Vec<Placement> = Vec::new();
    let mut dropped: Vec<WordEntry> = Vec::new();

    // Stable sort: equal lengths keep input order, which keeps the
    // first-found tie-break (and therefore the whole layout) reproducible.
    let mut sorted: Vec<&WordEntry> = words.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    for entry in sorted {
        let best = if placements.is_empty() {
            anchor_candidate(entry, &grid)
        } else {
            best_crossing_candidate(entry, &placements, &grid)
        };

        match best {
            Some(candidate) => commit(entry, &candidate, &mut grid, &mut placements),
            None => {
                debug!("no valid position for \"{}\", dropping it", entry.word);
                dropped.push(entry.clone());
            }
        }
    }

    if placements.len() * 10 < words.len() * 7 {
        warn!(
            "could only place {} of {} words; the grid may be sparse",
            placements.len(),
            words.len()
        );
    }
    if placements.is_empty() {
        return None;
    }

    let (clues, placed_words) = assign_numbers_and_clues(&mut grid, placements);
    finalize(&mut grid);

    Some(Layout { grid, clues, placed_words, dropped })
}

/// Centered horizontal position for the first word, if it fits.
fn anchor_candidate(entry: &WordEntry, grid: &[Vec<Cell>]) -> Option<Candidate> {
    let size = grid.len();
    let len = entry.len();
    if len > size {
        return None;
    }
    let row = size / 2;
    let col = (size - len) / 2;
    if can_place(&entry.word, row, col, Orientation::Across, grid) {
        Some(Candidate { row, col, direction: Orientation::Across, score: 0 })
    } else {
        None
    }
}

/// Enumerate every matching-letter crossing with the already-placed words
/// and return the valid candidate with the highest fit score.
///
/// Enumeration order is new-word char index, then placed-word index, then
/// placed-word char index; a later candidate replaces the best only on a
/// strictly higher score, so the first-found candidate wins ties.
fn best_crossing_candidate(
    entry: &WordEntry,
    placements: &[Placement],
    grid: &[Vec<Cell>],
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (i, ch) in entry.word.chars().enumerate() {
        for placed in placements {
            for (j, placed_ch) in placed.word.chars().enumerate() {
                if placed_ch != ch {
                    continue;
                }
                let direction = placed.direction.crossed();
                // Line the matching letters up; the start may fall off the
                // top/left edge, which rules the candidate out.
                let (row, col) = match direction {
                    Orientation::Across => {
                        (placed.row as i64 + j as i64, placed.col as i64 - i as i64)
                    }
                    Orientation::Down => {
                        (placed.row as i64 - i as i64, placed.col as i64 + j as i64)
                    }
                };
                let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
                    continue;
                };
                if !can_place(&entry.word, row, col, direction, grid) {
                    continue;
                }
                let score = fit_score(&entry.word, row, col, direction, grid);
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Candidate { row, col, direction, score });
                }
            }
        }
    }

    best
}

/// Validity rules for placing `word` at `(row, col)` in `direction`:
///
/// - the word lies fully within grid bounds;
/// - every covered cell either holds the matching letter already, or is
///   empty with both cells perpendicular to the word's axis also empty
///   (so the word cannot run flush alongside an unrelated word);
/// - the cells immediately before the start and after the end are empty or
///   out of bounds (so two same-axis words cannot abut end-to-start).
fn can_place(word: &str, row: usize, col: usize, direction: Orientation, grid: &[Vec<Cell>]) -> bool {
    let size = grid.len();
    let len = word.chars().count();

    let in_bounds = match direction {
        Orientation::Across => row < size && col + len <= size,
        Orientation::Down => col < size && row + len <= size,
    };
    if !in_bounds {
        return false;
    }

    for (i, ch) in word.chars().enumerate() {
        let (r, c) = direction.cell_at(row, col, i);
        match grid[r][c].letter {
            Some(existing) => {
                if existing != ch {
                    return false;
                }
            }
            None => {
                let side_occupied = match direction {
                    Orientation::Across => {
                        (r > 0 && grid[r - 1][c].letter.is_some())
                            || (r + 1 < size && grid[r + 1][c].letter.is_some())
                    }
                    Orientation::Down => {
                        (c > 0 && grid[r][c - 1].letter.is_some())
                            || (c + 1 < size && grid[r][c + 1].letter.is_some())
                    }
                };
                if side_occupied {
                    return false;
                }
            }
        }
    }

    let caps_occupied = match direction {
        Orientation::Across => {
            (col > 0 && grid[row][col - 1].letter.is_some())
                || (col + len < size && grid[row][col + len].letter.is_some())
        }
        Orientation::Down => {
            (row > 0 && grid[row - 1][col].letter.is_some())
                || (row + len < size && grid[row + len][col].letter.is_some())
        }
    };
    !caps_occupied
}

/// Count of covered cells whose letter already matches — the placement
/// selection criterion (tighter overlap scores higher).
fn fit_score(word: &str, row: usize, col: usize, direction: Orientation, grid: &[Vec<Cell>]) -> usize {
    word.chars()
        .enumerate()
        .filter(|&(i, ch)| {
            let (r, c) = direction.cell_at(row, col, i);
            grid[r][c].letter == Some(ch)
        })
        .count()
}

/// Write the word's letters into the grid and record the placement.
fn commit(entry: &WordEntry, candidate: &Candidate, grid: &mut [Vec<Cell>], placements: &mut Vec<Placement>) {
    for (i, ch) in entry.word.chars().enumerate() {
        let (r, c) = candidate.direction.cell_at(candidate.row, candidate.col, i);
        grid[r][c].letter = Some(ch);
    }
    placements.push(Placement {
        word: entry.word.clone(),
        clue: entry.clue.clone(),
        row: candidate.row,
        col: candidate.col,
        direction: candidate.direction,
    });
}

/// Number the start cells in row-major order (a cell starting both an
/// across and a down word gets one shared number) and derive the sorted,
/// deduplicated clue lists.
fn assign_numbers_and_clues(grid: &mut [Vec<Cell>], placements: Vec<Placement>) -> (ClueSet, Vec<PlacedWord>) {
    let mut starts: Vec<(usize, usize)> = Vec::new();
    for p in &placements {
        if !starts.contains(&(p.row, p.col)) {
            starts.push((p.row, p.col));
        }
    }
    starts.sort_unstable();

    let mut start_numbers: HashMap<(usize, usize), u32> = HashMap::new();
    for (idx, &(r, c)) in starts.iter().enumerate() {
        let number = idx as u32 + 1;
        grid[r][c].number = Some(number);
        start_numbers.insert((r, c), number);
    }

    let placed_words: Vec<PlacedWord> = placements
        .into_iter()
        .map(|p| {
            // Every placement start was numbered above.
            let number = start_numbers[&(p.row, p.col)];
            PlacedWord {
                word: p.word,
                clue: p.clue,
                row: p.row,
                col: p.col,
                direction: p.direction,
                number,
            }
        })
        .collect();

    let mut clues = ClueSet::default();
    for p in &placed_words {
        let clue = Clue { number: p.number, text: p.clue.clone(), word: p.word.clone() };
        match p.direction {
            Orientation::Across => clues.across.push(clue),
            Orientation::Down => clues.down.push(clue),
        }
    }
    clues.across.sort_by_key(|c| c.number);
    clues.down.sort_by_key(|c| c.number);
    // A number can appear at most once per orientation.
    clues.across.dedup_by_key(|c| c.number);
    clues.down.dedup_by_key(|c| c.number);

    (clues, placed_words)
}

/// Every cell no placed word ever occupied becomes a blocker.
fn finalize(grid: &mut [Vec<Cell>]) {
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            if cell.letter.is_none() {
                cell.is_blocker = true;
            }
        }
    }
}
