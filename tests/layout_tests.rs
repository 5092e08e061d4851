//! Integration tests for the crossword layout pipeline.
//!
//! These exercise the engine's structural guarantees (grid shape, placement
//! consistency, numbering, word separation) over realistic word lists, the
//! caller-side validation policy, and the save/load round trip.

use std::collections::{HashMap, HashSet};

use wordweave::errors::PuzzleError;
use wordweave::grid::{Layout, Orientation};
use wordweave::layout::generate_layout;
use wordweave::puzzle::build_puzzle;
use wordweave::save::SavedGame;
use wordweave::word::WordEntry;

fn entry(word: &str, clue: &str) -> WordEntry {
    WordEntry::new(word, clue)
}

/// A word list with heavy letter overlap; most of it should place.
fn planet_words() -> Vec<WordEntry> {
    vec![
        entry("MERCURIO", "Closest planet to the sun"),
        entry("SATURNO", "Planet with prominent rings"),
        entry("JUPITER", "Largest planet in the solar system"),
        entry("NETUNO", "Farthest planet from the sun"),
        entry("MARTE", "The red planet"),
        entry("VENUS", "Hottest planet"),
        entry("TERRA", "Our home planet"),
        entry("URANO", "Ice giant tilted on its side"),
        entry("LUA", "Earth's natural satellite"),
    ]
}

/// Spec property: reading the grid along each placed word's span
/// reproduces the word exactly.
fn assert_placement_consistent(layout: &Layout) {
    for p in &layout.placed_words {
        let read: String = p
            .cells()
            .map(|(r, c)| {
                layout.grid[r][c]
                    .letter
                    .unwrap_or_else(|| panic!("cell ({r}, {c}) of \"{}\" holds no letter", p.word))
            })
            .collect();
        assert_eq!(read, p.word, "grid does not spell \"{}\" along its span", p.word);
    }
}

/// Spec property: clue numbers on placed words and on grid cells are the
/// same set, each number sits on exactly one cell, and every numbered cell
/// starts at least one placed word.
fn assert_numbering_bijection(layout: &Layout) {
    let mut cell_numbers: HashMap<u32, (usize, usize)> = HashMap::new();
    for (r, row) in layout.grid.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if let Some(n) = cell.number {
                let prev = cell_numbers.insert(n, (r, c));
                assert!(prev.is_none(), "number {n} appears on two cells");
            }
        }
    }

    let placed_numbers: HashSet<u32> = layout.placed_words.iter().map(|p| p.number).collect();
    let grid_numbers: HashSet<u32> = cell_numbers.keys().copied().collect();
    assert_eq!(placed_numbers, grid_numbers);

    for (n, (r, c)) in &cell_numbers {
        let starts_word = layout
            .placed_words
            .iter()
            .any(|p| p.row == *r && p.col == *c);
        assert!(starts_word, "numbered cell ({r}, {c}) [{n}] starts no word");
        for p in layout.placed_words.iter().filter(|p| p.row == *r && p.col == *c) {
            assert_eq!(p.number, *n, "placement number disagrees with its start cell");
        }
    }
}

/// Spec property: two same-orientation words on the same row/column are
/// separated by at least one blocked cell.
fn assert_no_merge(layout: &Layout) {
    for a in &layout.placed_words {
        for b in &layout.placed_words {
            if a.direction != b.direction || std::ptr::eq(a, b) {
                continue;
            }
            let (line_a, line_b, start_a, end_a, start_b) = match a.direction {
                Orientation::Across => (a.row, b.row, a.col, a.col + a.word.len(), b.col),
                Orientation::Down => (a.col, b.col, a.row, a.row + a.word.len(), b.row),
            };
            if line_a != line_b || start_b < start_a {
                continue;
            }
            assert!(start_b >= end_a, "spans of \"{}\" and \"{}\" overlap", a.word, b.word);
            let separated = (end_a..start_b).any(|i| {
                let (r, c) = match a.direction {
                    Orientation::Across => (a.row, i),
                    Orientation::Down => (i, a.col),
                };
                layout.grid[r][c].is_blocker
            });
            assert!(separated, "\"{}\" and \"{}\" abut without a blocker", a.word, b.word);
        }
    }
}

/// Spec property: clue lists are sorted strictly ascending with no
/// duplicate numbers.
fn assert_clues_sorted(layout: &Layout) {
    for clues in [&layout.clues.across, &layout.clues.down] {
        for pair in clues.windows(2) {
            assert!(pair[0].number < pair[1].number, "clue numbers not strictly ascending");
        }
    }
}

mod result_shape {
    use super::*;

    #[test]
    fn grid_is_always_max_dim_square() {
        for max_dim in [10, 15, 20] {
            let layout = generate_layout(&planet_words(), max_dim).unwrap();
            assert_eq!(layout.grid.len(), max_dim);
            for row in &layout.grid {
                assert_eq!(row.len(), max_dim);
            }
        }
    }

    #[test]
    fn clue_lists_are_strictly_ascending() {
        let layout = generate_layout(&planet_words(), 20).unwrap();
        assert_clues_sorted(&layout);
    }

    #[test]
    fn every_word_is_placed_or_dropped() {
        let words = planet_words();
        let layout = generate_layout(&words, 20).unwrap();
        assert_eq!(layout.placed_words.len() + layout.dropped.len(), words.len());
    }
}

mod structural_invariants {
    use super::*;

    #[test]
    fn placements_read_back_from_the_grid() {
        let layout = generate_layout(&planet_words(), 20).unwrap();
        assert!(layout.placed_words.len() >= 2, "expected several placements");
        assert_placement_consistent(&layout);
    }

    #[test]
    fn numbering_is_a_bijection_with_start_cells() {
        let layout = generate_layout(&planet_words(), 20).unwrap();
        assert_numbering_bijection(&layout);
    }

    #[test]
    fn same_orientation_words_never_merge() {
        let layout = generate_layout(&planet_words(), 20).unwrap();
        assert_no_merge(&layout);
    }

    #[test]
    fn every_later_word_crosses_an_earlier_one() {
        let layout = generate_layout(&planet_words(), 20).unwrap();
        for (idx, p) in layout.placed_words.iter().enumerate().skip(1) {
            let cells: HashSet<(usize, usize)> = p.cells().collect();
            let crosses = layout.placed_words[..idx]
                .iter()
                .any(|earlier| earlier.cells().any(|cell| cells.contains(&cell)));
            assert!(crosses, "\"{}\" shares no cell with any earlier word", p.word);
        }
    }

    #[test]
    fn invariants_hold_on_a_tight_grid() {
        // A small grid forces drops; whatever places must still validate.
        let layout = generate_layout(&planet_words(), 9).unwrap();
        assert_placement_consistent(&layout);
        assert_numbering_bijection(&layout);
        assert_no_merge(&layout);
        assert_clues_sorted(&layout);
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn engine_accepts_a_single_word() {
        let layout = generate_layout(&[entry("CAT", "feline")], 20).unwrap();
        assert_eq!(layout.placed_words.len(), 1);
    }

    #[test]
    fn engine_rejects_empty_input() {
        assert!(generate_layout(&[], 20).is_none());
    }

    #[test]
    fn builder_requires_two_words() {
        let err = build_puzzle(&[entry("CAT", "feline")], 20).unwrap_err();
        assert!(matches!(err, PuzzleError::TooFewWords { count: 1 }));
    }
}

mod scenarios {
    use super::*;

    /// Scenario A: CAT and CAR share 'C' and 'A'; the engine must find a
    /// crossing and the result must validate structurally.
    #[test]
    fn cat_and_car_cross() {
        let words = vec![entry("CAT", "feline"), entry("CAR", "vehicle")];
        let layout = generate_layout(&words, 20).unwrap();

        assert_eq!(layout.placed_words.len(), 2);
        let cat_cells: HashSet<(usize, usize)> = layout.placed_words[0].cells().collect();
        let shared: Vec<(usize, usize)> = layout.placed_words[1]
            .cells()
            .filter(|cell| cat_cells.contains(cell))
            .collect();
        assert_eq!(shared.len(), 1, "the words should cross at exactly one cell");

        assert_placement_consistent(&layout);
        assert_numbering_bijection(&layout);
        assert_no_merge(&layout);
    }

    /// Scenario B: DOG and SKY share no letters. Both are length 3, so the
    /// stable sort keeps DOG (first in input) as the anchor and SKY drops.
    #[test]
    fn disjoint_words_drop_the_second() {
        let words = vec![entry("DOG", "pet"), entry("SKY", "above")];
        let layout = generate_layout(&words, 20).unwrap();

        assert_eq!(layout.placed_words.len(), 1);
        assert_eq!(layout.placed_words[0].word, "DOG");
        assert_eq!(layout.dropped, vec![entry("SKY", "above")]);
        assert_placement_consistent(&layout);
    }

    /// Scenario C: save/load round trip reproduces grid, clue lists and
    /// placements with exact structural equality.
    #[test]
    fn save_load_round_trip_is_exact() {
        let words = planet_words();
        let layout = build_puzzle(&words, 20).unwrap();
        let game = SavedGame::new("planets", words, layout);

        let restored = SavedGame::from_json(&game.to_json().unwrap()).unwrap();
        assert_eq!(restored.theme, game.theme);
        assert_eq!(restored.words, game.words);
        assert_eq!(restored.grid_data.grid, game.grid_data.grid);
        assert_eq!(restored.grid_data.clues, game.grid_data.clues);
        assert_eq!(restored.grid_data.placed_words, game.grid_data.placed_words);
        assert_eq!(restored, game);
    }
}
