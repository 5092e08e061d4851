use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wordweave::errors::PuzzleError;
use wordweave::export;
use wordweave::puzzle::{self, DEFAULT_MAX_DIM};
use wordweave::save::SavedGame;
use wordweave::word::WordList;

/// Wordweave crossword generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (WORD;clue per line). Omit when loading
    /// a saved game with --load.
    words: Option<String>,

    /// Grid side length
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DIM)]
    max_dim: usize,

    /// Puzzle theme, used in the rendered title and the save file
    #[arg(short, long, default_value = "untitled")]
    theme: String,

    /// Print the solution letters instead of a blank grid
    #[arg(short = 's', long)]
    solution: bool,

    /// Write the generated game to this path as JSON
    #[arg(long)]
    save: Option<String>,

    /// Load a previously saved game instead of generating a new one
    #[arg(short, long, conflicts_with = "words")]
    load: Option<String>,
}

/// Entry point of the Wordweave CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDWEAVE_DEBUG").is_ok();
    wordweave::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Wordweave CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Either load a saved game, or read the word list and lay it out.
/// 3. Render the puzzle (optionally with the solution) on stdout.
/// 4. Optionally write the game back out as a save file.
/// 5. Print timings and placement counts on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_start = Instant::now();
    let (theme, words, layout) = if let Some(load_path) = &cli.load {
        let game = SavedGame::load_from_path(load_path)?;
        (game.theme, game.words, game.grid_data)
    } else {
        let Some(words_path) = &cli.words else {
            return Err(Box::new(PuzzleError::EmptyWordList));
        };
        let list = WordList::load_from_path(words_path)?;
        let layout = puzzle::build_puzzle(&list.entries, cli.max_dim)?;
        (cli.theme.clone(), list.entries, layout)
    };
    let build_secs = t_start.elapsed().as_secs_f64();

    print!("{}", export::render_puzzle(&layout, &theme, cli.solution));

    if !layout.dropped.is_empty() {
        let dropped: Vec<&str> = layout.dropped.iter().map(|w| w.word.as_str()).collect();
        eprintln!("⚠️  Could not place: {}", dropped.join(", "));
    }

    if let Some(save_path) = &cli.save {
        let game = SavedGame::new(theme, words, layout.clone());
        game.save_to_path(save_path)?;
        eprintln!("Saved game to {save_path}");
    }

    eprintln!(
        "Placed {} words ({} across, {} down) in {:.3}s.",
        layout.placed_words.len(),
        layout.clues.across.len(),
        layout.clues.down.len(),
        build_secs
    );

    Ok(())
}
