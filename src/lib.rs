// Reusable library API — consumed by the CLI and by downstream embedders
pub mod errors;
pub mod export;
pub mod grid;
pub mod layout;
pub mod log;
pub mod player;
pub mod puzzle;
pub mod save;
pub mod word;
