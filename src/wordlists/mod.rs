//! Word lists
//!
//! Loading of newline-delimited word lists from disk or memory.

pub mod loader;

pub use loader::{load_from_file, words_from_lines, words_from_slice};
