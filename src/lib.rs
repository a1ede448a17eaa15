//! Wordle Openers
//!
//! Picks three opening guesses for a Wordle-style game from a word list. Each
//! letter is scored by how often it occurs in the list; words with repeated
//! letters are skipped, and the three picks never share a letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openers::commands::find_openers;
//! use wordle_openers::wordlists::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "pudgy", "whisk", "trace"]);
//! let report = find_openers(&words).unwrap();
//! for word in report.words() {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Letter frequency statistics
pub mod stats;

// Greedy selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
