//! Core domain types for word lists
//!
//! Pure types with no I/O: the word representation and the uniqueness filter.

mod word;

pub use word::{Word, is_unique_chars, words_with_unique_letters};
