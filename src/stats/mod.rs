//! Letter statistics over a word list
//!
//! Frequency counts (anywhere, at the start, at the end) and the costs
//! derived from them.

mod cost;
mod frequency;

pub use cost::{
    ALPHABET_SIZE, LetterCosts, ScoredWord, break_ties, cost_of_letters, cost_of_words,
};
pub use frequency::{LetterCounts, ending_frequency, frequency_of_letters, starting_frequency};
