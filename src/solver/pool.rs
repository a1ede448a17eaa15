//! Candidate pool for greedy selection
//!
//! The pool is fixed once built. Each selection step asks for the words that
//! avoid a given letter set instead of removing words from the pool.

use crate::core::{Word, words_with_unique_letters};
use rustc_hash::FxHashSet;

/// Unique-letter words eligible for selection, in word list order
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidatePool<'a> {
    /// Build the pool from a full word list
    ///
    /// Keeps words with no repeated letter. Blank words are left out since
    /// they have no letters to contribute.
    #[must_use]
    pub fn new(words: &'a [Word]) -> Self {
        let words = words_with_unique_letters(words)
            .into_iter()
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words that contain none of `letters`, in pool order
    #[must_use]
    pub fn excluding(&self, letters: &FxHashSet<char>) -> Vec<&'a Word> {
        self.words
            .iter()
            .copied()
            .filter(|w| !w.shares_letter_with(letters))
            .collect()
    }
}

/// Every distinct letter used across `words`
#[must_use]
pub fn letters_used(words: &[&Word]) -> FxHashSet<char> {
    words
        .iter()
        .flat_map(|w| w.distinct_letters().iter().copied())
        .collect()
}
