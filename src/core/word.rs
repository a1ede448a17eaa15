//! Word list entry representation
//!
//! A Word keeps the raw line text exactly as loaded, plus the set of distinct
//! letters it contains so letter-overlap checks don't rescan the text.

use rustc_hash::FxHashSet;
use std::fmt;

/// A single entry from a word list
///
/// No validation is applied: case, length and non-alphabetic characters are
/// kept as they appear in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    distinct: FxHashSet<char>,
}

impl Word {
    /// Create a new Word from raw text
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Word;
    ///
    /// let word = Word::new("crane");
    /// assert_eq!(word.text(), "crane");
    /// assert!(word.has_unique_letters());
    ///
    /// assert!(!Word::new("speed").has_unique_letters());
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let distinct = text.chars().collect();
        Self { text, distinct }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Iterate over every letter, repeats included, in word order
    #[inline]
    pub fn letters(&self) -> impl Iterator<Item = char> {
        self.text.chars()
    }

    /// Number of letters (repeats included)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// True for a blank line
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        self.text.chars().next()
    }

    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> Option<char> {
        self.text.chars().next_back()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.distinct.contains(&letter)
    }

    /// The set of distinct letters in this word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> &FxHashSet<char> {
        &self.distinct
    }

    /// True when no letter repeats within the word
    #[inline]
    #[must_use]
    pub fn has_unique_letters(&self) -> bool {
        is_unique_chars(&self.text)
    }

    /// True when any letter of this word is in `letters`
    #[inline]
    #[must_use]
    pub fn shares_letter_with(&self, letters: &FxHashSet<char>) -> bool {
        letters.iter().any(|&letter| self.has_letter(letter))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Check whether a string is made of distinct characters
///
/// An empty string counts as unique (zero distinct characters, length zero).
///
/// # Examples
/// ```
/// use wordle_openers::core::is_unique_chars;
///
/// assert!(is_unique_chars("crane"));
/// assert!(!is_unique_chars("geese"));
/// ```
#[must_use]
pub fn is_unique_chars(text: &str) -> bool {
    let distinct: FxHashSet<char> = text.chars().collect();
    distinct.len() == text.chars().count()
}

/// Keep only the words whose letters are all distinct, preserving order
#[must_use]
pub fn words_with_unique_letters(words: &[Word]) -> Vec<&Word> {
    words.iter().filter(|w| is_unique_chars(w.text())).collect()
}
