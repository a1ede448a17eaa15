//! Letter frequency counts over a word list

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Occurrence count per letter
pub type LetterCounts = FxHashMap<char, usize>;

/// Count every letter occurrence across every word, at any position
///
/// # Examples
/// ```
/// use wordle_openers::stats::frequency_of_letters;
/// use wordle_openers::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["abc", "cab"]);
/// let counts = frequency_of_letters(&words);
/// assert_eq!(counts[&'a'], 2);
/// assert_eq!(counts[&'c'], 2);
/// ```
#[must_use]
pub fn frequency_of_letters(words: &[Word]) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for word in words {
        for letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

/// Count how many words start with each letter
///
/// Blank words have no first letter and are skipped.
#[must_use]
pub fn starting_frequency(words: &[Word]) -> LetterCounts {
    count_by(words, Word::first_letter)
}

/// Count how many words end with each letter
#[must_use]
pub fn ending_frequency(words: &[Word]) -> LetterCounts {
    count_by(words, Word::last_letter)
}

fn count_by(words: &[Word], letter_of: impl Fn(&Word) -> Option<char>) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for letter in words.iter().filter_map(letter_of) {
        *counts.entry(letter).or_insert(0) += 1;
    }
    counts
}
