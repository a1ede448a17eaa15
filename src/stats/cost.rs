//! Letter and word cost calculation
//!
//! A letter's cost is its occurrence count divided by a fixed denominator,
//! used as a stand-in for the probability of that letter appearing. A word's
//! cost is the sum of its letters' costs.

use super::frequency::LetterCounts;
use crate::core::Word;
use rustc_hash::FxHashMap;
use std::num::NonZeroUsize;

/// Estimated probability of each letter
pub type LetterCosts = FxHashMap<char, f64>;

/// Denominator for letter costs and the start/end tie-break term
///
/// This is the alphabet size, not the number of letters observed.
pub const ALPHABET_SIZE: NonZeroUsize = match NonZeroUsize::new(26) {
    Some(n) => n,
    None => unreachable!(),
};

/// A word paired with its scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    /// Sum of letter costs
    pub base: f64,
    /// Score used for ranking (base plus any tie-break term)
    pub score: f64,
}

impl<'a> ScoredWord<'a> {
    #[must_use]
    pub const fn new(word: &'a Word, base: f64) -> Self {
        Self {
            word,
            base,
            score: base,
        }
    }
}

/// Convert letter counts into costs: `count / denominator`
///
/// # Examples
/// ```
/// use wordle_openers::stats::{ALPHABET_SIZE, cost_of_letters, frequency_of_letters};
/// use wordle_openers::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["abc", "ade"]);
/// let costs = cost_of_letters(&frequency_of_letters(&words), ALPHABET_SIZE);
/// assert!((costs[&'a'] - 2.0 / 26.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cost_of_letters(counts: &LetterCounts, denominator: NonZeroUsize) -> LetterCosts {
    let denominator = denominator.get() as f64;
    counts
        .iter()
        .map(|(&letter, &count)| (letter, count as f64 / denominator))
        .collect()
}

/// Score each word as the sum of its letters' costs
///
/// Repeated letters are counted once per occurrence. Letters missing from
/// `letter_costs` contribute nothing. Output order follows `words`.
#[must_use]
pub fn cost_of_words<'a>(letter_costs: &LetterCosts, words: &[&'a Word]) -> Vec<ScoredWord<'a>> {
    words
        .iter()
        .map(|&word| {
            let base: f64 = word
                .letters()
                .map(|letter| letter_costs.get(&letter).copied().unwrap_or(0.0))
                .sum();
            ScoredWord::new(word, base)
        })
        .collect()
}

/// Add the start/end letter term to each word's score
///
/// `score += starting[first] / 26 + ending[last] / 26`. The base cost is kept
/// so exact ties on the composite score can still fall back to it.
#[must_use]
pub fn break_ties<'a>(
    word_costs: &[ScoredWord<'a>],
    starting: &LetterCounts,
    ending: &LetterCounts,
) -> Vec<ScoredWord<'a>> {
    let denominator = ALPHABET_SIZE.get() as f64;
    let share = |counts: &LetterCounts, letter: Option<char>| {
        letter
            .and_then(|l| counts.get(&l))
            .map_or(0.0, |&count| count as f64 / denominator)
    };

    word_costs
        .iter()
        .map(|scored| {
            let mut score = scored.score;
            score += share(starting, scored.word.first_letter());
            score += share(ending, scored.word.last_letter());
            ScoredWord { score, ..*scored }
        })
        .collect()
}
