//! Word scoring rules
//!
//! Defines the Scoring trait and the two rules the greedy selector uses:
//! plain letter cost, and letter cost plus the start/end tie-break term.

use crate::core::Word;
use crate::stats::{LetterCosts, LetterCounts, ScoredWord, break_ties, cost_of_words};
use std::cmp::Ordering;

/// A rule for scoring a set of candidate words
pub trait Scoring {
    /// Score every word, keeping the input order
    fn score_words<'a>(&self, words: &[&'a Word]) -> Vec<ScoredWord<'a>>;
}

/// Sum of letter costs, nothing else
pub struct LetterCostScoring<'c> {
    costs: &'c LetterCosts,
}

impl<'c> LetterCostScoring<'c> {
    #[must_use]
    pub const fn new(costs: &'c LetterCosts) -> Self {
        Self { costs }
    }
}

impl Scoring for LetterCostScoring<'_> {
    fn score_words<'a>(&self, words: &[&'a Word]) -> Vec<ScoredWord<'a>> {
        cost_of_words(self.costs, words)
    }
}

/// Letter cost plus how common the word's first and last letters are
/// as first and last letters across the whole list
pub struct TieBreakScoring<'c> {
    costs: &'c LetterCosts,
    starting: &'c LetterCounts,
    ending: &'c LetterCounts,
}

impl<'c> TieBreakScoring<'c> {
    #[must_use]
    pub const fn new(
        costs: &'c LetterCosts,
        starting: &'c LetterCounts,
        ending: &'c LetterCounts,
    ) -> Self {
        Self {
            costs,
            starting,
            ending,
        }
    }
}

impl Scoring for TieBreakScoring<'_> {
    fn score_words<'a>(&self, words: &[&'a Word]) -> Vec<ScoredWord<'a>> {
        break_ties(&cost_of_words(self.costs, words), self.starting, self.ending)
    }
}

/// Ranking order: the better word compares as `Less`
///
/// Higher score first, then higher base cost.
#[must_use]
pub fn rank_order(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.base.total_cmp(&a.base))
}

/// Pick the best-ranked word
///
/// Exact ties on both score and base cost go to the earliest word in
/// `scored`. Returns `None` if `scored` is empty.
///
/// # Examples
/// ```
/// use wordle_openers::core::Word;
/// use wordle_openers::solver::select_best;
/// use wordle_openers::stats::ScoredWord;
///
/// let abc = Word::new("abc");
/// let def = Word::new("def");
/// let scored = [ScoredWord::new(&abc, 0.5), ScoredWord::new(&def, 0.5)];
///
/// let best = select_best(&scored).unwrap();
/// assert_eq!(best.word.text(), "abc");
/// ```
#[must_use]
pub fn select_best<'a>(scored: &[ScoredWord<'a>]) -> Option<ScoredWord<'a>> {
    // min_by keeps the first of equal elements
    scored.iter().copied().min_by(rank_order)
}
