//! Greedy opener selection
//!
//! Picks words one at a time. The first pick uses the tie-broken score over
//! the whole pool; each later pick drops every word that shares a letter with
//! the picks so far and rescores the rest by letter cost alone.

use super::pool::{CandidatePool, letters_used};
use super::scoring::{LetterCostScoring, Scoring, TieBreakScoring, select_best};
use crate::core::Word;
use crate::stats::{
    ALPHABET_SIZE, LetterCosts, LetterCounts, cost_of_letters, ending_frequency,
    frequency_of_letters, starting_frequency,
};
use log::debug;
use thiserror::Error;

/// Number of opening words to choose
pub const OPENER_COUNT: usize = 3;

/// Errors from the selection procedure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The pool ran dry before enough letter-disjoint words were found
    #[error(
        "insufficient candidate words: found {found} letter-disjoint word(s) with unique letters, need {needed}"
    )]
    InsufficientCandidates { needed: usize, found: usize },

    /// All openers have already been chosen
    #[error("selection is already complete with {} words", OPENER_COUNT)]
    Complete,
}

/// Progress of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NoPicks,
    OnePick,
    TwoPicks,
    Complete,
}

impl Stage {
    /// Stage reached after `count` picks
    #[must_use]
    pub const fn after(count: usize) -> Self {
        match count {
            0 => Self::NoPicks,
            1 => Self::OnePick,
            2 => Self::TwoPicks,
            _ => Self::Complete,
        }
    }
}

/// One chosen word
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<'a> {
    pub word: &'a Word,
    /// Score the word won with
    pub score: f64,
    /// How many candidates were eligible at this step
    pub candidates: usize,
}

/// Choose the next word given the words already picked
///
/// Drops every pool word that contains a letter from `picks`, scores the
/// survivors by plain letter cost and returns the best. Returns `None` when
/// no word survives.
#[must_use]
pub fn process_next_choice<'a>(
    picks: &[&Word],
    pool: &CandidatePool<'a>,
    costs: &LetterCosts,
) -> Option<Pick<'a>> {
    let used = letters_used(picks);
    let remaining = pool.excluding(&used);
    debug!(
        "{} letter(s) used, {} of {} candidates remain",
        used.len(),
        remaining.len(),
        pool.len()
    );

    let scored = LetterCostScoring::new(costs).score_words(&remaining);
    select_best(&scored).map(|best| Pick {
        word: best.word,
        score: best.score,
        candidates: remaining.len(),
    })
}

/// Greedy selector over a fixed candidate pool
pub struct GreedySelector<'a> {
    pool: CandidatePool<'a>,
    costs: LetterCosts,
    starting: LetterCounts,
    ending: LetterCounts,
}

impl<'a> GreedySelector<'a> {
    #[must_use]
    pub const fn new(
        pool: CandidatePool<'a>,
        costs: LetterCosts,
        starting: LetterCounts,
        ending: LetterCounts,
    ) -> Self {
        Self {
            pool,
            costs,
            starting,
            ending,
        }
    }

    /// Compute all statistics from a word list and build the pool
    ///
    /// Letter, starting and ending frequencies are taken over the full list;
    /// the pool holds only its unique-letter words.
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::solver::GreedySelector;
    /// use wordle_openers::wordlists::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "pudgy", "whisk"]);
    /// let picks = GreedySelector::from_words(&words).select().unwrap();
    /// assert_eq!(picks.len(), 3);
    /// assert_eq!(picks[0].word.text(), "crane");
    /// ```
    #[must_use]
    pub fn from_words(words: &'a [Word]) -> Self {
        let counts = frequency_of_letters(words);
        Self::new(
            CandidatePool::new(words),
            cost_of_letters(&counts, ALPHABET_SIZE),
            starting_frequency(words),
            ending_frequency(words),
        )
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool<'a> {
        &self.pool
    }

    /// Choose the next pick given the picks made so far
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InsufficientCandidates` if no eligible word is
    /// left, or `SelectionError::Complete` if all openers are already chosen.
    pub fn next_pick(&self, picks: &[Pick<'a>]) -> Result<Pick<'a>, SelectionError> {
        let pick = match Stage::after(picks.len()) {
            Stage::NoPicks => self.first_pick(),
            Stage::OnePick | Stage::TwoPicks => {
                let chosen: Vec<&Word> = picks.iter().map(|p| p.word).collect();
                process_next_choice(&chosen, &self.pool, &self.costs)
            }
            Stage::Complete => return Err(SelectionError::Complete),
        };

        pick.ok_or(SelectionError::InsufficientCandidates {
            needed: OPENER_COUNT,
            found: picks.len(),
        })
    }

    /// Run the selection to completion
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InsufficientCandidates` if fewer than
    /// `OPENER_COUNT` letter-disjoint unique-letter words exist.
    pub fn select(&self) -> Result<Vec<Pick<'a>>, SelectionError> {
        let mut picks = Vec::with_capacity(OPENER_COUNT);

        while Stage::after(picks.len()) != Stage::Complete {
            let pick = self.next_pick(&picks)?;
            debug!(
                "pick {}: {} (score {:.4}, {} candidates)",
                picks.len() + 1,
                pick.word,
                pick.score,
                pick.candidates
            );
            picks.push(pick);
        }

        Ok(picks)
    }

    fn first_pick(&self) -> Option<Pick<'a>> {
        let scoring = TieBreakScoring::new(&self.costs, &self.starting, &self.ending);
        let scored = scoring.score_words(self.pool.words());
        select_best(&scored).map(|best| Pick {
            word: best.word,
            score: best.score,
            candidates: self.pool.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;
    use rustc_hash::FxHashSet;

    const SAMPLE: &[&str] = &[
        "crane", "trace", "slate", "pudgy", "dumpy", "whisk", "folks", "chink",
    ];

    fn texts<'a>(picks: &[Pick<'a>]) -> Vec<&'a str> {
        picks.iter().map(|p| p.word.text()).collect()
    }

    #[test]
    fn stage_transitions() {
        assert_eq!(Stage::after(0), Stage::NoPicks);
        assert_eq!(Stage::after(1), Stage::OnePick);
        assert_eq!(Stage::after(2), Stage::TwoPicks);
        assert_eq!(Stage::after(3), Stage::Complete);
        assert_eq!(Stage::after(7), Stage::Complete);
    }

    #[test]
    fn toy_alphabet_is_deterministic() {
        let words = words_from_slice(&["abc", "def", "ghi", "abc"]);
        let picks = GreedySelector::from_words(&words).select().unwrap();

        // abc has doubled letter counts; def and ghi tie, def comes first
        assert_eq!(texts(&picks), vec!["abc", "def", "ghi"]);
        assert_eq!(picks[1].candidates, 2);
        assert_eq!(picks[2].candidates, 1);
    }

    #[test]
    fn first_pick_uses_start_and_end_letters() {
        // "abc" and "cba" have identical letter costs; "abc" wins only through
        // the start/end term because two words start with 'a' and end with 'c'
        let words = words_from_slice(&["cba", "abc", "axc", "def", "ghi"]);
        let selector = GreedySelector::from_words(&words);

        let first = selector.next_pick(&[]).unwrap();
        assert_eq!(first.word.text(), "abc");
        assert_eq!(first.candidates, 5);
    }

    #[test]
    fn later_picks_ignore_start_and_end_letters() {
        // Words with repeated letters feed the statistics but are never picked.
        // "hij" starts with the most common first letter, "efg" has the higher
        // letter cost. After "abc", plain letter cost decides.
        let words = words_from_slice(&["abc", "haa", "hbb", "hcc", "aeffggb", "hij", "efg"]);
        let selector = GreedySelector::from_words(&words);

        let first = selector.next_pick(&[]).unwrap();
        assert_eq!(first.word.text(), "abc");

        let second = selector.next_pick(&[first]).unwrap();
        assert_eq!(second.word.text(), "efg");
        assert_eq!(second.candidates, 2);

        let third = selector.next_pick(&[first, second]).unwrap();
        assert_eq!(third.word.text(), "hij");
    }

    #[test]
    fn sample_list_selection() {
        let words = words_from_slice(SAMPLE);
        let picks = GreedySelector::from_words(&words).select().unwrap();

        assert_eq!(picks[0].word.text(), "crane");
        assert_eq!(picks[1].word.text(), "whisk");
        assert_eq!(picks[0].candidates, 8);
        assert_eq!(picks[1].candidates, 4);
    }

    #[test]
    fn picks_are_pairwise_letter_disjoint() {
        let words = words_from_slice(SAMPLE);
        let picks = GreedySelector::from_words(&words).select().unwrap();
        assert_eq!(picks.len(), OPENER_COUNT);

        for (i, a) in picks.iter().enumerate() {
            for b in &picks[i + 1..] {
                assert!(
                    a.word.distinct_letters().is_disjoint(b.word.distinct_letters()),
                    "{} and {} share a letter",
                    a.word,
                    b.word
                );
            }
        }
    }

    #[test]
    fn repeated_runs_agree() {
        let words = words_from_slice(SAMPLE);
        let first = texts(&GreedySelector::from_words(&words).select().unwrap());
        let second = texts(&GreedySelector::from_words(&words).select().unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn process_next_choice_excludes_used_letters() {
        let words = words_from_slice(&["crane", "slate", "pious", "bight"]);
        let selector = GreedySelector::from_words(&words);

        let pick = process_next_choice(&[&words[0]], selector.pool(), &selector.costs).unwrap();
        assert_eq!(pick.word.text(), "pious");
        assert_eq!(pick.candidates, 2);

        let used: FxHashSet<char> = "crane".chars().collect();
        assert!(!pick.word.shares_letter_with(&used));
    }

    #[test]
    fn process_next_choice_empty_when_all_overlap() {
        let words = words_from_slice(&["crane", "slate", "trace"]);
        let selector = GreedySelector::from_words(&words);

        assert!(process_next_choice(&[&words[0]], selector.pool(), &selector.costs).is_none());
    }

    #[test]
    fn empty_list_is_insufficient() {
        let words = words_from_slice(&[]);
        let err = GreedySelector::from_words(&words).select().unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientCandidates {
                needed: 3,
                found: 0
            }
        );
    }

    #[test]
    fn repeated_letter_words_only_is_insufficient() {
        let words = words_from_slice(&["speed", "geese", "llama", ""]);
        let err = GreedySelector::from_words(&words).select().unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientCandidates {
                needed: 3,
                found: 0
            }
        );
    }

    #[test]
    fn two_disjoint_words_is_insufficient() {
        let words = words_from_slice(&["crane", "pious", "crate"]);
        let err = GreedySelector::from_words(&words).select().unwrap_err();
        assert_eq!(
            err,
            SelectionError::InsufficientCandidates {
                needed: 3,
                found: 2
            }
        );
        assert!(err.to_string().contains("insufficient candidate words"));
    }

    #[test]
    fn next_pick_after_complete_errors() {
        let words = words_from_slice(&["abc", "def", "ghi"]);
        let selector = GreedySelector::from_words(&words);
        let picks = selector.select().unwrap();

        assert_eq!(selector.next_pick(&picks), Err(SelectionError::Complete));
    }
}
