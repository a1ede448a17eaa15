//! Opener search command
//!
//! Runs the full pipeline over a loaded word list and collects the result.

use crate::core::Word;
use crate::solver::{GreedySelector, SelectionError};
use log::debug;

/// A chosen opener with the numbers behind it
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOpener {
    pub word: String,
    pub score: f64,
    pub candidates: usize,
}

/// Result of searching a word list for openers
#[derive(Debug, Clone, PartialEq)]
pub struct OpenerReport {
    /// Openers in selection order, best first
    pub openers: Vec<RankedOpener>,
    pub total_words: usize,
    /// Words eligible for the first pick
    pub unique_words: usize,
}

impl OpenerReport {
    /// The chosen words, best first
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.openers.iter().map(|o| o.word.as_str())
    }
}

/// Find the three letter-disjoint openers for a word list
///
/// # Errors
///
/// Returns `SelectionError::InsufficientCandidates` if the list does not hold
/// three mutually letter-disjoint words with unique letters.
///
/// # Examples
/// ```
/// use wordle_openers::commands::find_openers;
/// use wordle_openers::wordlists::words_from_slice;
///
/// let words = words_from_slice(&["abc", "def", "ghi", "abc"]);
/// let report = find_openers(&words).unwrap();
/// assert_eq!(report.words().collect::<Vec<_>>(), vec!["abc", "def", "ghi"]);
///
/// assert!(find_openers(&[]).is_err());
/// ```
pub fn find_openers(words: &[Word]) -> Result<OpenerReport, SelectionError> {
    let selector = GreedySelector::from_words(words);
    debug!(
        "{} words, {} with unique letters",
        words.len(),
        selector.pool().len()
    );

    let picks = selector.select()?;

    Ok(OpenerReport {
        openers: picks
            .iter()
            .map(|p| RankedOpener {
                word: p.word.text().to_string(),
                score: p.score,
                candidates: p.candidates,
            })
            .collect(),
        total_words: words.len(),
        unique_words: selector.pool().len(),
    })
}
