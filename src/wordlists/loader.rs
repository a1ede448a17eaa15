//! Word list loading utilities
//!
//! Reads newline-delimited word lists. Lines are taken as-is apart from the
//! line terminator: blank lines, case and punctuation are not corrected.

use crate::core::Word;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use wordle_openers::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(&content);

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split in-memory text into words, one per line
///
/// Both `\n` and `\r\n` terminators are stripped. A trailing newline at the
/// end of the text does not produce an extra empty word.
///
/// # Examples
/// ```
/// use wordle_openers::wordlists::loader::words_from_lines;
///
/// let words = words_from_lines("crane\nslate\r\n\nirate\n");
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, vec!["crane", "slate", "", "irate"]);
/// ```
#[must_use]
pub fn words_from_lines(text: &str) -> Vec<Word> {
    let words: Vec<Word> = text.lines().map(Word::new).collect();

    let blank = words.iter().filter(|w| w.is_empty()).count();
    if blank > 0 {
        warn!("word list contains {blank} blank line(s); they are never chosen");
    }

    words
}

/// Convert a string slice to a Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| Word::new(s)).collect()
}
