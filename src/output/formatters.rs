//! Formatting utilities for terminal output
//!
//! Everything here returns plain strings. `display` writes them out and colors
//! only the verbose breakdown.

use crate::commands::{OpenerReport, RankedOpener};
use crate::solver::OPENER_COUNT;

/// Explanation printed ahead of the results
pub const COST_FUNCTION_LINE: &str = "Cost Function = letter frequency (objective function) + \
     best starting and ending letters (regularization)";

/// Heading above the chosen words
#[must_use]
pub fn top_words_header() -> String {
    format!("The top {OPENER_COUNT} words are :")
}

/// The full uncolored report: explanation, blank line, heading, one word per line
#[must_use]
pub fn report_lines(report: &OpenerReport) -> Vec<String> {
    let mut lines = vec![
        COST_FUNCTION_LINE.to_string(),
        String::new(),
        top_words_header(),
    ];
    lines.extend(report.words().map(str::to_string));
    lines
}

/// One row of the verbose breakdown
#[must_use]
pub fn opener_row(rank: usize, opener: &RankedOpener) -> String {
    format!(
        "{rank:>3}. {:<12} score {}   {:>6} candidates",
        opener.word,
        format_score(opener.score),
        opener.candidates
    )
}

#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> OpenerReport {
        let opener = |word: &str, score, candidates| RankedOpener {
            word: word.to_string(),
            score,
            candidates,
        };
        OpenerReport {
            openers: vec![
                opener("crane", 0.75, 120),
                opener("pudgy", 0.5, 40),
                opener("whisk", 0.25, 6),
            ],
            total_words: 130,
            unique_words: 120,
        }
    }

    #[test]
    fn report_layout() {
        let lines = report_lines(&sample_report());
        assert_eq!(
            lines,
            vec![
                "Cost Function = letter frequency (objective function) + best starting and ending letters (regularization)",
                "",
                "The top 3 words are :",
                "crane",
                "pudgy",
                "whisk",
            ]
        );
    }

    #[test]
    fn score_has_four_decimals() {
        assert_eq!(format_score(0.5), "0.5000");
        assert_eq!(format_score(5.0 / 26.0), "0.1923");
    }

    #[test]
    fn row_contains_fields() {
        let report = sample_report();
        let row = opener_row(1, &report.openers[0]);
        assert!(row.starts_with("  1. crane"));
        assert!(row.contains("score 0.7500"));
        assert!(row.ends_with("120 candidates"));
    }
}
