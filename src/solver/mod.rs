//! Opener selection
//!
//! Scoring rules, the candidate pool and the greedy selector built on them.

mod pool;
mod scoring;
mod selector;

pub use pool::{CandidatePool, letters_used};
pub use scoring::{LetterCostScoring, Scoring, TieBreakScoring, rank_order, select_best};
pub use selector::{
    GreedySelector, OPENER_COUNT, Pick, SelectionError, Stage, process_next_choice,
};
