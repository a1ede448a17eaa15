//! Command implementations

pub mod openers;

pub use openers::{OpenerReport, RankedOpener, find_openers};
