//! Command implementations

pub mod analyze;
pub mod batch;
pub mod duel;
pub mod rank;

pub use analyze::{AnalysisResult, analyze_word};
pub use batch::{BatchResult, run_batch};
pub use duel::{DuelConfig, DuelReport, DuelSummary, duel, run_duels};
pub use rank::{Standing, rank_words};
