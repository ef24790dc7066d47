//! Core duel engine
//!
//! Classification and comparison of words. Everything here is pure: no I/O,
//! no shared state, safe to call from any thread.

mod category;
mod classify;
mod compare;
mod frequency;

pub use category::Category;
pub use classify::{ClassifiedWord, EMPTY_TIE_BREAKER, classify, matching_categories};
pub use compare::{Verdict, compare};
pub use frequency::QUINTESSENTIAL_COUNT;
