//! Rank command
//!
//! Builds a leaderboard of words, strongest first.

use crate::core::{ClassifiedWord, compare};
use rayon::prelude::*;
use std::cmp::Ordering;

/// A word's place on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    /// 1-based place; tied words share a place and the next place is skipped
    pub place: usize,
    pub word: ClassifiedWord,
}

/// Classify every word and sort them from strongest to weakest
///
/// Words that compare equal share a place (1, 2, 2, 4, ...) and keep their
/// input order among themselves.
///
/// # Examples
/// ```
/// use word_duel::commands::rank_words;
///
/// let standings = rank_words(&["crane", "aaaaa", "level"]);
/// let order: Vec<&str> = standings.iter().map(|s| s.word.text()).collect();
/// assert_eq!(order, vec!["aaaaa", "level", "crane"]);
/// ```
#[must_use]
pub fn rank_words<S: AsRef<str> + Sync>(words: &[S]) -> Vec<Standing> {
    let mut classified: Vec<ClassifiedWord> = words
        .par_iter()
        .map(|word| ClassifiedWord::new(word.as_ref()))
        .collect();

    // Stable, so equal words stay in input order
    classified.par_sort_by(|a, b| compare(b, a));

    let mut standings: Vec<Standing> = Vec::with_capacity(classified.len());
    for (index, word) in classified.into_iter().enumerate() {
        let place = match standings.last() {
            Some(prev) if compare(&prev.word, &word) == Ordering::Equal => prev.place,
            _ => index + 1,
        };
        standings.push(Standing { place, word });
    }
    standings
}
