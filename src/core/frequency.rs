//! Per-word letter frequency counting
//!
//! Counts live only as long as one classification call.

use rustc_hash::FxHashMap;

/// Running count at which a letter makes a word quintessential
pub const QUINTESSENTIAL_COUNT: usize = 5;

/// Occurrence count of every distinct letter in a word
#[derive(Debug, Clone, Default)]
pub(crate) struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count every letter of `word`
    pub(crate) fn of(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrences of `letter` (0 if absent)
    #[cfg(test)]
    pub(crate) fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// The single letter occurring exactly `times` times, provided no other
    /// letter is repeated
    ///
    /// Returns `None` when zero or several letters occur `times` times, or when
    /// any other letter occurs twice or more.
    pub(crate) fn sole_repeat(&self, times: usize) -> Option<char> {
        let mut found = None;
        for (&letter, &count) in &self.counts {
            if count == times {
                if found.is_some() {
                    return None;
                }
                found = Some(letter);
            } else if count >= 2 {
                return None;
            }
        }
        found
    }
}

/// First letter whose running count reaches `threshold` while scanning left
/// to right
///
/// Stops at the first hit, so the result depends on scan order rather than on
/// which letter is most frequent overall.
pub(crate) fn first_to_reach(word: &str, threshold: usize) -> Option<char> {
    let mut running: FxHashMap<char, usize> = FxHashMap::default();
    word.chars().find(|&ch| {
        let count = running.entry(ch).or_insert(0);
        *count += 1;
        *count >= threshold
    })
}
