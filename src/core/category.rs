//! Word categories and their ranking
//!
//! The six categories form a fixed total order. The same order is used both
//! for detection priority (highest first) and for ranking two words.

use std::fmt;

/// Lexical category of a word
///
/// Variants are declared lowest rank first so the derived `Ord` matches the
/// game's ranking: `Standard < Duo < Trio < Ordered < Palindrome < Quintessential`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    /// No other category matched
    Standard = 0,
    /// Exactly one letter appears exactly twice, all others unique
    Duo = 1,
    /// Exactly one letter appears exactly three times, all others unique
    Trio = 2,
    /// Letters never decrease from left to right
    Ordered = 3,
    /// Reads the same backwards, at least 3 letters long
    Palindrome = 4,
    /// Some letter appears 5 or more times
    Quintessential = 5,
}

impl Category {
    /// All categories in detection priority order (highest rank first)
    pub const BY_PRIORITY: [Self; 6] = [
        Self::Quintessential,
        Self::Palindrome,
        Self::Ordered,
        Self::Trio,
        Self::Duo,
        Self::Standard,
    ];

    /// Ordinal rank (0-5), higher outranks lower
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case display name, as printed in duel transcripts
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "STANDARD",
            Self::Duo => "DUO",
            Self::Trio => "TRIO",
            Self::Ordered => "ORDERED",
            Self::Palindrome => "PALINDROME",
            Self::Quintessential => "QUINTESSENTIAL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
