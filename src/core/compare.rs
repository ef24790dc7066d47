//! Ranking two classified words against each other

use super::{Category, ClassifiedWord};
use std::cmp::Ordering;
use std::fmt;

/// Compare two classified words
///
/// `Greater` means `a` wins, `Less` means `b` wins, `Equal` is a tie.
///
/// Category rank decides first. Within a category:
///
/// | Category       | First                  | Then             |
/// |----------------|------------------------|------------------|
/// | Quintessential | higher tie-breaker     |                  |
/// | Palindrome     | longer word            | later word       |
/// | Ordered        | longer word            | higher tie-breaker |
/// | Trio, Duo      | higher tie-breaker     |                  |
/// | Standard       | later word             |                  |
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use word_duel::core::{classify, compare};
///
/// let level = classify("level");
/// let radar = classify("radar");
/// assert_eq!(compare(&radar, &level), Ordering::Greater);
/// ```
#[must_use]
pub fn compare(a: &ClassifiedWord, b: &ClassifiedWord) -> Ordering {
    if a.category() != b.category() {
        return a.category().cmp(&b.category());
    }

    match a.category() {
        Category::Quintessential | Category::Trio | Category::Duo => {
            a.tie_breaker().cmp(&b.tie_breaker())
        }
        Category::Palindrome => a
            .length()
            .cmp(&b.length())
            .then_with(|| a.text().cmp(b.text())),
        Category::Ordered => a
            .length()
            .cmp(&b.length())
            .then_with(|| a.tie_breaker().cmp(&b.tie_breaker())),
        Category::Standard => a.text().cmp(b.text()),
    }
}

/// Outcome of a duel between a first and a second word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    First,
    Second,
    Tie,
}

impl Verdict {
    /// Classify both words and decide the duel
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::Verdict;
    ///
    /// assert_eq!(Verdict::between("aaaaa", "hello"), Verdict::First);
    /// assert_eq!(Verdict::between("abc", "ace"), Verdict::Second);
    /// ```
    #[must_use]
    pub fn between(first: &str, second: &str) -> Self {
        let first = ClassifiedWord::new(first);
        let second = ClassifiedWord::new(second);
        compare(&first, &second).into()
    }

    /// The verdict with first and second swapped
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
            Self::Tie => Self::Tie,
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::First,
            Ordering::Less => Self::Second,
            Ordering::Equal => Self::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first wins"),
            Self::Second => write!(f, "second wins"),
            Self::Tie => write!(f, "tie"),
        }
    }
}
