//! Word classification
//!
//! Assigns each word exactly one [`Category`] and extracts the tie-breaker
//! letter that category compares on.

use super::Category;
use super::frequency::{LetterCounts, QUINTESSENTIAL_COUNT, first_to_reach};
use std::fmt;

/// Tie-breaker recorded for the empty word
///
/// Lower than every real character, so it never wins a comparison.
pub const EMPTY_TIE_BREAKER: char = char::MIN;

/// A word together with its category and tie-breaker
///
/// Built once by [`classify`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassifiedWord {
    text: String,
    length: usize,
    category: Category,
    tie_breaker: char,
}

impl ClassifiedWord {
    /// Classify a word
    ///
    /// The text is kept exactly as given: no trimming, no case folding.
    ///
    /// # Examples
    /// ```
    /// use word_duel::core::{Category, ClassifiedWord};
    ///
    /// let word = ClassifiedWord::new("level");
    /// assert_eq!(word.category(), Category::Palindrome);
    /// assert_eq!(word.tie_breaker(), 'l');
    /// assert_eq!(word.length(), 5);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        let counts = LetterCounts::of(&text);

        let (category, tie_breaker) = Category::BY_PRIORITY
            .iter()
            .find_map(|&category| {
                tie_breaker_if_matches(&text, length, &counts, category).map(|tie| (category, tie))
            })
            .unwrap_or_else(|| (Category::Standard, last_letter(&text)));

        tracing::trace!(word = %text, %category, ?tie_breaker, "classified word");

        Self {
            text,
            length,
            category,
            tie_breaker,
        }
    }

    /// The original word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The category this word was assigned
    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Category-specific tie-breaker letter
    ///
    /// - Quintessential: first letter to reach five occurrences
    /// - Palindrome, Standard: last letter
    /// - Ordered: highest letter
    /// - Trio, Duo: the repeated letter
    #[inline]
    #[must_use]
    pub const fn tie_breaker(&self) -> char {
        self.tie_breaker
    }
}

impl fmt::Display for ClassifiedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Classify a word into exactly one category
///
/// Categories are tried from highest rank to lowest and the first match
/// wins. Never fails; the empty word is [`Category::Ordered`] with
/// [`EMPTY_TIE_BREAKER`].
///
/// # Examples
/// ```
/// use word_duel::core::{Category, classify};
///
/// // Five 'a's is also a palindrome, but quintessential ranks higher
/// let word = classify("aaaaa");
/// assert_eq!(word.category(), Category::Quintessential);
/// assert_eq!(word.tie_breaker(), 'a');
///
/// // Two repeated letters rule out duo, and "abab" is not ordered
/// assert_eq!(classify("abab").category(), Category::Standard);
/// ```
#[must_use]
pub fn classify(word: &str) -> ClassifiedWord {
    ClassifiedWord::new(word)
}

/// Every category whose rule the word satisfies, highest rank first
///
/// The first entry is always the word's assigned category; the rest are the
/// lower-ranked categories it shadows. `Standard` is always last.
///
/// # Examples
/// ```
/// use word_duel::core::{Category, matching_categories};
///
/// assert_eq!(
///     matching_categories("aaaaa"),
///     vec![Category::Quintessential, Category::Palindrome, Category::Ordered, Category::Standard],
/// );
/// ```
#[must_use]
pub fn matching_categories(word: &str) -> Vec<Category> {
    let length = word.chars().count();
    let counts = LetterCounts::of(word);

    Category::BY_PRIORITY
        .into_iter()
        .filter(|&category| tie_breaker_if_matches(word, length, &counts, category).is_some())
        .collect()
}

/// Tie-breaker for `category` if `word` satisfies that category's rule
fn tie_breaker_if_matches(
    word: &str,
    length: usize,
    counts: &LetterCounts,
    category: Category,
) -> Option<char> {
    match category {
        Category::Quintessential => first_to_reach(word, QUINTESSENTIAL_COUNT),
        Category::Palindrome => is_palindrome(word, length).then(|| last_letter(word)),
        Category::Ordered => is_ordered(word).then(|| highest_letter(word)),
        Category::Trio => counts.sole_repeat(3),
        Category::Duo => counts.sole_repeat(2),
        Category::Standard => Some(last_letter(word)),
    }
}

fn is_palindrome(word: &str, length: usize) -> bool {
    length >= 3 && word.chars().eq(word.chars().rev())
}

/// Non-decreasing left to right; vacuously true for 0 or 1 letters
fn is_ordered(word: &str) -> bool {
    word.chars().zip(word.chars().skip(1)).all(|(prev, next)| prev <= next)
}

fn last_letter(word: &str) -> char {
    word.chars().next_back().unwrap_or(EMPTY_TIE_BREAKER)
}

fn highest_letter(word: &str) -> char {
    word.chars().max().unwrap_or(EMPTY_TIE_BREAKER)
}
