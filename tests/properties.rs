//! Property-based tests for the classifier and comparator
//!
//! Uses proptest for generative testing with random words.

use proptest::prelude::*;
use std::cmp::Ordering;
use word_duel::core::{
    Category, EMPTY_TIE_BREAKER, Verdict, classify, compare, matching_categories,
};

/// Short words over a small alphabet so repeats and palindromes are common
fn small_alphabet_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'A', 'z']), 0..12)
        .prop_map(|chars| chars.into_iter().collect())
}

fn any_word() -> impl Strategy<Value = String> {
    prop_oneof![small_alphabet_word(), "\\PC{0,16}"]
}

// ============================================================================
// Classifier invariants
// ============================================================================

proptest! {
    #[test]
    fn classify_is_deterministic(word in any_word()) {
        prop_assert_eq!(classify(&word), classify(&word));
    }

    #[test]
    fn classify_keeps_text_and_length(word in any_word()) {
        let classified = classify(&word);
        prop_assert_eq!(classified.text(), word.as_str());
        prop_assert_eq!(classified.length(), word.chars().count());
    }

    #[test]
    fn tie_breaker_comes_from_word(word in any_word()) {
        let classified = classify(&word);
        if word.is_empty() {
            prop_assert_eq!(classified.tie_breaker(), EMPTY_TIE_BREAKER);
        } else {
            prop_assert!(word.contains(classified.tie_breaker()));
        }
    }

    #[test]
    fn assigned_category_is_highest_match(word in any_word()) {
        let matches = matching_categories(&word);
        prop_assert_eq!(matches.first().copied(), Some(classify(&word).category()));
        prop_assert_eq!(matches.last().copied(), Some(Category::Standard));

        // Strictly descending rank
        for pair in matches.windows(2) {
            prop_assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn five_of_a_letter_is_always_quintessential(
        prefix in small_alphabet_word(),
        letter in prop::sample::select(vec!['a', 'q', 'Z']),
    ) {
        let word: String = prefix.chars().chain(std::iter::repeat_n(letter, 5)).collect();
        prop_assert_eq!(classify(&word).category(), Category::Quintessential);
    }

    #[test]
    fn sorted_short_words_are_ordered_or_higher(mut chars in prop::collection::vec(any::<char>(), 0..5)) {
        chars.sort_unstable();
        let word: String = chars.into_iter().collect();
        prop_assert!(classify(&word).category() >= Category::Ordered);
    }
}

// ============================================================================
// Comparator invariants
// ============================================================================

proptest! {
    #[test]
    fn compare_is_antisymmetric(a in any_word(), b in any_word()) {
        let (a, b) = (classify(&a), classify(&b));
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    }

    #[test]
    fn compare_is_reflexive(word in any_word()) {
        let classified = classify(&word);
        prop_assert_eq!(compare(&classified, &classified), Ordering::Equal);
    }

    #[test]
    fn higher_category_always_wins(a in any_word(), b in any_word()) {
        let (a, b) = (classify(&a), classify(&b));
        if a.category() != b.category() {
            prop_assert_eq!(compare(&a, &b), a.category().cmp(&b.category()));
        }
    }

    #[test]
    fn compare_is_transitive(a in small_alphabet_word(), b in small_alphabet_word(), c in small_alphabet_word()) {
        let (a, b, c) = (classify(&a), classify(&b), classify(&c));
        if compare(&a, &b) != Ordering::Less && compare(&b, &c) != Ordering::Less {
            prop_assert_ne!(compare(&a, &c), Ordering::Less);
        }
    }

    #[test]
    fn verdict_swaps_with_order(a in any_word(), b in any_word()) {
        prop_assert_eq!(Verdict::between(&a, &b), Verdict::between(&b, &a).reversed());
    }
}

// ============================================================================
// Reference duels
// ============================================================================

#[test]
fn quintessential_beats_every_lower_category() {
    let strongest = classify("aaaaa");
    for word in ["racecar", "abc", "seeker", "hello", "crane", ""] {
        assert_eq!(compare(&strongest, &classify(word)), Ordering::Greater, "{word}");
    }
}

#[test]
fn reference_duels() {
    let cases = [
        ("aaaaa", "hello", Verdict::First),
        ("level", "radar", Verdict::Second),
        ("abc", "ace", Verdict::Second),
        ("aabbc", "xyz", Verdict::First),
        ("abab", "xyz", Verdict::Second),
        ("baacd", "baace", Verdict::Tie),
        ("aabcd", "aabce", Verdict::Second),
    ];

    for (first, second, expected) in cases {
        assert_eq!(Verdict::between(first, second), expected, "{first} vs {second}");
    }
}
