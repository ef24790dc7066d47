//! Formatting utilities for terminal output

use crate::commands::DuelReport;
use crate::core::{ClassifiedWord, EMPTY_TIE_BREAKER, Verdict};

/// Render a tie-breaker letter, with a placeholder for the empty word's sentinel
#[must_use]
pub fn format_tie_breaker(letter: char) -> String {
    if letter == EMPTY_TIE_BREAKER {
        "(none)".to_string()
    } else {
        letter.to_string()
    }
}

/// Verdict line of the classic transcript, first word playing Black
#[must_use]
pub const fn transcript_verdict(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::First => "Black wins.",
        Verdict::Second => "White wins.",
        Verdict::Tie => "Tie.",
    }
}

/// Render a duel in the classic uncoloured transcript format
///
/// ```text
/// Black word: level - Category: PALINDROME, Tie-breaker: l
/// White word: radar - Category: PALINDROME, Tie-breaker: r
/// White wins.
/// --------
/// ```
#[must_use]
pub fn format_transcript(report: &DuelReport) -> String {
    let line = |side: &str, word: &ClassifiedWord| {
        format!(
            "{side} word: {} - Category: {}, Tie-breaker: {}",
            word.text(),
            word.category(),
            format_tie_breaker(word.tie_breaker())
        )
    };

    format!(
        "{}\n{}\n{}\n--------",
        line("Black", &report.first),
        line("White", &report.second),
        transcript_verdict(report.verdict)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::duel;
    use crate::input::WordPair;

    #[test]
    fn transcript_tie() {
        let report = duel(&WordPair::new("baacd", "baace"));
        let text = format_transcript(&report);
        assert_eq!(
            text,
            "Black word: baacd - Category: DUO, Tie-breaker: a\n\
             White word: baace - Category: DUO, Tie-breaker: a\n\
             Tie.\n\
             --------"
        );
    }

    #[test]
    fn transcript_black_wins() {
        let report = duel(&WordPair::new("aaaaa", "hello"));
        let text = format_transcript(&report);
        assert!(text.ends_with("Black wins.\n--------"));
    }

    #[test]
    fn tie_breaker_placeholder_for_empty_word() {
        assert_eq!(format_tie_breaker(EMPTY_TIE_BREAKER), "(none)");
        assert_eq!(format_tie_breaker('q'), "q");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
