//! Duel command
//!
//! Reads word pairs from a stream, decides each duel and writes a report per
//! pair as it goes.

use crate::core::{Category, ClassifiedWord, Verdict, compare};
use crate::input::{InputError, PairReader, WordPair};
use crate::output::display::format_duel_report;
use crate::output::formatters::format_transcript;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Configuration for a duel run
#[derive(Debug, Clone, Copy, Default)]
pub struct DuelConfig {
    /// Reproduce the uncoloured Black/White transcript
    pub plain: bool,
    /// Fail on a trailing unpaired word instead of ignoring it
    pub strict: bool,
}

impl DuelConfig {
    #[must_use]
    pub const fn new(plain: bool, strict: bool) -> Self {
        Self { plain, strict }
    }
}

/// Both classified words of a duel and who won
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelReport {
    pub first: ClassifiedWord,
    pub second: ClassifiedWord,
    pub verdict: Verdict,
}

/// Running tally over many duels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuelSummary {
    pub duels: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
    /// How many words (from either side) landed in each category
    pub by_category: BTreeMap<Category, usize>,
}

impl DuelSummary {
    /// Add one duel to the tally
    pub fn record(&mut self, report: &DuelReport) {
        self.duels += 1;
        match report.verdict {
            Verdict::First => self.first_wins += 1,
            Verdict::Second => self.second_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
        for word in [&report.first, &report.second] {
            *self.by_category.entry(word.category()).or_insert(0) += 1;
        }
    }

    /// Total number of words seen (two per duel)
    #[must_use]
    pub const fn words(&self) -> usize {
        self.duels * 2
    }
}

/// Classify both words of a pair and decide the duel
///
/// # Examples
/// ```
/// use word_duel::commands::duel;
/// use word_duel::core::Verdict;
/// use word_duel::input::WordPair;
///
/// let report = duel(&WordPair::new("level", "radar"));
/// assert_eq!(report.verdict, Verdict::Second);
/// ```
#[must_use]
pub fn duel(pair: &WordPair) -> DuelReport {
    let first = ClassifiedWord::new(pair.first.as_str());
    let second = ClassifiedWord::new(pair.second.as_str());
    let verdict = Verdict::from(compare(&first, &second));

    tracing::debug!(
        first = %first,
        second = %second,
        first_category = %first.category(),
        second_category = %second.category(),
        ?verdict,
        "duel decided"
    );

    DuelReport {
        first,
        second,
        verdict,
    }
}

/// Run every duel found in `input`, writing one report per pair to `out`
///
/// Pairs are processed as they are read, so interactive input gets an answer
/// after each pair.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails, or if
/// `config.strict` is set and the input ends on an unpaired word.
pub fn run_duels<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    config: DuelConfig,
) -> Result<DuelSummary, InputError> {
    let mut summary = DuelSummary::default();

    for pair in PairReader::new(input).strict(config.strict) {
        let report = duel(&pair?);

        let rendered = if config.plain {
            format_transcript(&report)
        } else {
            format_duel_report(&report)
        };
        writeln!(out, "{rendered}")?;
        out.flush()?;

        summary.record(&report);
    }

    tracing::info!(
        duels = summary.duels,
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        ties = summary.ties,
        "duel run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_plain(input: &str) -> (String, DuelSummary) {
        let mut out = Vec::new();
        let summary = run_duels(input.as_bytes(), &mut out, DuelConfig::new(true, false)).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn duel_quintessential_beats_duo() {
        let report = duel(&WordPair::new("aaaaa", "hello"));
        assert_eq!(report.first.category(), Category::Quintessential);
        assert_eq!(report.second.category(), Category::Duo);
        assert_eq!(report.verdict, Verdict::First);
    }

    #[test]
    fn duel_tie() {
        let report = duel(&WordPair::new("baacd", "baace"));
        assert_eq!(report.verdict, Verdict::Tie);
    }

    #[test]
    fn plain_transcript_matches_classic_format() {
        let (out, _) = run_plain("level radar\n");
        let expected = "Black word: level - Category: PALINDROME, Tie-breaker: l\n\
                        White word: radar - Category: PALINDROME, Tie-breaker: r\n\
                        White wins.\n\
                        --------\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn plain_transcript_reports_each_pair() {
        let (out, summary) = run_plain("aaaaa hello\nabc ace\nbaacd baace\n");

        assert!(out.contains("Black word: aaaaa - Category: QUINTESSENTIAL, Tie-breaker: a"));
        assert!(out.contains("White word: ace - Category: ORDERED, Tie-breaker: e"));
        assert_eq!(out.matches("--------").count(), 3);
        assert_eq!(out.matches("Black wins.").count(), 1);
        assert_eq!(out.matches("White wins.").count(), 1);
        assert_eq!(out.matches("Tie.").count(), 1);

        assert_eq!(summary.duels, 3);
        assert_eq!(summary.first_wins, 1);
        assert_eq!(summary.second_wins, 1);
        assert_eq!(summary.ties, 1);
    }

    #[test]
    fn summary_counts_categories_of_both_sides() {
        let (_, summary) = run_plain("aaaaa hello abc ace");

        assert_eq!(summary.words(), 4);
        assert_eq!(summary.by_category.get(&Category::Quintessential), Some(&1));
        assert_eq!(summary.by_category.get(&Category::Duo), Some(&1));
        assert_eq!(summary.by_category.get(&Category::Ordered), Some(&2));
        assert_eq!(summary.by_category.get(&Category::Standard), None);
    }

    #[test]
    fn unpaired_word_ignored_unless_strict() {
        let (out, summary) = run_plain("abc ace lonely");
        assert_eq!(summary.duels, 1);
        assert!(!out.contains("lonely"));

        let mut sink = Vec::new();
        let result = run_duels(
            "abc ace lonely".as_bytes(),
            &mut sink,
            DuelConfig::new(true, true),
        );
        assert!(matches!(result, Err(InputError::UnpairedWord { .. })));
    }

    #[test]
    fn empty_input_runs_no_duels() {
        let (out, summary) = run_plain("");
        assert!(out.is_empty());
        assert_eq!(summary, DuelSummary::default());
    }
}
