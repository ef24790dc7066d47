//! Display functions for command results

use super::formatters::{create_progress_bar, format_tie_breaker};
use crate::commands::{AnalysisResult, BatchResult, DuelReport, Standing};
use crate::core::{Category, ClassifiedWord, Verdict};
use colored::{ColoredString, Colorize};

fn category_colored(category: Category) -> ColoredString {
    let name = category.name();
    match category {
        Category::Quintessential => name.bright_magenta().bold(),
        Category::Palindrome => name.bright_cyan().bold(),
        Category::Ordered => name.bright_green(),
        Category::Trio => name.bright_yellow(),
        Category::Duo => name.yellow(),
        Category::Standard => name.white(),
    }
}

fn word_line(label: &str, word: &ClassifiedWord) -> String {
    format!(
        "  {label} {} {} (rank {}, tie-breaker {}, length {})",
        word.text().bright_white().bold(),
        category_colored(word.category()),
        word.category().rank(),
        format_tie_breaker(word.tie_breaker()).bright_yellow(),
        word.length()
    )
}

/// Render one duel as a coloured multi-line report
#[must_use]
pub fn format_duel_report(report: &DuelReport) -> String {
    let verdict = match report.verdict {
        Verdict::First => format!("🏆 {} wins", report.first.text())
            .green()
            .bold(),
        Verdict::Second => format!("🏆 {} wins", report.second.text())
            .green()
            .bold(),
        Verdict::Tie => "🤝 Tie".yellow().bold(),
    };

    format!(
        "{}\n{}\n{}\n  {verdict}",
        "─".repeat(60).cyan(),
        word_line("1st", &report.first),
        word_line("2nd", &report.second),
    )
}

/// Print the result of a single duel
pub fn print_duel_report(report: &DuelReport) {
    println!("{}", format_duel_report(report));
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let word = &result.word;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Category:     {} (rank {})",
        category_colored(word.category()),
        word.category().rank()
    );
    println!(
        "   Tie-breaker:  {}",
        format_tie_breaker(word.tie_breaker()).bright_yellow()
    );
    println!("   Length:       {}", word.length());

    let shadowed = result.shadowed();
    if shadowed.is_empty() {
        println!("   Also matches: {}", "nothing else".bright_black());
    } else {
        let names = shadowed
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("   Also matches: {}", names.bright_black());
    }
}

/// Print the result of a batch run
pub fn print_batch_result(result: &BatchResult) {
    let summary = &result.summary;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BATCH RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Duels:         {}", summary.duels);
    println!(
        "   First wins:    {}",
        summary.first_wins.to_string().green()
    );
    println!(
        "   Second wins:   {}",
        summary.second_wins.to_string().green()
    );
    println!("   Ties:          {}", summary.ties.to_string().yellow());
    println!("   Time taken:    {:.3}s", result.duration.as_secs_f64());
    println!("   Duels/second:  {:.1}", result.duels_per_second);

    println!("\n📈 {}", "Categories:".bright_cyan().bold());
    let total = summary.words();
    for category in Category::BY_PRIORITY {
        let count = summary.by_category.get(&category).copied().unwrap_or(0);
        let pct = if total > 0 {
            (count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:<15} {} {count:5} ({pct:5.1}%)",
            category.name(),
            bar.green()
        );
    }
}

/// Print a leaderboard
pub fn print_standings(standings: &[Standing]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for standing in standings {
        let word = &standing.word;
        println!(
            "  {:>4}. {:<24} {} (tie-breaker {}, length {})",
            standing.place.to_string().bright_black(),
            word.text().bright_white().bold(),
            category_colored(word.category()),
            format_tie_breaker(word.tie_breaker()),
            word.length()
        );
    }
}
