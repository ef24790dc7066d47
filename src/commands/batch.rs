//! Batch command
//!
//! Resolves a file of duels in parallel and tallies the outcomes.

use super::duel::{DuelReport, DuelSummary, duel};
use crate::input::WordPair;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a batch run
pub struct BatchResult {
    pub summary: DuelSummary,
    pub reports: Vec<DuelReport>,
    pub duration: Duration,
    pub duels_per_second: f64,
}

/// Decide every pair in parallel
///
/// Reports come back in input order. Set `show_progress` to draw a progress
/// bar on stderr.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_batch(pairs: &[WordPair], show_progress: bool) -> BatchResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<DuelReport> = pairs
        .par_iter()
        .map(|pair| {
            let report = duel(pair);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut summary = DuelSummary::default();
    for report in &reports {
        summary.record(report);
    }

    let duration = start.elapsed();
    let secs = duration.as_secs_f64();
    let duels_per_second = if secs > 0.0 {
        summary.duels as f64 / secs
    } else {
        0.0
    };

    tracing::info!(
        duels = summary.duels,
        elapsed_ms = duration.as_millis() as u64,
        "batch complete"
    );

    BatchResult {
        summary,
        reports,
        duration,
        duels_per_second,
    }
}
