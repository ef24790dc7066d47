//! Word analysis command
//!
//! Shows how a single word classifies and which lower categories it shadows.

use crate::core::{Category, ClassifiedWord, matching_categories};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: ClassifiedWord,
    /// Every category whose rule the word meets, highest first
    pub matches: Vec<Category>,
}

impl AnalysisResult {
    /// Categories the word also satisfies but that lost on priority
    #[must_use]
    pub fn shadowed(&self) -> &[Category] {
        self.matches.get(1..).unwrap_or_default()
    }
}

/// Classify a word and collect every category it structurally satisfies
#[must_use]
pub fn analyze_word(word: &str) -> AnalysisResult {
    let classified = ClassifiedWord::new(word);
    let matches = matching_categories(word);
    tracing::debug!(
        word,
        category = %classified.category(),
        matched = matches.len(),
        "analyzed word"
    );

    AnalysisResult {
        word: classified,
        matches,
    }
}
