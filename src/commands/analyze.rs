//! Word analysis command
//!
//! Reports how well a word splits the whole universe as an opening guess.

use crate::core::Word;
use crate::solver::entropy::calculate_metrics;
use anyhow::{Context, Result, bail};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    /// Size of the largest feedback bucket
    pub worst_case: usize,
    /// Number of distinct feedback patterns
    pub buckets: usize,
    pub total_candidates: usize,
}

/// Analyze `word` against every word in `universe`
///
/// # Errors
///
/// Returns an error if the word is malformed or not in the universe.
pub fn analyze_word(word: &str, universe: &[Word]) -> Result<AnalysisResult> {
    let word = Word::new(word).with_context(|| format!("invalid word {word:?}"))?;

    if !universe.contains(&word) {
        bail!("word '{word}' not in word list");
    }

    let candidates: Vec<&Word> = universe.iter().collect();
    let metrics = calculate_metrics(&word, &candidates);

    Ok(AnalysisResult {
        word,
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        buckets: metrics.buckets,
        total_candidates: candidates.len(),
    })
}
