//! Shannon entropy scoring of guesses
//!
//! Given a guess and the set of remaining candidate answers, buckets the
//! candidates by the feedback pattern the guess would produce and computes
//! the expected information gain.

use crate::core::{FeedbackPattern, Word, evaluate};
use rustc_hash::FxHashMap;

/// Entropy plus the partition figures used for reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Largest bucket (worst-case remaining candidates)
    pub max_partition: usize,
    /// Number of non-empty feedback buckets
    pub buckets: usize,
}

/// Expected information gain of playing `guess`, in bits
///
/// H(X) = -Σ p(x) * log₂(p(x)), where p(x) is the share of candidates that
/// would answer `guess` with pattern x. Empty and single-candidate sets
/// score 0.
///
/// # Examples
/// ```
/// use wordle_sim::core::Word;
/// use wordle_sim::solver::entropy::score;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let bits = score(&guess, &candidate_refs);
/// assert!(bits > 0.0 && bits <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn score(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.len() < 2 {
        return 0.0;
    }

    shannon_entropy(&group_by_pattern(guess, candidates))
}

/// Count the candidates behind each feedback pattern `guess` would produce
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &[&Word]) -> FxHashMap<FeedbackPattern, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = evaluate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a pattern distribution
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(
    pattern_counts: &std::collections::HashMap<FeedbackPattern, usize, S>,
) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy, expected remaining candidates and worst-case bucket for a guess
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            buckets: 0,
        };
    }

    let groups = group_by_pattern(guess, candidates);
    let total = candidates.len() as f64;

    let expected_remaining: f64 = groups
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&groups),
        expected_remaining,
        max_partition: groups.values().copied().max().unwrap_or(0),
        buckets: groups.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 patterns, each appears once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        for value in 0..4 {
            counts.insert(FeedbackPattern::new(value), 1);
        }

        assert!((shannon_entropy(&counts) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(FeedbackPattern::new(0), 10);

        assert!(shannon_entropy(&counts).abs() < 1e-9);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        let mut uniform = FxHashMap::default();
        let mut skewed = FxHashMap::default();
        for value in 0..4 {
            uniform.insert(FeedbackPattern::new(value), 25);
            skewed.insert(FeedbackPattern::new(value), if value == 0 { 97 } else { 1 });
        }

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<FeedbackPattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn score_single_candidate_is_zero() {
        let guess = Word::new("crane").unwrap();
        let only = words(&["slate"]);
        let refs: Vec<&Word> = only.iter().collect();
        assert!(score(&guess, &refs).abs() < f64::EPSILON);
        assert!(score(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn score_all_same_pattern_is_zero() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!(score(&guess, &refs).abs() < 1e-9);
    }

    #[test]
    fn score_perfect_split_is_one_bit() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        assert!((score(&guess, &refs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_bounded_by_log_of_candidates() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "plate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let bits = score(&guess, &refs);
        assert!(bits > 1.0);
        assert!(bits <= (refs.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn metrics_describe_partition() {
        // crane splits these four into slate+plate (--G-G), trace, irate
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "plate", "trace", "irate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let metrics = calculate_metrics(&guess, &refs);
        assert_eq!(metrics.buckets, 3);
        assert_eq!(metrics.max_partition, 2);
        // (2/4)·2 + (1/4)·1 + (1/4)·1
        assert!((metrics.expected_remaining - 1.5).abs() < 1e-9);
        assert!((metrics.entropy - 1.5).abs() < 1e-9);
    }
}
