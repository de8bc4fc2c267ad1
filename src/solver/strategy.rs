//! Guess selection strategies
//!
//! Defines the Strategy trait, the closed set of strategies the simulator
//! knows, and the ranking step that orders scored guesses.

use crate::core::{Board, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::fmt;

/// Opening guesses played on an empty board by the entropy strategy
///
/// Scoring the whole universe before any feedback is the most expensive
/// turn of a game and its answer never changes, so it is skipped.
pub const OPENERS: &[&str] = &[
    "slate", "crane", "trace", "raise", "arise", "stare", "irate", "crate", "least", "adieu",
];

/// Default number of random picks offered by the random strategies
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// A word paired with its score for one turn
///
/// The score is entropy in bits for the entropy strategy and a uniform
/// probability for the non-informative ones.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

impl ScoredGuess {
    #[must_use]
    pub const fn new(word: Word, score: f64) -> Self {
        Self { word, score }
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3})", self.word, self.score)
    }
}

/// Order scored guesses by score, highest first, keeping at most `top_k`
///
/// The sort is stable, so equal scores keep their incoming order.
#[must_use]
pub fn rank(mut scored: Vec<ScoredGuess>, top_k: usize) -> Vec<ScoredGuess> {
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k);
    scored
}

/// A way of scoring the possible guesses for one turn
pub trait Strategy {
    /// Short name used on the command line and in reports
    fn name(&self) -> &'static str;

    /// Score guesses for the current turn (unordered)
    ///
    /// `candidates` are the universe words consistent with `board`.
    fn score_guesses<R: Rng + ?Sized>(
        &self,
        universe: &[Word],
        candidates: &[&Word],
        board: &Board,
        rng: &mut R,
    ) -> Vec<ScoredGuess>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Uniform sample of the whole universe, blind to feedback
    Random(RandomStrategy),
    /// Uniform sample of the words still consistent with the feedback
    RandomFiltered(RandomFilteredStrategy),
    /// Candidates ranked by expected information gain
    Entropy(EntropyStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::RandomFiltered(s) => s.name(),
            Self::Entropy(s) => s.name(),
        }
    }

    fn score_guesses<R: Rng + ?Sized>(
        &self,
        universe: &[Word],
        candidates: &[&Word],
        board: &Board,
        rng: &mut R,
    ) -> Vec<ScoredGuess> {
        match self {
            Self::Random(s) => s.score_guesses(universe, candidates, board, rng),
            Self::RandomFiltered(s) => s.score_guesses(universe, candidates, board, rng),
            Self::Entropy(s) => s.score_guesses(universe, candidates, board, rng),
        }
    }
}

impl StrategyType {
    /// Names accepted by [`StrategyType::from_name`]
    pub const NAMES: &'static [&'static str] = &["random", "random-filtered", "entropy"];

    /// Create strategy from name string
    ///
    /// Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random(RandomStrategy::default())),
            "random-filtered" | "filtered" => {
                Some(Self::RandomFiltered(RandomFilteredStrategy::default()))
            }
            "entropy" => Some(Self::Entropy(EntropyStrategy)),
            _ => None,
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Entropy(EntropyStrategy)
    }
}

/// Uniform sample of the universe
///
/// Every sampled word scores `1 / |universe|`.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    pub sample_size: usize,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn score_guesses<R: Rng + ?Sized>(
        &self,
        universe: &[Word],
        _candidates: &[&Word],
        _board: &Board,
        rng: &mut R,
    ) -> Vec<ScoredGuess> {
        uniform_sample(universe.iter(), universe.len(), self.sample_size, rng)
    }
}

/// Uniform sample of the consistent candidates
///
/// Every sampled word scores `1 / |candidates|`.
#[derive(Debug, Clone)]
pub struct RandomFilteredStrategy {
    pub sample_size: usize,
}

impl Default for RandomFilteredStrategy {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl Strategy for RandomFilteredStrategy {
    fn name(&self) -> &'static str {
        "random-filtered"
    }

    fn score_guesses<R: Rng + ?Sized>(
        &self,
        _universe: &[Word],
        candidates: &[&Word],
        _board: &Board,
        rng: &mut R,
    ) -> Vec<ScoredGuess> {
        uniform_sample(
            candidates.iter().copied(),
            candidates.len(),
            self.sample_size,
            rng,
        )
    }
}

fn uniform_sample<'a, I, R>(
    pool: I,
    pool_size: usize,
    amount: usize,
    rng: &mut R,
) -> Vec<ScoredGuess>
where
    I: Iterator<Item = &'a Word>,
    R: Rng + ?Sized,
{
    if pool_size == 0 {
        return Vec::new();
    }

    let pool: Vec<&Word> = pool.collect();
    let probability = 1.0 / pool_size as f64;

    pool.choose_multiple(rng, amount)
        .map(|&word| ScoredGuess::new(word.clone(), probability))
        .collect()
}

/// Pure entropy maximization over the consistent candidates
///
/// Only candidates are scored as guesses, never the rest of the universe.
/// On an empty board the fixed [`OPENERS`] are offered instead.
#[derive(Debug, Clone, Copy)]
pub struct EntropyStrategy;

impl EntropyStrategy {
    /// Opening guesses that exist in `universe`, in [`OPENERS`] order
    ///
    /// Falls back to the head of the universe when none of them do.
    #[must_use]
    pub fn openers(universe: &[Word]) -> Vec<&Word> {
        let known: Vec<&Word> = OPENERS
            .iter()
            .filter_map(|&text| universe.iter().find(|w| w.text() == text))
            .collect();

        if known.is_empty() {
            universe.iter().take(OPENERS.len()).collect()
        } else {
            known
        }
    }
}

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn score_guesses<R: Rng + ?Sized>(
        &self,
        universe: &[Word],
        candidates: &[&Word],
        board: &Board,
        _rng: &mut R,
    ) -> Vec<ScoredGuess> {
        if board.is_empty() {
            let openers = Self::openers(universe);
            let probability = 1.0 / openers.len().max(1) as f64;
            return openers
                .into_iter()
                .map(|word| ScoredGuess::new(word.clone(), probability))
                .collect();
        }

        candidates
            .par_iter()
            .map(|&guess| ScoredGuess::new(guess.clone(), super::entropy::score(guess, candidates)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GuessRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn scored(word: &str, score: f64) -> ScoredGuess {
        ScoredGuess::new(Word::new(word).unwrap(), score)
    }

    #[test]
    fn rank_orders_descending_and_truncates() {
        let ranked = rank(
            vec![scored("crane", 1.0), scored("slate", 3.0), scored("trace", 2.0)],
            2,
        );
        let order: Vec<&str> = ranked.iter().map(|g| g.word.text()).collect();
        assert_eq!(order, vec!["slate", "trace"]);
    }

    #[test]
    fn rank_ties_keep_incoming_order() {
        let ranked = rank(
            vec![scored("crane", 1.0), scored("slate", 1.0), scored("trace", 1.0)],
            10,
        );
        let order: Vec<&str> = ranked.iter().map(|g| g.word.text()).collect();
        assert_eq!(order, vec!["crane", "slate", "trace"]);
    }

    #[test]
    fn from_name_knows_every_listed_name() {
        for name in StrategyType::NAMES {
            let strategy = StrategyType::from_name(name).unwrap();
            assert_eq!(strategy.name(), *name);
        }
        assert!(StrategyType::from_name("minimax").is_none());
    }

    #[test]
    fn entropy_uses_openers_on_empty_board() {
        let universe = words(&["zesty", "crane", "slate", "pious"]);
        let mut rng = StdRng::seed_from_u64(1);
        let refs: Vec<&Word> = universe.iter().collect();

        let guesses = EntropyStrategy.score_guesses(&universe, &refs, &Board::new(), &mut rng);
        let order: Vec<&str> = guesses.iter().map(|g| g.word.text()).collect();
        assert_eq!(order, vec!["slate", "crane"]);
        assert!((guesses[0].score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn entropy_openers_fall_back_to_universe_head() {
        let universe = words(&["zesty", "pious"]);
        let openers = EntropyStrategy::openers(&universe);
        assert_eq!(openers.len(), 2);
        assert_eq!(openers[0].text(), "zesty");
    }

    #[test]
    fn entropy_scores_only_candidates() {
        let universe = words(&["crane", "slate", "plate", "trace", "irate"]);
        let answer = Word::new("plate").unwrap();
        let board: Board = [GuessRecord::evaluated(Word::new("crane").unwrap(), &answer)]
            .into_iter()
            .collect();
        let candidates = crate::solver::filter::candidates_for(&universe, &board);
        let mut rng = StdRng::seed_from_u64(1);

        let guesses = EntropyStrategy.score_guesses(&universe, &candidates, &board, &mut rng);
        let texts: Vec<&str> = guesses.iter().map(|g| g.word.text()).collect();
        assert_eq!(texts, vec!["slate", "plate"]);
        // slate and plate split each other perfectly
        assert!(guesses.iter().all(|g| (g.score - 1.0).abs() < 1e-9));
    }

    #[test]
    fn random_samples_are_distinct_and_uniform() {
        let universe = words(&["crane", "slate", "plate", "trace", "irate", "grace"]);
        let strategy = RandomStrategy { sample_size: 4 };
        let mut rng = StdRng::seed_from_u64(7);

        let guesses = strategy.score_guesses(&universe, &[], &Board::new(), &mut rng);
        assert_eq!(guesses.len(), 4);
        let mut texts: Vec<&str> = guesses.iter().map(|g| g.word.text()).collect();
        texts.sort_unstable();
        texts.dedup();
        assert_eq!(texts.len(), 4);
        assert!(guesses.iter().all(|g| (g.score - 1.0 / 6.0).abs() < 1e-9));
    }

    #[test]
    fn random_is_reproducible_under_seed() {
        let universe = words(&["crane", "slate", "plate", "trace", "irate", "grace"]);
        let strategy = StrategyType::Random(RandomStrategy { sample_size: 3 });

        let board = Board::new();
        let first = strategy.score_guesses(&universe, &[], &board, &mut StdRng::seed_from_u64(9));
        let second = strategy.score_guesses(&universe, &[], &board, &mut StdRng::seed_from_u64(9));
        assert_eq!(first, second);
    }

    #[test]
    fn random_filtered_samples_candidates_only() {
        let universe = words(&["crane", "slate", "plate"]);
        let candidates: Vec<&Word> = universe[1..].iter().collect();
        let strategy = RandomFilteredStrategy { sample_size: 10 };
        let mut rng = StdRng::seed_from_u64(3);

        let guesses = strategy.score_guesses(&universe, &candidates, &Board::new(), &mut rng);
        assert_eq!(guesses.len(), 2);
        assert!(guesses.iter().all(|g| g.word.text() != "crane"));
        assert!(guesses.iter().all(|g| (g.score - 0.5).abs() < 1e-9));
    }

    #[test]
    fn random_filtered_with_no_candidates_is_empty() {
        let universe = words(&["crane"]);
        let mut rng = StdRng::seed_from_u64(3);
        let strategy = RandomFilteredStrategy::default();
        let guesses = strategy.score_guesses(&universe, &[], &Board::new(), &mut rng);
        assert!(guesses.is_empty());
    }
}
