//! Main solver interface

use super::constraints::{ConstraintSet, aggregate};
use super::filter::{CandidateSet, filter};
use super::strategy::{ScoredGuess, Strategy, rank};
use crate::core::{Board, Word};
use crate::error::SolverError;
use log::{debug, warn};
use rand::Rng;

/// Default length of the ranked guess list
pub const DEFAULT_TOP_K: usize = 20;

/// Main solver
///
/// Holds the read-only word universe and a strategy. Every call rebuilds
/// constraints and candidates from the board it is given, so one solver can
/// serve any number of independent games.
#[derive(Debug, Clone)]
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    universe: &'a [Word],
    top_k: usize,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over `universe`
    pub const fn new(strategy: S, universe: &'a [Word]) -> Self {
        Self {
            strategy,
            universe,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Limit ranked lists to `top_k` entries (at least one)
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.max(1);
        self
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn universe(&self) -> &'a [Word] {
        self.universe
    }

    pub const fn top_k(&self) -> usize {
        self.top_k
    }

    /// Constraints implied by `board`
    pub fn constraints(&self, board: &Board) -> ConstraintSet {
        aggregate(board)
    }

    /// Universe words consistent with every record on `board`
    pub fn candidates(&self, board: &Board) -> CandidateSet<'a> {
        filter(self.universe, &aggregate(board))
    }

    /// Count how many candidates remain given the board
    pub fn count_candidates(&self, board: &Board) -> usize {
        self.candidates(board).len()
    }

    /// Ranked guesses for the next turn, best first
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` when no word is consistent
    /// with the board, which means the feedback contradicts itself.
    pub fn rank_guesses<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Vec<ScoredGuess>, SolverError> {
        let candidates = self.candidates(board);

        if candidates.is_empty() {
            warn!(
                "no candidates left after {} guesses ({})",
                board.len(),
                aggregate(board)
            );
            return Err(SolverError::EmptyCandidateSet);
        }

        debug!(
            "turn {}: {} candidates, strategy {}",
            board.len() + 1,
            candidates.len(),
            self.strategy.name()
        );

        let scored = self
            .strategy
            .score_guesses(self.universe, &candidates, board, rng);
        Ok(rank(scored, self.top_k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackPattern, GuessRecord};
    use crate::solver::strategy::{EntropyStrategy, StrategyType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn universe() -> Vec<Word> {
        ["crane", "slate", "trace", "plate", "irate", "grace", "brace"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn first_turn_offers_openers() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words);
        let mut rng = StdRng::seed_from_u64(0);

        let ranked = solver.rank_guesses(&Board::new(), &mut rng).unwrap();
        let texts: Vec<&str> = ranked.iter().map(|g| g.word.text()).collect();
        assert_eq!(texts, vec!["slate", "crane", "trace", "irate"]);
    }

    #[test]
    fn ranked_guesses_are_candidates_sorted_by_entropy() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words);
        let mut rng = StdRng::seed_from_u64(0);
        let answer = Word::new("grace").unwrap();
        let board: Board = [GuessRecord::evaluated(Word::new("slate").unwrap(), &answer)]
            .into_iter()
            .collect();

        let candidates = solver.candidates(&board);
        let ranked = solver.rank_guesses(&board, &mut rng).unwrap();

        assert_eq!(ranked.len(), candidates.len());
        assert!(ranked.iter().all(|g| candidates.contains(&&g.word)));
        assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
        assert!(candidates.iter().any(|w| w.text() == "grace"));
    }

    #[test]
    fn top_k_truncates() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words).with_top_k(2);
        let mut rng = StdRng::seed_from_u64(0);

        let ranked = solver.rank_guesses(&Board::new(), &mut rng).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(solver.top_k(), 2);
    }

    #[test]
    fn contradictory_board_reports_empty_candidate_set() {
        let words = universe();
        let solver = Solver::new(StrategyType::default(), &words);
        let mut rng = StdRng::seed_from_u64(0);

        // claim zzzzz was all correct
        let board: Board = [GuessRecord::new(
            Word::new("zzzzz").unwrap(),
            FeedbackPattern::PERFECT,
        )]
        .into_iter()
        .collect();

        assert_eq!(solver.count_candidates(&board), 0);
        assert_eq!(
            solver.rank_guesses(&board, &mut rng),
            Err(SolverError::EmptyCandidateSet)
        );
    }

    #[test]
    fn candidate_count_never_grows() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words);
        let answer = Word::new("brace").unwrap();

        let mut board = Board::new();
        let mut previous = solver.count_candidates(&board);
        for guess in ["slate", "crane", "grace", "brace"] {
            board.push(GuessRecord::evaluated(Word::new(guess).unwrap(), &answer));
            let now = solver.count_candidates(&board);
            assert!(now <= previous);
            assert!(solver.candidates(&board).iter().any(|w| **w == answer));
            previous = now;
        }
        assert_eq!(previous, 1);
    }
}
