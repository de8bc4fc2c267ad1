//! Word solving command
//!
//! Plays one automatic game against a known answer and records how each
//! guess narrowed the candidates.

use crate::core::{Game, GuessRecord, MAX_GUESSES, Word};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Solver, Strategy};
use anyhow::{Context, Result};
use rand::Rng;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub record: GuessRecord,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy of the guess against the candidates it was played into
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `config.target`, always playing the top-ranked guess
///
/// # Errors
///
/// Returns an error if the target is not a valid word or feedback leaves
/// no candidates (the target is outside the universe).
pub fn solve_word<S: Strategy, R: Rng + ?Sized>(
    config: &SolveConfig,
    solver: &Solver<'_, S>,
    rng: &mut R,
) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .with_context(|| format!("invalid target word {:?}", config.target))?;

    let mut game = Game::with_max_guesses(config.max_guesses);
    let mut guesses = Vec::new();

    while !game.state().is_terminal() {
        let candidates = solver.candidates(game.board());
        let ranked = solver
            .rank_guesses(game.board(), rng)
            .with_context(|| format!("no candidates left for {target}"))?;
        let Some(best) = ranked.into_iter().next() else {
            break;
        };

        let (entropy, expected_remaining) = if candidates.len() > 1 {
            let metrics = calculate_metrics(&best.word, &candidates);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let record = GuessRecord::evaluated(best.word, &target);
        game.play(record.clone())?;

        guesses.push(GuessStep {
            record,
            candidates_before: candidates.len(),
            candidates_after: solver.count_candidates(game.board()),
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: game.board().is_solved(),
        guesses,
        target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::EntropyStrategy;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solve(target: &str, max_guesses: usize) -> Result<SolveResult> {
        let words = words_from_slice(&WORDS[..120]);
        let solver = Solver::new(EntropyStrategy, &words);
        let mut config = SolveConfig::new(target.to_string());
        config.max_guesses = max_guesses;
        solve_word(&config, &solver, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn solve_word_succeeds() {
        let result = solve("cable", MAX_GUESSES).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.last().unwrap().record.guess.text(), "cable");
    }

    #[test]
    fn solve_records_history() {
        let result = solve("below", MAX_GUESSES).unwrap();

        assert!(!result.guesses.is_empty());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        assert_eq!(result.guesses[0].record.guess.text(), "slate");
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        assert!(solve("zz", MAX_GUESSES).is_err());
    }

    #[test]
    fn solve_target_outside_universe_fails() {
        // either the candidates run dry or the guesses do
        assert!(solve("zzzzz", MAX_GUESSES).map_or(true, |r| !r.success));
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let result = solve("cable", 1).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }
}
