//! The outer simulation loop
//!
//! Draws answers, plays each game through the state machine with an
//! evaluation provider, and tallies the outcomes. Games share nothing but
//! the read-only solver, so they can also run in parallel.

use super::evaluation::{AutoEvaluation, Evaluation};
use super::report::{NullReporter, Reporter, TurnReport};
use super::stats::{RunStats, UNSOLVED_SHOTS};
use super::SimulationConfig;
use crate::core::{Board, Game, GameState, GuessRecord, Word};
use crate::error::SolverError;
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::thread;

/// How one game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub board: Board,
    /// `Solved`, `Exhausted`, or a non-terminal state when the game was
    /// abandoned (contradictory feedback or the player quit)
    pub state: GameState,
    pub answer: Option<Word>,
}

impl GameResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == GameState::Solved
    }

    /// Guesses used when solved, [`UNSOLVED_SHOTS`] otherwise
    #[must_use]
    pub fn shots(&self) -> usize {
        if self.is_solved() {
            self.board.len()
        } else {
            UNSOLVED_SHOTS
        }
    }

    /// True when the game stopped before reaching a terminal state
    #[must_use]
    pub const fn is_abandoned(&self) -> bool {
        !self.state.is_terminal()
    }
}

/// Play one game to the end
///
/// Each turn asks the solver for a ranked list, lets `evaluation` pick a
/// word and supply feedback, and appends the record to the board. An empty
/// candidate set abandons the game rather than failing the run.
///
/// # Errors
/// Propagates evaluation and reporter failures.
pub fn play_game<S, E, P, R>(
    solver: &Solver<'_, S>,
    evaluation: &mut E,
    rng: &mut R,
    reporter: &mut P,
    case: usize,
    stats: &RunStats,
    max_guesses: usize,
) -> Result<GameResult>
where
    S: Strategy,
    E: Evaluation,
    P: Reporter + ?Sized,
    R: Rng + ?Sized,
{
    let mut game = Game::with_max_guesses(max_guesses);

    while !game.state().is_terminal() {
        let ranked = match solver.rank_guesses(game.board(), rng) {
            Ok(ranked) => ranked,
            Err(SolverError::EmptyCandidateSet) => {
                warn!("game {case} abandoned: feedback is contradictory");
                break;
            }
            Err(e) => return Err(e.into()),
        };

        let Some(guess) = evaluation.choose_guess(&ranked, rng)? else {
            debug!("game {case} abandoned by the evaluation provider");
            break;
        };
        let pattern = evaluation.feedback(&guess)?;
        debug!("game {case}: {guess} {}", pattern.to_code());
        game.play(GuessRecord::new(guess, pattern))?;

        reporter.report(&TurnReport {
            case,
            board: game.board(),
            state: game.state(),
            answer: evaluation.answer(),
            ranked: &ranked,
            stats,
        })?;
    }

    Ok(GameResult {
        board: game.board().clone(),
        state: game.state(),
        answer: evaluation.answer().cloned(),
    })
}

/// Draw `cases` answers from `universe`, with replacement
pub fn draw_answers<R: Rng + ?Sized>(universe: &[Word], cases: usize, rng: &mut R) -> Vec<Word> {
    (0..cases)
        .filter_map(|_| universe.choose(rng).cloned())
        .collect()
}

/// Random source for game `case` of a run seeded with `seed`
#[must_use]
pub fn game_rng(seed: u64, case: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(1).wrapping_add(case as u64))
}

/// Answers for a run, reproducible from `config.seed`
#[must_use]
pub fn answers_for(universe: &[Word], config: &SimulationConfig) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    draw_answers(universe, config.cases, &mut rng)
}

/// Play every answer in order, reporting each turn
///
/// # Errors
/// Propagates reporter failures.
pub fn run_sequential<S, P>(
    solver: &Solver<'_, S>,
    config: &SimulationConfig,
    answers: &[Word],
    reporter: &mut P,
) -> Result<RunStats>
where
    S: Strategy,
    P: Reporter + ?Sized,
{
    info!(
        "simulating {} games with strategy {} (seed {})",
        answers.len(),
        solver.strategy().name(),
        config.seed
    );

    let mut stats = RunStats::new(solver.strategy().name());

    for (case, answer) in answers.iter().enumerate() {
        if reporter.cancelled() {
            info!("run cancelled after {case} games");
            break;
        }

        let mut rng = game_rng(config.seed, case);
        let mut evaluation = AutoEvaluation::new(answer.clone(), config.policy);
        let result = play_game(
            solver,
            &mut evaluation,
            &mut rng,
            &mut *reporter,
            case,
            &stats,
            config.max_guesses,
        )?;

        stats.record(&result);
        reporter.finish_game(case, &result, &stats)?;

        if !config.interval.is_zero() {
            thread::sleep(config.interval);
        }
    }

    info!("finished: {}/{} solved", stats.successes, stats.cases);
    Ok(stats)
}

/// Play every answer as an independent task on the rayon pool
///
/// Per-game seeds match [`run_sequential`], so both produce the same
/// results; `progress` is advanced once per finished game.
///
/// # Errors
/// Propagates solver state-machine failures.
pub fn run_parallel<S>(
    solver: &Solver<'_, S>,
    config: &SimulationConfig,
    answers: &[Word],
    progress: Option<&ProgressBar>,
) -> Result<RunStats>
where
    S: Strategy + Sync,
{
    info!(
        "simulating {} games in parallel with strategy {} (seed {})",
        answers.len(),
        solver.strategy().name(),
        config.seed
    );

    let empty = RunStats::new(solver.strategy().name());
    let results: Vec<GameResult> = answers
        .par_iter()
        .enumerate()
        .map(|(case, answer)| {
            let mut rng = game_rng(config.seed, case);
            let mut evaluation = AutoEvaluation::new(answer.clone(), config.policy);
            let result = play_game(
                solver,
                &mut evaluation,
                &mut rng,
                &mut NullReporter,
                case,
                &empty,
                config.max_guesses,
            );
            if let Some(pb) = progress {
                pb.inc(1);
            }
            result
        })
        .collect::<Result<_>>()?;

    let mut stats = empty;
    for result in &results {
        stats.record(result);
    }

    info!("finished: {}/{} solved", stats.successes, stats.cases);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackPattern;
    use crate::simulation::evaluation::GuessPolicy;
    use crate::simulation::report::RecordingReporter;
    use crate::solver::{EntropyStrategy, StrategyType};

    fn universe() -> Vec<Word> {
        [
            "crane", "slate", "trace", "plate", "irate", "grace", "brace", "stare", "share",
            "spare", "scare", "snare",
        ]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect()
    }

    fn config(cases: usize, seed: u64) -> SimulationConfig {
        SimulationConfig {
            cases,
            seed,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn entropy_solves_small_universe() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words);
        let stats = run_sequential(&solver, &config(0, 0), &words, &mut NullReporter).unwrap();

        assert_eq!(stats.cases, words.len());
        assert_eq!(stats.failures, 0);
        assert!(stats.shots.iter().all(|&s| (1..=6).contains(&s)));
    }

    #[test]
    fn game_reports_every_turn_then_finishes() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words);
        let answers = vec![Word::new("snare").unwrap(), Word::new("plate").unwrap()];
        let mut reporter = RecordingReporter::default();

        let stats = run_sequential(&solver, &config(2, 0), &answers, &mut reporter).unwrap();

        assert_eq!(reporter.finished, vec![0, 1]);
        assert_eq!(reporter.turns.len(), stats.shots.iter().sum::<usize>());
        let last_of_first = reporter
            .turns
            .iter()
            .filter(|(case, _, _)| *case == 0)
            .last()
            .unwrap();
        assert_eq!(last_of_first.2, GameState::Solved);
    }

    #[test]
    fn parallel_matches_sequential() {
        let words = universe();
        let solver = Solver::new(StrategyType::default(), &words);
        let cfg = SimulationConfig {
            policy: GuessPolicy::Random,
            ..config(30, 11)
        };
        let answers = answers_for(&words, &cfg);

        let sequential = run_sequential(&solver, &cfg, &answers, &mut NullReporter).unwrap();
        let parallel = run_parallel(&solver, &cfg, &answers, None).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn answers_are_reproducible() {
        let words = universe();
        let cfg = config(25, 5);
        let first = answers_for(&words, &cfg);
        let second = answers_for(&words, &cfg);

        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
        assert!(first.iter().all(|a| words.contains(a)));
    }

    #[test]
    fn random_strategy_can_exhaust() {
        let words = universe();
        let solver = Solver::new(StrategyType::from_name("random").unwrap(), &words);
        let answers = answers_for(&words, &config(40, 3));
        let stats =
            run_sequential(&solver, &config(40, 3), &answers, &mut NullReporter).unwrap();

        assert_eq!(stats.successes + stats.failures, 40);
        assert!(stats.shots.iter().all(|&s| (1..=7).contains(&s)));
    }

    struct Liar;

    impl Evaluation for Liar {
        fn choose_guess<R: Rng + ?Sized>(
            &mut self,
            ranked: &[crate::solver::ScoredGuess],
            _rng: &mut R,
        ) -> Result<Option<Word>> {
            Ok(ranked.first().map(|g| g.word.clone()))
        }

        fn feedback(&mut self, _guess: &Word) -> Result<FeedbackPattern> {
            // no word in the universe fits this after any opener
            Ok(FeedbackPattern::parse("G----")?)
        }
    }

    #[test]
    fn contradictory_feedback_abandons_game() {
        let words = universe();
        let solver = Solver::new(EntropyStrategy, &words);
        let mut rng = StdRng::seed_from_u64(0);

        let result = play_game(
            &solver,
            &mut Liar,
            &mut rng,
            &mut NullReporter,
            0,
            &RunStats::default(),
            6,
        )
        .unwrap();

        assert!(result.is_abandoned());
        assert!(!result.is_solved());
        assert_eq!(result.shots(), UNSOLVED_SHOTS);
        assert!(result.answer.is_none());
    }
}
