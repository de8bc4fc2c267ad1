//! Simulation of many games against drawn answers

pub mod evaluation;
pub mod report;
pub mod runner;
pub mod stats;

use crate::core::MAX_GUESSES;
use std::time::Duration;

pub use evaluation::{AutoEvaluation, Evaluation, GuessPolicy};
pub use report::{NullReporter, RecordingReporter, Reporter, TurnReport};
pub use runner::{
    GameResult, answers_for, draw_answers, game_rng, play_game, run_parallel, run_sequential,
};
pub use stats::{RunStats, UNSOLVED_SHOTS};

/// Default number of games per run
pub const DEFAULT_CASES: usize = 100;

/// Settings of one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub cases: usize,
    /// Seeds the answer draw and every per-game random source
    pub seed: u64,
    pub max_guesses: usize,
    pub policy: GuessPolicy,
    /// Pause between games (sequential runs only)
    pub interval: Duration,
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cases: DEFAULT_CASES,
            seed: 0,
            max_guesses: MAX_GUESSES,
            policy: GuessPolicy::Best,
            interval: Duration::ZERO,
            parallel: false,
        }
    }
}
