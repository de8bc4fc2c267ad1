//! Reporting providers
//!
//! Reporters observe a run: they are told about every turn and every
//! finished game, and nothing they do feeds back into the solver.

use super::runner::GameResult;
use super::stats::RunStats;
use crate::core::{Board, GameState, Word};
use crate::solver::ScoredGuess;
use anyhow::Result;

/// Snapshot handed to a reporter after each turn
#[derive(Debug)]
pub struct TurnReport<'a> {
    /// 0-based index of the game within the run
    pub case: usize,
    pub board: &'a Board,
    pub state: GameState,
    /// Hidden answer, when the evaluation provider knows it
    pub answer: Option<&'a Word>,
    /// Ranked list the guess was chosen from
    pub ranked: &'a [ScoredGuess],
    /// Tallies of the games finished before this one
    pub stats: &'a RunStats,
}

impl TurnReport<'_> {
    /// Guesses made so far in this game
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.len()
    }
}

/// Observer of a simulation run
pub trait Reporter {
    /// Called after every evaluated guess
    ///
    /// # Errors
    /// Returns rendering or I/O failures.
    fn report(&mut self, turn: &TurnReport<'_>) -> Result<()>;

    /// Called once a game is over, with tallies that include it
    ///
    /// # Errors
    /// Returns rendering or I/O failures.
    fn finish_game(&mut self, _case: usize, _result: &GameResult, _stats: &RunStats) -> Result<()> {
        Ok(())
    }

    /// True when the user asked to stop the run early
    fn cancelled(&self) -> bool {
        false
    }
}

/// Reporter that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _turn: &TurnReport<'_>) -> Result<()> {
        Ok(())
    }
}

/// Reporter that keeps every snapshot it sees, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    /// `(case, attempts, state)` per reported turn
    pub turns: Vec<(usize, usize, GameState)>,
    /// Cases whose game finished, in finishing order
    pub finished: Vec<usize>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, turn: &TurnReport<'_>) -> Result<()> {
        self.turns.push((turn.case, turn.attempts(), turn.state));
        Ok(())
    }

    fn finish_game(&mut self, case: usize, _result: &GameResult, _stats: &RunStats) -> Result<()> {
        self.finished.push(case);
        Ok(())
    }
}
