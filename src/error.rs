//! Error types produced by the solving core

use crate::core::{PatternError, WordError};
use thiserror::Error;

/// Errors the solver and game state machine can report
///
/// An exhausted guess budget is not an error; it is
/// [`GameState::Exhausted`](crate::core::GameState::Exhausted).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A word failed construction-time validation
    #[error("malformed word: {0}")]
    MalformedWord(#[from] WordError),

    /// Feedback text could not be read as a pattern
    #[error("malformed feedback: {0}")]
    MalformedPattern(#[from] PatternError),

    /// No word in the universe is consistent with the feedback so far
    #[error("no candidates are consistent with the feedback so far")]
    EmptyCandidateSet,

    /// A guess was submitted after the game finished
    #[error("the game is already over")]
    GameOver,
}
