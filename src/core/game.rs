//! Per-game state machine
//!
//! ```text
//! NoGuesses ──play──▶ AwaitingFeedback ──play──▶ … ──▶ Solved | Exhausted
//! ```
//! A game is `Solved` as soon as an all-correct pattern is recorded and
//! `Exhausted` once the guess budget is spent without one. Both are final.

use super::board::{Board, GuessRecord};
use crate::error::SolverError;

/// Guess budget of a standard game
pub const MAX_GUESSES: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    NoGuesses,
    AwaitingFeedback,
    Solved,
    Exhausted,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// One game: its board plus the state derived from it
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
    max_guesses: usize,
}

impl Game {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_guesses(MAX_GUESSES)
    }

    #[must_use]
    pub const fn with_max_guesses(max_guesses: usize) -> Self {
        Self {
            board: Board::new(),
            state: GameState::NoGuesses,
            max_guesses,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Guesses played so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Append an evaluated guess and advance the state
    ///
    /// # Errors
    /// Returns `SolverError::GameOver` if the game already reached a
    /// terminal state.
    pub fn play(&mut self, record: GuessRecord) -> Result<GameState, SolverError> {
        if self.state.is_terminal() {
            return Err(SolverError::GameOver);
        }

        let solved = record.pattern.is_perfect();
        self.board.push(record);

        self.state = if solved {
            GameState::Solved
        } else if self.board.len() >= self.max_guesses {
            GameState::Exhausted
        } else {
            GameState::AwaitingFeedback
        };

        Ok(self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackPattern, Word};

    fn record(guess: &str, answer: &str) -> GuessRecord {
        GuessRecord::evaluated(Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn starts_with_no_guesses() {
        let game = Game::new();
        assert_eq!(game.state(), GameState::NoGuesses);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.max_guesses(), 6);
    }

    #[test]
    fn solves_on_perfect_pattern() {
        let mut game = Game::new();
        assert_eq!(
            game.play(record("crane", "trace")).unwrap(),
            GameState::AwaitingFeedback
        );
        assert_eq!(game.play(record("trace", "trace")).unwrap(), GameState::Solved);
        assert_eq!(game.attempts(), 2);
    }

    #[test]
    fn exhausts_after_budget() {
        let mut game = Game::new();
        for _ in 0..5 {
            assert_eq!(
                game.play(record("crane", "trace")).unwrap(),
                GameState::AwaitingFeedback
            );
        }
        assert_eq!(game.play(record("crane", "trace")).unwrap(), GameState::Exhausted);
    }

    #[test]
    fn solving_on_last_guess_is_solved() {
        let mut game = Game::with_max_guesses(2);
        game.play(record("crane", "trace")).unwrap();
        assert_eq!(game.play(record("trace", "trace")).unwrap(), GameState::Solved);
    }

    #[test]
    fn terminal_states_reject_guesses() {
        let mut game = Game::with_max_guesses(1);
        let word = Word::new("crane").unwrap();
        game.play(GuessRecord::new(word.clone(), FeedbackPattern::PERFECT))
            .unwrap();
        assert!(matches!(
            game.play(GuessRecord::new(word, FeedbackPattern::NONE)),
            Err(SolverError::GameOver)
        ));
        assert_eq!(game.attempts(), 1);
    }
}
