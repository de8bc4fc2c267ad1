//! Core domain types for Wordle
//!
//! Words, letter-count vectors, feedback, boards and the per-game state
//! machine. Everything here is pure and free of I/O.

mod board;
mod feedback;
mod game;
mod letters;
mod word;

pub use board::{Board, GuessRecord};
pub use feedback::{FeedbackPattern, FeedbackSymbol, PatternError, evaluate};
pub use game::{Game, GameState, MAX_GUESSES};
pub use letters::{ALPHABET_SIZE, LetterVector, is_within, vector_of};
pub use word::{WORD_LENGTH, Word, WordError};
