//! Wordle Simulator
//!
//! Simulates Wordle games to compare guessing strategies: constraint
//! filtering of a word universe plus entropy-ranked guess selection.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_sim::core::{Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("trace").unwrap();
//!
//! let pattern = evaluate(&guess, &answer);
//! println!("{pattern}");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Constraint filtering and guess ranking
pub mod solver;

// Game loop, evaluation and reporting providers
pub mod simulation;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Live simulation dashboard
pub mod dashboard;
