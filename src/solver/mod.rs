//! Wordle solving engine
//!
//! Constraint aggregation, candidate filtering, entropy scoring and guess
//! selection, tied together by [`Solver`].

pub mod constraints;
mod engine;
pub mod entropy;
pub mod filter;
pub mod strategy;

pub use constraints::{ConstraintSet, aggregate};
pub use engine::{DEFAULT_TOP_K, Solver};
pub use filter::{CandidateSet, candidates_for, filter, is_consistent};
pub use strategy::{
    EntropyStrategy, OPENERS, RandomFilteredStrategy, RandomStrategy, ScoredGuess, Strategy,
    StrategyType, rank,
};
