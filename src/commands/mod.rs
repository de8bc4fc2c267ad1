//! Command implementations

pub mod analyze;
pub mod play;
pub mod simulate;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use play::{InteractiveEvaluation, run_play};
pub use simulate::{ProgressReporter, SimulateOptions, progress_bar, run_simulation};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
