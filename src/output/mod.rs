//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    ConsoleReporter, print_analysis_result, print_board, print_solve_result,
    print_summary,
};
