//! Formatting utilities for terminal output

use crate::core::{FeedbackSymbol, GuessRecord};
use colored::{ColoredString, Colorize};

/// Width of the shot-distribution bars
pub const BAR_WIDTH: usize = 40;

/// A guess with each letter colored by its feedback
#[must_use]
pub fn colored_guess(record: &GuessRecord) -> String {
    record
        .guess
        .text()
        .to_uppercase()
        .chars()
        .zip(record.pattern.symbols())
        .map(|(letter, symbol)| colored_letter(letter, symbol).to_string())
        .collect()
}

fn colored_letter(letter: char, symbol: FeedbackSymbol) -> ColoredString {
    let cell = format!(" {letter} ");
    match symbol {
        FeedbackSymbol::Correct => cell.black().on_green().bold(),
        FeedbackSymbol::Present => cell.black().on_yellow().bold(),
        FeedbackSymbol::Absent => cell.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the 243-pattern maximum
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 243_f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Bar for one row of a distribution, scaled to the largest row
///
/// Non-empty rows always get at least one block.
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> (usize, usize) {
    if max_count == 0 {
        return (0, width);
    }
    let filled = (count * width / max_count).max(usize::from(count > 0));
    (filled, width.saturating_sub(filled))
}

/// Label of a shot-distribution row
#[must_use]
pub fn shot_label(index: usize, rows: usize) -> String {
    if index + 1 == rows {
        "X".to_string()
    } else {
        (index + 1).to_string()
    }
}
