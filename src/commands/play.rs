//! Interactive play mode
//!
//! The solver suggests guesses for a game played elsewhere; the user types
//! the word they played and the feedback they got.

use crate::core::{FeedbackPattern, Word};
use crate::simulation::{Evaluation, GameResult, NullReporter, RunStats, play_game};
use crate::solver::{ScoredGuess, Solver, Strategy};
use anyhow::{Result, bail};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Evaluation provider backed by a human at a terminal
pub struct InteractiveEvaluation<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> InteractiveEvaluation<I, O> {
    pub const fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Prompt and read one trimmed line, `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_ranked(&mut self, ranked: &[ScoredGuess]) -> Result<()> {
        writeln!(self.output, "\nSuggestions:")?;
        for (i, guess) in ranked.iter().enumerate() {
            writeln!(
                self.output,
                "  {:>2}. {} {:.3}",
                i + 1,
                guess.word.text().to_uppercase(),
                guess.score
            )?;
        }
        Ok(())
    }
}

impl<I: BufRead, O: Write> Evaluation for InteractiveEvaluation<I, O> {
    fn choose_guess<R: Rng + ?Sized>(
        &mut self,
        ranked: &[ScoredGuess],
        _rng: &mut R,
    ) -> Result<Option<Word>> {
        self.print_ranked(ranked)?;

        loop {
            let Some(input) = self.prompt("Your guess (blank = top, 'quit' to stop)")? else {
                return Ok(None);
            };
            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(None),
                "" => return Ok(ranked.first().map(|g| g.word.clone())),
                text => match Word::new(text) {
                    Ok(word) => return Ok(Some(word)),
                    Err(e) => writeln!(self.output, "{} {e}", "Invalid word:".red())?,
                },
            }
        }
    }

    fn feedback(&mut self, guess: &Word) -> Result<FeedbackPattern> {
        loop {
            let prompt = format!(
                "Feedback for {} (G/Y/-, '1 0 -1 ...', or 'win')",
                guess.text().to_uppercase()
            );
            let Some(input) = self.prompt(&prompt)? else {
                bail!("input closed while waiting for feedback");
            };
            if matches!(input.to_lowercase().as_str(), "win" | "correct" | "solved") {
                return Ok(FeedbackPattern::PERFECT);
            }
            match FeedbackPattern::parse(&input) {
                Ok(pattern) => {
                    writeln!(self.output, "  {} {}", guess.text().to_uppercase(), pattern)?;
                    return Ok(pattern);
                }
                Err(e) => writeln!(self.output, "{} {e}", "Invalid pattern:".red())?,
            }
        }
    }
}

/// Play interactive games until the user stops
///
/// # Errors
///
/// Returns an error on I/O failure or when input ends mid-turn.
pub fn run_play<S, R, I, O>(
    solver: &Solver<'_, S>,
    rng: &mut R,
    evaluation: &mut InteractiveEvaluation<I, O>,
) -> Result<RunStats>
where
    S: Strategy,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(
        evaluation.output,
        "Interactive mode: I suggest guesses, you report the feedback."
    )?;

    let mut stats = RunStats::new(solver.strategy().name());

    loop {
        let result = play_game(
            solver,
            &mut *evaluation,
            rng,
            &mut NullReporter,
            stats.cases,
            &stats,
            crate::core::MAX_GUESSES,
        )?;
        stats.record(&result);
        print_outcome(&mut evaluation.output, &result)?;

        if result.is_abandoned() && result.board.is_empty() {
            break;
        }
        match evaluation.prompt("Play again? (y/n)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "y" | "yes") => {}
            _ => break,
        }
    }

    Ok(stats)
}

fn print_outcome<O: Write>(output: &mut O, result: &GameResult) -> Result<()> {
    if result.is_solved() {
        writeln!(
            output,
            "{}",
            format!("Solved in {} guesses!", result.board.len())
                .green()
                .bold()
        )?;
    } else if result.is_abandoned() {
        writeln!(output, "{}", "Game abandoned.".yellow())?;
    } else {
        writeln!(output, "{}", "Out of guesses.".red())?;
    }
    Ok(())
}
