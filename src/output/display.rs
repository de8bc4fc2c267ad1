//! Display functions for command results

use super::formatters::{BAR_WIDTH, colored_guess, distribution_bar, entropy_bar, shot_label};
use crate::commands::{AnalysisResult, SolveResult};
use crate::core::Board;
use crate::simulation::{GameResult, Reporter, RunStats, TurnReport};
use anyhow::Result;
use colored::Colorize;

/// Print a board, one colored row per guess
pub fn print_board(board: &Board) {
    for (i, record) in board.iter().enumerate() {
        println!(
            "  {} {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(record),
            record.pattern.to_emoji()
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.record),
            step.record.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} candidates", result.worst_case);
    println!("   Patterns:    {} distinct", result.buckets);
}

/// Print the summary of a simulation run
pub fn print_summary(stats: &RunStats, seed: u64) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Strategy:            {}", stats.strategy);
    println!("  Seed:                {seed}");
    println!("  Games played:        {}", stats.cases);
    println!(
        "  Solved:              {} {}",
        stats.successes,
        format!("({:.1}%)", stats.success_rate()).green()
    );
    if stats.failures > 0 {
        println!(
            "  Failed:              {} {}",
            stats.failures,
            format!("({:.1}%)", 100.0 - stats.success_rate()).red()
        );
    }
    match stats.average_shots() {
        Some(avg) => println!(
            "  Average shots:       {}",
            format!("{avg:.3}").bright_yellow().bold()
        ),
        None => println!("  Average shots:       -"),
    }
    if let Some((min, max)) = stats.shot_range() {
        println!("  Best / worst:        {min} / {max}");
    }

    println!("\n📈 {}", "Shot Distribution".bright_cyan().bold());
    let distribution = stats.distribution();
    let max_count = distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in distribution.iter().enumerate() {
        let (filled, empty) = distribution_bar(count, max_count, BAR_WIDTH);
        let percentage = if stats.cases > 0 {
            count as f64 / stats.cases as f64 * 100.0
        } else {
            0.0
        };
        let unsolved = i + 1 == distribution.len();
        let bar = if unsolved {
            "█".repeat(filled).red()
        } else {
            "█".repeat(filled).green()
        };
        println!(
            "  {}: {bar}{} {count:4} ({percentage:5.1}%)",
            shot_label(i, distribution.len()),
            "░".repeat(empty).bright_black()
        );
    }
}

/// Reporter printing each finished game, and each turn when verbose
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, turn: &TurnReport<'_>) -> Result<()> {
        if self.verbose {
            if let Some(record) = turn.board.last() {
                let top = turn
                    .ranked
                    .first()
                    .map_or_else(String::new, |g| format!("(top: {g})"));
                println!(
                    "  game {:>4} turn {}: {} {}",
                    turn.case + 1,
                    turn.attempts(),
                    colored_guess(record),
                    top.bright_black()
                );
            }
        }
        Ok(())
    }

    fn finish_game(&mut self, case: usize, result: &GameResult, stats: &RunStats) -> Result<()> {
        let answer = result
            .answer
            .as_ref()
            .map_or_else(|| "?????".to_string(), |a| a.text().to_uppercase());
        let outcome = if result.is_solved() {
            format!("solved in {}", result.board.len()).green()
        } else if result.is_abandoned() {
            "abandoned".yellow()
        } else {
            "failed".red()
        };
        println!(
            "Game {:>4}: {} {outcome}  [{}/{} solved]",
            case + 1,
            answer.bold(),
            stats.successes,
            stats.cases
        );
        if self.verbose {
            print_board(&result.board);
        }
        Ok(())
    }
}
