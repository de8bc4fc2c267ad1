//! Simulation command
//!
//! Runs many automatic games against randomly drawn answers and tallies
//! how the strategy fares.

use crate::dashboard::run_live;
use crate::output::ConsoleReporter;
use crate::simulation::{
    GameResult, Reporter, RunStats, SimulationConfig, TurnReport, answers_for, run_parallel,
    run_sequential,
};
use crate::solver::{Solver, Strategy};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::Instant;

/// How a simulation run is presented
#[derive(Debug, Clone, Default)]
pub struct SimulateOptions {
    pub config: SimulationConfig,
    /// Watch the run in the live dashboard
    pub live: bool,
    /// Print every turn and board
    pub verbose: bool,
}

/// Progress bar in the solver's usual style
///
/// # Errors
///
/// Returns an error if the bar template is rejected.
pub fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );
    Ok(pb)
}

/// Reporter advancing a progress bar once per game
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    #[must_use]
    pub const fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Complete!");
    }
}

impl Reporter for ProgressReporter {
    fn report(&mut self, _turn: &TurnReport<'_>) -> Result<()> {
        Ok(())
    }

    fn finish_game(&mut self, _case: usize, _result: &GameResult, stats: &RunStats) -> Result<()> {
        if let Some(avg) = stats.average_shots() {
            self.bar.set_message(format!("Avg: {avg:.2}"));
        }
        self.bar.inc(1);
        Ok(())
    }
}

/// Run a whole simulation with the presentation `options` asks for
///
/// # Errors
///
/// Returns terminal or reporting errors.
pub fn run_simulation<S: Strategy + Sync>(
    solver: &Solver<'_, S>,
    options: &SimulateOptions,
) -> Result<RunStats> {
    let config = &options.config;
    let answers = answers_for(solver.universe(), config);
    let start = Instant::now();

    let stats = if options.live {
        run_live(solver, config, &answers)?
    } else if config.parallel {
        let pb = progress_bar(answers.len())?;
        let stats = run_parallel(solver, config, &answers, Some(&pb))?;
        pb.finish_with_message("Complete!");
        stats
    } else if options.verbose {
        run_sequential(solver, config, &answers, &mut ConsoleReporter::new(true))?
    } else {
        let mut reporter = ProgressReporter::new(progress_bar(answers.len())?);
        let stats = run_sequential(solver, config, &answers, &mut reporter)?;
        reporter.finish();
        stats
    };

    info!(
        "{} games in {:.2}s",
        stats.cases,
        start.elapsed().as_secs_f64()
    );
    Ok(stats)
}
