//! Wordle Simulator - CLI
//!
//! Runs strategy simulations, interactive play, single solves and word
//! analysis from the command line.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use wordle_sim::{
    commands::{
        InteractiveEvaluation, SimulateOptions, SolveConfig, analyze_word, run_play,
        run_simulation, solve_word,
    },
    core::MAX_GUESSES,
    output::{print_analysis_result, print_solve_result, print_summary},
    simulation::{DEFAULT_CASES, GuessPolicy, SimulationConfig},
    solver::{DEFAULT_TOP_K, Solver, StrategyType},
    wordlists::{DEFAULT_MIN_FREQUENCY, EMBEDDED, load_universe},
};

#[derive(Parser)]
#[command(
    name = "wordle_sim",
    about = "Wordle strategy simulator: constraint filtering and entropy-ranked guessing",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: entropy (default), random-filtered, random
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// File of 'word frequency' lines used to drop rare words
    #[arg(long, global = true)]
    frequencies: Option<PathBuf>,

    /// Words at or below this frequency are dropped (needs --frequencies)
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_FREQUENCY)]
    min_frequency: f64,

    /// Length of ranked guess lists
    #[arg(long, global = true, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate many games against random answers (default)
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value_t = DEFAULT_CASES)]
        cases: usize,

        /// Seed for answers and guesses (random and printed when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Milliseconds to pause between games
        #[arg(long, default_value_t = 0)]
        interval: u64,

        /// How the automatic player picks from the ranked list
        #[arg(long, value_enum, default_value_t = GuessPolicy::Best)]
        pick: GuessPolicy,

        /// Play games in parallel
        #[arg(long, conflicts_with = "live")]
        parallel: bool,

        /// Watch the run in a live dashboard
        #[arg(long)]
        live: bool,

        /// Print every turn and board
        #[arg(short, long)]
        verbose: bool,
    },

    /// Get suggestions for a game you are playing
    Play {
        /// Seed for the random strategies
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a word against the whole universe
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let universe = load_universe(&cli.wordlist, cli.frequencies.as_deref(), cli.min_frequency)?;
    let strategy = StrategyType::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}', expected one of: {}",
            cli.strategy,
            StrategyType::NAMES.join(", ")
        )
    })?;
    let solver = Solver::new(strategy, &universe).with_top_k(cli.top_k);

    let command = cli.command.unwrap_or(Commands::Simulate {
        cases: DEFAULT_CASES,
        seed: None,
        interval: 0,
        pick: GuessPolicy::Best,
        parallel: false,
        live: false,
        verbose: false,
    });

    match command {
        Commands::Simulate {
            cases,
            seed,
            interval,
            pick,
            parallel,
            live,
            verbose,
        } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            println!("Seed: {seed}");
            let options = SimulateOptions {
                config: SimulationConfig {
                    cases,
                    seed,
                    max_guesses: MAX_GUESSES,
                    policy: pick,
                    interval: Duration::from_millis(interval),
                    parallel,
                },
                live,
                verbose,
            };
            let stats = run_simulation(&solver, &options)?;
            print_summary(&stats, seed);
            Ok(())
        }
        Commands::Play { seed } => {
            let mut rng =
                seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
            let mut evaluation = InteractiveEvaluation::new(io::stdin().lock(), io::stdout());
            let stats = run_play(&solver, &mut rng, &mut evaluation)?;
            println!("\n{}/{} games solved", stats.successes, stats.cases);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let mut rng = StdRng::seed_from_u64(0);
            let result = solve_word(&SolveConfig::new(word), &solver, &mut rng)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, solver.universe())?;
            print_analysis_result(&result);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn simulate_flags_parse() {
        let cli = Cli::parse_from([
            "wordle_sim", "-s", "random", "simulate", "-n", "5", "--seed", "7", "--pick",
            "random", "--parallel",
        ]);
        assert_eq!(cli.strategy, "random");
        match cli.command {
            Some(Commands::Simulate {
                cases,
                seed,
                pick,
                parallel,
                ..
            }) => {
                assert_eq!(cases, 5);
                assert_eq!(seed, Some(7));
                assert_eq!(pick, GuessPolicy::Random);
                assert!(parallel);
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn live_conflicts_with_parallel() {
        assert!(Cli::try_parse_from(["wordle_sim", "simulate", "--live", "--parallel"]).is_err());
    }
}
