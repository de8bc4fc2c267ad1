//! Live dashboard state and terminal lifecycle

use crate::core::{Board, Word};
use crate::simulation::{
    GameResult, Reporter, RunStats, SimulationConfig, TurnReport, UNSOLVED_SHOTS, run_sequential,
};
use crate::solver::{ScoredGuess, Solver, Strategy};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Number of ranked suggestions kept for display
const SHOWN_SUGGESTIONS: usize = 5;

/// Everything the dashboard draws
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub strategy: String,
    pub total_cases: usize,
    /// 0-based index of the game being played
    pub case: usize,
    pub board: Board,
    pub answer: Option<Word>,
    pub suggestions: Vec<ScoredGuess>,
    pub distribution: [usize; UNSOLVED_SHOTS],
    pub successes: usize,
    pub failures: usize,
    pub success_rate: f64,
    pub average_shots: Option<f64>,
    pub finished: bool,
}

impl DashboardState {
    #[must_use]
    pub fn new(strategy: impl Into<String>, total_cases: usize) -> Self {
        Self {
            strategy: strategy.into(),
            total_cases,
            ..Self::default()
        }
    }

    /// Take in the current turn
    pub fn update_turn(&mut self, turn: &TurnReport<'_>) {
        self.case = turn.case;
        self.board = turn.board.clone();
        self.answer = turn.answer.cloned();
        self.suggestions = turn.ranked.iter().take(SHOWN_SUGGESTIONS).cloned().collect();
    }

    /// Take in the tallies after a game
    pub fn update_stats(&mut self, stats: &RunStats) {
        self.distribution = stats.distribution();
        self.successes = stats.successes;
        self.failures = stats.failures;
        self.success_rate = stats.success_rate();
        self.average_shots = stats.average_shots();
    }

    /// Games finished so far
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.successes + self.failures
    }
}

/// Reporter drawing a live view of a run
///
/// With input enabled, `q`, `Esc` or Ctrl-C stop the run after the game in
/// progress.
pub struct LiveDashboard<B: Backend> {
    terminal: Terminal<B>,
    state: DashboardState,
    listen: bool,
    cancelled: bool,
}

impl<B: Backend> LiveDashboard<B> {
    /// Dashboard drawing to `terminal` without reading keys
    pub const fn new(terminal: Terminal<B>, state: DashboardState) -> Self {
        Self {
            terminal,
            state,
            listen: false,
            cancelled: false,
        }
    }

    /// Also poll the keyboard for cancellation
    #[must_use]
    pub const fn with_input(mut self) -> Self {
        self.listen = true;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Redraw the whole dashboard
    ///
    /// # Errors
    /// Returns terminal I/O errors.
    pub fn draw(&mut self) -> Result<()> {
        let state = &self.state;
        self.terminal.draw(|f| super::rendering::ui(f, state))?;
        Ok(())
    }

    fn poll_input(&mut self) -> Result<()> {
        if !self.listen {
            return Ok(());
        }
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.cancelled = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => self.cancelled = true,
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Show the final tallies and block until a key is pressed
    ///
    /// # Errors
    /// Returns terminal I/O errors.
    pub fn wait_for_exit(&mut self) -> Result<()> {
        self.state.finished = true;
        self.draw()?;
        if !self.listen || self.cancelled {
            return Ok(());
        }
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}

impl<B: Backend> Reporter for LiveDashboard<B> {
    fn report(&mut self, turn: &TurnReport<'_>) -> Result<()> {
        self.state.update_turn(turn);
        self.poll_input()?;
        self.draw()
    }

    fn finish_game(&mut self, _case: usize, _result: &GameResult, stats: &RunStats) -> Result<()> {
        self.state.update_stats(stats);
        self.poll_input()?;
        self.draw()
    }

    fn cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Run a simulation inside the live dashboard
///
/// The terminal is restored even when setup or the run fails.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or the run fails.
pub fn run_live<S: Strategy>(
    solver: &Solver<'_, S>,
    config: &SimulationConfig,
    answers: &[Word],
) -> Result<RunStats> {
    with_terminal_session(enter_terminal, leave_terminal, || {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let state = DashboardState::new(solver.strategy().name(), answers.len());
        let mut dashboard = LiveDashboard::new(terminal, state).with_input();
        drive(&mut dashboard, solver, config, answers)
    })
}

fn enter_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
}

fn leave_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}

/// Run `body` between `enter` and `leave`
///
/// `leave` runs on every path, including a partly failed `enter`. An
/// error from setup or `body` wins over one from `leave`.
fn with_terminal_session<T>(
    enter: impl FnOnce() -> io::Result<()>,
    leave: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let res = enter().map_err(anyhow::Error::from).and_then(|()| body());
    let left = leave();
    let value = res?;
    left?;
    Ok(value)
}

fn drive<B: Backend, S: Strategy>(
    dashboard: &mut LiveDashboard<B>,
    solver: &Solver<'_, S>,
    config: &SimulationConfig,
    answers: &[Word],
) -> Result<RunStats> {
    dashboard.draw()?;
    let stats = run_sequential(solver, config, answers, &mut *dashboard)?;
    dashboard.wait_for_exit()?;
    Ok(stats)
}
