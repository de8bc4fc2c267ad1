//! Running tallies across simulated games

use super::runner::GameResult;
use crate::core::MAX_GUESSES;

/// Shot count recorded for a game that was not solved
pub const UNSOLVED_SHOTS: usize = MAX_GUESSES + 1;

/// Success/failure tallies and shot counts of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Shots per game in play order; unsolved games count as [`UNSOLVED_SHOTS`]
    pub shots: Vec<usize>,
    pub successes: usize,
    pub failures: usize,
    pub cases: usize,
    pub strategy: String,
}

impl RunStats {
    #[must_use]
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            ..Self::default()
        }
    }

    /// Fold one finished game into the tallies
    pub fn record(&mut self, result: &GameResult) {
        self.cases += 1;
        if result.is_solved() {
            self.successes += 1;
        } else {
            self.failures += 1;
        }
        self.shots.push(result.shots());
    }

    /// Percentage of games solved (0 before any game)
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.cases == 0 {
            0.0
        } else {
            self.successes as f64 / self.cases as f64 * 100.0
        }
    }

    /// Mean shots over solved games, `None` until one is solved
    #[must_use]
    pub fn average_shots(&self) -> Option<f64> {
        let solved: Vec<usize> = self
            .shots
            .iter()
            .copied()
            .filter(|&s| s < UNSOLVED_SHOTS)
            .collect();
        if solved.is_empty() {
            None
        } else {
            Some(solved.iter().sum::<usize>() as f64 / solved.len() as f64)
        }
    }

    /// Games per shot count: index 0..=5 for 1..=6 shots, index 6 unsolved
    #[must_use]
    pub fn distribution(&self) -> [usize; UNSOLVED_SHOTS] {
        let mut buckets = [0; UNSOLVED_SHOTS];
        for &shots in &self.shots {
            buckets[shots.clamp(1, UNSOLVED_SHOTS) - 1] += 1;
        }
        buckets
    }

    /// Fewest and most shots among solved games
    #[must_use]
    pub fn shot_range(&self) -> Option<(usize, usize)> {
        let solved = self.shots.iter().copied().filter(|&s| s < UNSOLVED_SHOTS);
        let min = solved.clone().min()?;
        let max = solved.max()?;
        Some((min, max))
    }
}
