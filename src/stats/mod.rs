//! Player statistics
//!
//! Aggregates finished games and persists them per player.

mod store;

pub use store::{DEFAULT_PLAYER, StatsError, StatsStore};

use crate::game::GameResult;
use serde::{Deserialize, Serialize};

/// Running totals for one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// `distribution[n - 1]` is the number of games won in `n` attempts
    #[serde(default)]
    pub distribution: Vec<u32>,
}

impl Statistics {
    /// Fold one finished game into the totals
    pub fn record(&mut self, result: &GameResult) {
        self.games_played += 1;

        if !result.won {
            self.current_streak = 0;
            return;
        }

        self.wins += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);

        if let Some(attempts) = result.attempts_used.filter(|&n| n > 0) {
            if self.distribution.len() < attempts {
                self.distribution.resize(attempts, 0);
            }
            self.distribution[attempts - 1] += 1;
        }
    }

    /// Rounded win percentage, `None` before the first game
    #[must_use]
    pub fn win_percentage(&self) -> Option<u32> {
        (self.games_played > 0)
            .then(|| (f64::from(self.wins) * 100.0 / f64::from(self.games_played)).round() as u32)
    }

    /// Wins in `attempts` attempts
    #[must_use]
    pub fn wins_in(&self, attempts: usize) -> u32 {
        attempts
            .checked_sub(1)
            .and_then(|i| self.distribution.get(i))
            .copied()
            .unwrap_or(0)
    }
}
