//! JSON persistence for player statistics

use super::Statistics;
use crate::game::{GameResult, StatsSink};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, warn};

/// Player used when none is given
pub const DEFAULT_PLAYER: &str = "player";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Invalid player name '{0}': use letters, digits, '-' or '_'")]
    InvalidPlayer(String),
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Corrupt statistics file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode statistics: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Statistics file for one player
#[derive(Debug, Clone)]
pub struct StatsStore {
    player: String,
    path: PathBuf,
}

impl StatsStore {
    /// Store for `player` inside `dir`
    ///
    /// Names are lower-cased and must be non-empty `[a-z0-9_-]`.
    ///
    /// # Errors
    /// Returns `StatsError::InvalidPlayer` for names that cannot be used as a file name.
    pub fn for_player(dir: impl AsRef<Path>, player: &str) -> Result<Self, StatsError> {
        let player = player.trim().to_lowercase();
        let valid = !player.is_empty()
            && player
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !valid {
            return Err(StatsError::InvalidPlayer(player));
        }

        let path = dir.as_ref().join(format!("{player}.json"));
        Ok(Self { player, path })
    }

    /// Platform data directory for statistics, e.g. `~/.local/share/wordo`
    #[must_use]
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordo")
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load statistics; a missing file means no games yet
    ///
    /// # Errors
    /// Returns `StatsError` if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Statistics, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no statistics yet");
                return Ok(Statistics::default());
            }
            Err(source) => {
                return Err(StatsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| StatsError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Write statistics, creating the directory if needed
    ///
    /// The file is written to a temporary sibling and renamed into place, so an
    /// interrupted write never leaves a truncated file behind.
    ///
    /// # Errors
    /// Returns `StatsError` if the directory or file cannot be written.
    pub fn save(&self, stats: &Statistics) -> Result<(), StatsError> {
        let io_error = |source: io::Error| StatsError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(io_error)?;

        let json = serde_json::to_string_pretty(stats).map_err(StatsError::Encode)?;
        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(json.as_bytes()).map_err(io_error)?;
        file.persist(&self.path).map_err(|e| io_error(e.error))?;

        debug!(path = %self.path.display(), games = stats.games_played, "statistics saved");
        Ok(())
    }

    /// Where a corrupt statistics file is moved before being replaced
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    /// Load, fold in `result`, save, and return the new totals
    ///
    /// A file that cannot be parsed is moved to [`backup_path`](Self::backup_path)
    /// and counting starts afresh, so a damaged file never blocks recording.
    ///
    /// # Errors
    /// Returns `StatsError::Io` if the file cannot be read, backed up or saved.
    pub fn record_result(&self, result: &GameResult) -> Result<Statistics, StatsError> {
        let mut stats = match self.load() {
            Ok(stats) => stats,
            Err(e @ StatsError::Parse { .. }) => {
                let backup = self.backup_path();
                warn!(error = %e, backup = %backup.display(), "moving corrupt statistics aside");
                fs::rename(&self.path, &backup).map_err(|source| StatsError::Io {
                    path: backup,
                    source,
                })?;
                Statistics::default()
            }
            Err(e) => return Err(e),
        };
        stats.record(result);
        self.save(&stats)?;
        Ok(stats)
    }

    /// Delete the player's statistics
    ///
    /// # Errors
    /// Returns `StatsError::Io` if the file exists but cannot be removed.
    pub fn reset(&self) -> Result<(), StatsError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StatsError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl StatsSink for StatsStore {
    fn record(&mut self, result: GameResult) -> anyhow::Result<()> {
        self.record_result(&result)?;
        Ok(())
    }
}
