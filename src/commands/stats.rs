//! Statistics command

use crate::stats::{Statistics, StatsStore};
use anyhow::Result;

/// Load a player's statistics, or reset them and return the empty totals
///
/// # Errors
///
/// Returns an error if the statistics file cannot be read, parsed or removed.
pub fn load_or_reset(store: &StatsStore, reset: bool) -> Result<Statistics> {
    if reset {
        store.reset()?;
        return Ok(Statistics::default());
    }
    Ok(store.load()?)
}
