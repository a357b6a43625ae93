//! File-backed `tracing` subscriber.
//!
//! The terminal belongs to the renderer, so log lines go to `serpent.log` in
//! the data directory instead of stderr.

use crate::constants::{LOG_ENV_VAR, LOG_FILE};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns false (and logs nothing) if the
/// log file can't be opened or a subscriber is already set.
pub fn init(dir: &Path) -> bool {
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}
