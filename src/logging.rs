use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "moodcal.log";

/// Installs the global tracing subscriber, appending to `moodcal.log` in
/// `dir`. The terminal belongs to the calendar screen, so nothing is written
/// to stdout/stderr. `RUST_LOG` takes precedence over `default_level`.
pub fn init(dir: &Path, default_level: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("logs");
        // A second install in the same test binary fails; the file is created
        // before that point either way.
        let _ = init(&dir, "debug");
        assert!(dir.join(LOG_FILE_NAME).exists());
    }
}
