use crate::data::{AppSettings, Persistable};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir)?;
    run_in_dir(&dir)?;
    println!("Initialized {}", dir.join(AppSettings::filename()).display());
    Ok(())
}

/// Writes the default config into `dir`, keeping any existing one. Exposed
/// for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    if dir.join(AppSettings::filename()).exists() {
        tracing::info!(dir = %dir.display(), "config already present, leaving it untouched");
        return Ok(());
    }
    AppSettings::default().save_to(dir)
}
