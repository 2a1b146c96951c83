use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory where persisted state lives (`<platform data dir>/wa-direct`)
pub fn get_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join("wa-direct"))
}
