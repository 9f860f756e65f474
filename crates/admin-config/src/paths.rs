//! Per-user directories of the console
//!
//! Linux: `~/.config/listing-admin/` and `~/.cache/listing-admin/`; other
//! platforms use their `dirs` equivalents.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "listing-admin";
const SESSION_FILE_NAME: &str = "session.toml";

/// `<base>/listing-admin`, created on first use
fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let base = base.with_context(|| format!("No {kind} directory on this platform"))?;
    ensure_dir(&base.join(APP_NAME))
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

pub fn config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// Release builds write their log files here
pub fn cache_dir() -> Result<PathBuf> {
    app_dir(dirs::cache_dir(), "cache")
}

/// Session file with the bearer token and signed-in user
pub fn session_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(SESSION_FILE_NAME))
}
