//! Config file discovery and loading.

use crate::constants;
use crate::models::config::ConfigFile;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Pick the config file: explicit path (flag or env var, resolved by clap),
/// otherwise `git-cred-prune.toml` in the working directory if it exists.
pub fn resolve_path(arg: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = arg {
        return Some(path);
    }
    let cwd = env::current_dir().ok()?;
    let candidate = cwd.join(constants::DEFAULT_CONFIG_FILE);
    candidate.is_file().then_some(candidate)
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("parse config {}", path.display()))?;
    Ok(file)
}
