//! Command implementations for the League champion statistics CLI

pub mod champion_data;
pub mod pickrate_analysis;
pub mod rate_data;
pub mod tidy_data;

use crate::DATA_DIR_ENV_VAR;
use std::path::PathBuf;

/// Resolve the snapshot root: explicit flag, then the environment variable,
/// then `./data` when that directory already exists, then a per-user data
/// directory.
pub fn resolve_data_root(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    let local = PathBuf::from("data");
    if local.is_dir() {
        return local;
    }
    dirs::data_local_dir()
        .map(|base| base.join("lol-stats"))
        .unwrap_or(local)
}
