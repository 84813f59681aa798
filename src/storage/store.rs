//! Snapshot directory layout and line-file primitives.

use crate::cli::types::{RateMetric, ScrapeDate};
use crate::error::{LolStatsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Flat-file store rooted at a snapshot directory.
///
/// Layout:
///
/// ```text
/// <root>/champion_names.csv
/// <root>/champion_release_dates.csv
/// <root>/num_skins.csv
/// <root>/last_patch.csv
/// <root>/win/win_rates_<YYYYMMDD>.csv     (one per scrape date)
/// <root>/ban/ban_rates_<YYYYMMDD>.csv
/// <root>/pick/pick_rates_<YYYYMMDD>.csv
/// <root>/tidy_data.csv                    (assembled output)
/// ```
#[derive(Debug)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Open a store rooted at `root`, creating the directory layout if
    /// needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        for metric in RateMetric::ALL {
            fs::create_dir_all(root.join(metric.dir_name()))?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn names_path(&self) -> PathBuf {
        self.root.join("champion_names.csv")
    }

    pub fn release_dates_path(&self) -> PathBuf {
        self.root.join("champion_release_dates.csv")
    }

    pub fn skins_path(&self) -> PathBuf {
        self.root.join("num_skins.csv")
    }

    pub fn last_patch_path(&self) -> PathBuf {
        self.root.join("last_patch.csv")
    }

    pub fn tidy_path(&self) -> PathBuf {
        self.root.join("tidy_data.csv")
    }

    pub fn rate_dir(&self, metric: RateMetric) -> PathBuf {
        self.root.join(metric.dir_name())
    }

    pub fn rate_file_path(&self, metric: RateMetric, date: ScrapeDate) -> PathBuf {
        self.rate_dir(metric)
            .join(format!("{}_{}.csv", metric.file_prefix(), date.compact()))
    }
}

/// Read a headerless line file. Trailing blank lines are tolerated; a
/// missing file is a `MissingSource` error.
pub(crate) fn read_lines(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(LolStatsError::MissingSource {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path)?;
    let mut lines: Vec<String> = contents
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

/// Write a headerless line file, creating parent directories.
pub(crate) fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut contents = lines
        .iter()
        .map(|l| l.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}

/// Malformed-row error with file and line context (1-based).
pub(crate) fn malformed(path: &Path, line: usize, message: impl Into<String>) -> LolStatsError {
    LolStatsError::Malformed {
        path: path.to_path_buf(),
        line,
        message: message.into(),
    }
}
