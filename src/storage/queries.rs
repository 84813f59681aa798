//! Per-table read/write operations on the snapshot store.

use super::store::{malformed, read_lines, write_lines, DataStore};
use crate::cli::types::date::parse_iso_date;
use crate::cli::types::{Champion, Patch, RateMetric, ScrapeDate};
use crate::error::{LolStatsError, Result};
use crate::pipeline::tables::{RateRow, RateTable, TidyTable};
use crate::sources::SnapshotSource;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

impl DataStore {
    pub fn save_champion_names(&self, champions: &[Champion]) -> Result<()> {
        let lines: Vec<&str> = champions.iter().map(|c| c.as_str()).collect();
        write_lines(&self.names_path(), &lines)
    }

    pub fn load_champion_names(&self) -> Result<Vec<Champion>> {
        Ok(read_lines(&self.names_path())?
            .into_iter()
            .map(Champion::new)
            .collect())
    }

    pub fn save_release_dates(&self, dates: &[NaiveDate]) -> Result<()> {
        let lines: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        write_lines(&self.release_dates_path(), &lines)
    }

    pub fn load_release_dates(&self) -> Result<Vec<NaiveDate>> {
        let path = self.release_dates_path();
        read_lines(&path)?
            .iter()
            .enumerate()
            .map(|(i, line)| {
                parse_iso_date(line).map_err(|e| malformed(&path, i + 1, e.to_string()))
            })
            .collect()
    }

    pub fn save_skin_counts(&self, counts: &[u32]) -> Result<()> {
        let lines: Vec<String> = counts.iter().map(|c| c.to_string()).collect();
        write_lines(&self.skins_path(), &lines)
    }

    pub fn load_skin_counts(&self) -> Result<Vec<u32>> {
        let path = self.skins_path();
        read_lines(&path)?
            .iter()
            .enumerate()
            .map(|(i, line)| {
                line.trim().parse::<u32>().map_err(|e| {
                    malformed(&path, i + 1, format!("invalid skin count {line:?}: {e}"))
                })
            })
            .collect()
    }

    pub fn save_last_patch_changes(&self, patches: &[Patch]) -> Result<()> {
        let lines: Vec<&str> = patches.iter().map(|p| p.as_str()).collect();
        write_lines(&self.last_patch_path(), &lines)
    }

    pub fn load_last_patch_changes(&self) -> Result<Vec<Patch>> {
        Ok(read_lines(&self.last_patch_path())?
            .iter()
            .map(Patch::new)
            .collect())
    }

    /// Write one per-day rate file. Rows carry the ISO date; the filename
    /// carries the compact stamp. Champion identity stays implicit in row
    /// position, which must be the shared alphabetical order.
    pub fn save_daily_rates(
        &self,
        metric: RateMetric,
        date: ScrapeDate,
        rates: &[f64],
    ) -> Result<PathBuf> {
        for rate in rates {
            if !(0.0..=1.0).contains(rate) {
                return Err(LolStatsError::InvalidRate {
                    value: rate.to_string(),
                });
            }
        }
        let lines: Vec<String> = rates.iter().map(|r| format!("{r:.4},{date}")).collect();
        let path = self.rate_file_path(metric, date);
        write_lines(&path, &lines)?;
        Ok(path)
    }

    /// Scrape dates with a stored snapshot for `metric`, ascending.
    pub fn snapshot_dates(&self, metric: RateMetric) -> Result<Vec<ScrapeDate>> {
        let dir = self.rate_dir(metric);
        let prefix = format!("{}_", metric.file_prefix());

        let mut dates = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();
            let Some(stamp) = name
                .strip_prefix(&prefix)
                .and_then(|rest| rest.strip_suffix(".csv"))
            else {
                continue;
            };
            let date = NaiveDate::parse_from_str(stamp, "%Y%m%d").map_err(|source| {
                LolStatsError::InvalidDate {
                    value: stamp.to_string(),
                    source,
                }
            })?;
            dates.push(ScrapeDate::new(date));
        }
        dates.sort();
        Ok(dates)
    }

    /// Load the full day-major rate series for one metric, attaching
    /// champion identity positionally from the roster order.
    ///
    /// Every per-day file must have exactly one row per roster champion and
    /// every row's date must agree with the filename stamp; anything else is
    /// fatal.
    pub fn load_rate_table(&self, metric: RateMetric, roster: &[Champion]) -> Result<RateTable> {
        let dates = self.snapshot_dates(metric)?;
        if dates.is_empty() {
            return Err(LolStatsError::MissingSource {
                path: self.rate_dir(metric),
            });
        }

        let mut rows = Vec::new();
        for date in dates {
            let path = self.rate_file_path(metric, date);
            let lines = read_lines(&path)?;
            if lines.len() != roster.len() {
                return Err(LolStatsError::misaligned(format!(
                    "{} has {} rows but the roster has {} champions",
                    path.display(),
                    lines.len(),
                    roster.len()
                )));
            }

            for (i, line) in lines.iter().enumerate() {
                let (rate, row_date) = parse_rate_line(&path, i + 1, line)?;
                if row_date != date.as_date() {
                    return Err(malformed(
                        &path,
                        i + 1,
                        format!(
                            "row date {row_date} disagrees with filename stamp {date}"
                        ),
                    ));
                }
                rows.push(RateRow {
                    champion: roster[i].clone(),
                    date: row_date,
                    rate,
                });
            }
        }

        Ok(RateTable::new(metric, rows))
    }

    /// Write the assembled tidy table: six comma-separated values per row in
    /// the canonical column order, no header.
    pub fn write_tidy(&self, table: &TidyTable, path: Option<&Path>) -> Result<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(|| self.tidy_path());
        let lines: Vec<String> = table
            .rows
            .iter()
            .map(|row| {
                format!(
                    "{},{},{},{:.4},{:.4},{:.4}",
                    row.champion_age,
                    row.patches_since_change,
                    row.num_skins,
                    row.winrate,
                    row.banrate,
                    row.pickrate
                )
            })
            .collect();
        write_lines(&path, &lines)?;
        Ok(path)
    }
}

fn parse_rate_line(path: &Path, line_no: usize, line: &str) -> Result<(f64, NaiveDate)> {
    let Some((rate_str, date_str)) = line.split_once(',') else {
        return Err(malformed(
            path,
            line_no,
            format!("expected `rate,date`, got {line:?}"),
        ));
    };

    let rate: f64 = rate_str.trim().parse().map_err(|_| {
        malformed(path, line_no, format!("invalid rate {:?}", rate_str.trim()))
    })?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(malformed(
            path,
            line_no,
            format!("rate {rate} outside [0, 1]"),
        ));
    }

    let date = parse_iso_date(date_str).map_err(|e| malformed(path, line_no, e.to_string()))?;
    Ok((rate, date))
}

/// Cached-read snapshot source: the store's files, trusted only as far as
/// the alignment checks allow.
impl SnapshotSource for DataStore {
    fn champion_names(&self) -> Result<Vec<Champion>> {
        self.load_champion_names()
    }

    fn release_dates(&self) -> Result<Vec<NaiveDate>> {
        self.load_release_dates()
    }

    fn skin_counts(&self) -> Result<Vec<u32>> {
        self.load_skin_counts()
    }

    fn last_patch_changes(&self) -> Result<Vec<Patch>> {
        self.load_last_patch_changes()
    }

    fn rate_table(&self, metric: RateMetric) -> Result<RateTable> {
        let roster = self.load_champion_names()?;
        self.load_rate_table(metric, &roster)
    }
}
