//! Row and table types for the assembly pipeline.
//!
//! Every table carries the `(champion, date)` key explicitly so stages can
//! verify correspondence instead of trusting row position alone. Each table
//! is owned by the stage that produced it; nothing here is mutated after
//! construction.

use crate::cli::types::{Champion, RateMetric};
use crate::error::{LolStatsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the static feature table: per-champion facts that do not
/// change over the collection window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticRow {
    pub champion: Champion,
    pub release_date: NaiveDate,
    pub num_skins: u32,
    pub patches_since_change: u32,
}

/// One scraped rate observation for one champion on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRow {
    pub champion: Champion,
    pub date: NaiveDate,
    pub rate: f64,
}

/// Day-major series of observations for a single metric: all champions for
/// the first scrape date, then all champions for the next, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub metric: RateMetric,
    pub rows: Vec<RateRow>,
}

impl RateTable {
    pub fn new(metric: RateMetric, rows: Vec<RateRow>) -> Self {
        Self { metric, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One merged row of the dynamic table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicRow {
    pub champion: Champion,
    pub date: NaiveDate,
    pub winrate: f64,
    pub banrate: f64,
    pub pickrate: f64,
}

/// The combined daily win/ban/pick table, day-major like its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicTable {
    pub rows: Vec<DynamicRow>,
}

impl DynamicTable {
    pub fn new(rows: Vec<DynamicRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct scrape dates in first-appearance order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = Vec::new();
        for row in &self.rows {
            if !days.contains(&row.date) {
                days.push(row.date);
            }
        }
        days
    }
}

/// One row of the model-ready tidy table: exactly the modeling feature set,
/// nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyRow {
    pub champion_age: i64,
    pub patches_since_change: u32,
    pub num_skins: u32,
    pub winrate: f64,
    pub banrate: f64,
    pub pickrate: f64,
}

/// The assembled modeling table plus its shape. Derived, never mutated,
/// recomputed fully on each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TidyTable {
    pub rows: Vec<TidyRow>,
    pub num_champions: usize,
    pub num_days: usize,
}

impl TidyTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Zip the four per-champion columns into the static feature table.
///
/// Column lengths must agree; a mismatch means the snapshot files have
/// drifted out of order and is fatal.
pub fn build_static_table(
    champions: Vec<Champion>,
    release_dates: Vec<NaiveDate>,
    num_skins: Vec<u32>,
    patches_since_change: Vec<u32>,
) -> Result<Vec<StaticRow>> {
    let n = champions.len();
    if release_dates.len() != n || num_skins.len() != n || patches_since_change.len() != n {
        return Err(LolStatsError::misaligned(format!(
            "static columns disagree: {} names, {} release dates, {} skin counts, {} patch ordinals",
            n,
            release_dates.len(),
            num_skins.len(),
            patches_since_change.len()
        )));
    }

    Ok(champions
        .into_iter()
        .zip(release_dates)
        .zip(num_skins)
        .zip(patches_since_change)
        .map(|(((champion, release_date), skins), since)| StaticRow {
            champion,
            release_date,
            num_skins: skins,
            patches_since_change: since,
        })
        .collect())
}
