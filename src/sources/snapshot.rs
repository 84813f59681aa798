//! The capability seam between snapshot producers and the pipeline.
//!
//! The pipeline never fetches or reads anything itself; it pulls fully
//! materialized tables through [`SnapshotSource`]. Two implementations
//! exist: the flat-file store (cached read, see `storage`) and the
//! in-memory result of a live scrape ([`ScrapedSnapshot`]). Commands pick
//! between them with `--refresh`.

use crate::cli::types::{Champion, Patch, RateMetric};
use crate::error::Result;
use crate::pipeline::tables::RateTable;
use chrono::NaiveDate;

/// A provider of the five snapshot tables the pipeline consumes.
///
/// All per-champion sequences must share the same alphabetical champion
/// order; implementations are responsible for surfacing alignment problems
/// rather than papering over them.
pub trait SnapshotSource {
    /// Champion names, alphabetical.
    fn champion_names(&self) -> Result<Vec<Champion>>;

    /// Release dates, in champion order.
    fn release_dates(&self) -> Result<Vec<NaiveDate>>;

    /// Skin counts, in champion order.
    fn skin_counts(&self) -> Result<Vec<u32>>;

    /// Last-changed patch tokens, in champion order.
    fn last_patch_changes(&self) -> Result<Vec<Patch>>;

    /// The day-major rate series for one metric.
    fn rate_table(&self, metric: RateMetric) -> Result<RateTable>;
}

/// An in-memory snapshot produced by a live scrape.
#[derive(Debug, Clone)]
pub struct ScrapedSnapshot {
    champions: Vec<Champion>,
    release_dates: Vec<NaiveDate>,
    skin_counts: Vec<u32>,
    last_changed: Vec<Patch>,
    win: RateTable,
    ban: RateTable,
    pick: RateTable,
}

impl ScrapedSnapshot {
    pub fn new(
        champions: Vec<Champion>,
        release_dates: Vec<NaiveDate>,
        skin_counts: Vec<u32>,
        last_changed: Vec<Patch>,
        win: RateTable,
        ban: RateTable,
        pick: RateTable,
    ) -> Self {
        Self {
            champions,
            release_dates,
            skin_counts,
            last_changed,
            win,
            ban,
            pick,
        }
    }
}

impl SnapshotSource for ScrapedSnapshot {
    fn champion_names(&self) -> Result<Vec<Champion>> {
        Ok(self.champions.clone())
    }

    fn release_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.release_dates.clone())
    }

    fn skin_counts(&self) -> Result<Vec<u32>> {
        Ok(self.skin_counts.clone())
    }

    fn last_patch_changes(&self) -> Result<Vec<Patch>> {
        Ok(self.last_changed.clone())
    }

    fn rate_table(&self, metric: RateMetric) -> Result<RateTable> {
        Ok(match metric {
            RateMetric::Win => self.win.clone(),
            RateMetric::Ban => self.ban.clone(),
            RateMetric::Pick => self.pick.clone(),
        })
    }
}
