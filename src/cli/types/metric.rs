//! Rate metric enum shared by scrapers, storage, and the pipeline.

use crate::error::LolStatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three daily rate metrics collected for every champion.
///
/// Each metric has its own snapshot directory and per-day file series; the
/// three series for one date must share row count and champion order.
///
/// # Examples
///
/// ```rust
/// use lol_stats::RateMetric;
///
/// let metric: RateMetric = "win".parse().unwrap();
/// assert_eq!(metric, RateMetric::Win);
/// assert_eq!(metric.column_name(), "winrate");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateMetric {
    Win,
    Ban,
    Pick,
}

impl RateMetric {
    pub const ALL: [RateMetric; 3] = [RateMetric::Win, RateMetric::Ban, RateMetric::Pick];

    /// Column name in the dynamic and tidy tables.
    pub fn column_name(&self) -> &'static str {
        match self {
            RateMetric::Win => "winrate",
            RateMetric::Ban => "banrate",
            RateMetric::Pick => "pickrate",
        }
    }

    /// Snapshot subdirectory holding this metric's per-day files.
    pub fn dir_name(&self) -> &'static str {
        match self {
            RateMetric::Win => "win",
            RateMetric::Ban => "ban",
            RateMetric::Pick => "pick",
        }
    }

    /// Per-day snapshot filename prefix (`<prefix>_<YYYYMMDD>.csv`).
    pub fn file_prefix(&self) -> &'static str {
        match self {
            RateMetric::Win => "win_rates",
            RateMetric::Ban => "ban_rates",
            RateMetric::Pick => "pick_rates",
        }
    }
}

impl fmt::Display for RateMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for RateMetric {
    type Err = LolStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "win" | "winrate" => Ok(RateMetric::Win),
            "ban" | "banrate" => Ok(RateMetric::Ban),
            "pick" | "pickrate" => Ok(RateMetric::Pick),
            _ => Err(LolStatsError::InvalidMetric {
                value: s.to_string(),
            }),
        }
    }
}
