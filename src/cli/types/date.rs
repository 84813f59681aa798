//! Scrape-date type and date parsing.

use crate::error::{LolStatsError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for the calendar date on which a snapshot was scraped.
///
/// Displays as ISO-8601 (`YYYY-MM-DD`), the format used inside rate files;
/// [`ScrapeDate::compact`] yields the `YYYYMMDD` stamp used in their
/// filenames.
///
/// # Examples
///
/// ```rust
/// use lol_stats::ScrapeDate;
///
/// let date: ScrapeDate = "2019-09-28".parse().unwrap();
/// assert_eq!(date.to_string(), "2019-09-28");
/// assert_eq!(date.compact(), "20190928");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ScrapeDate(pub NaiveDate);

impl ScrapeDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The local calendar date at the time of scraping.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    /// Filename stamp: `YYYYMMDD`.
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for ScrapeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for ScrapeDate {
    type Err = LolStatsError;

    fn from_str(s: &str) -> Result<Self> {
        parse_iso_date(s).map(Self)
    }
}

/// Parse an ISO-8601 date. Values carrying a time component are accepted and
/// truncated to the calendar date before any day arithmetic.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(date_err) => NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
            .map(|dt| dt.date())
            .map_err(|_| LolStatsError::InvalidDate {
                value: trimmed.to_string(),
                source: date_err,
            }),
    }
}
