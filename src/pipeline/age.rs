//! Champion age computation.

use crate::error::{LolStatsError, Result};
use chrono::NaiveDate;

/// Signed whole-day difference (collection − release) for each positional
/// pair of dates.
///
/// A collection date before the release date yields a negative age; it is
/// surfaced as-is so downstream validation can catch it, never clamped.
/// Unequal sequence lengths abort the whole batch.
pub fn champion_ages(
    release_dates: &[NaiveDate],
    collection_dates: &[NaiveDate],
) -> Result<Vec<i64>> {
    if release_dates.len() != collection_dates.len() {
        return Err(LolStatsError::misaligned(format!(
            "{} release dates but {} collection dates",
            release_dates.len(),
            collection_dates.len()
        )));
    }

    Ok(release_dates
        .iter()
        .zip(collection_dates)
        .map(|(release, collected)| collected.signed_duration_since(*release).num_days())
        .collect())
}
