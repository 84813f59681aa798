//! Rate combination: three per-metric tables into one dynamic table.

use crate::error::{LolStatsError, Result};
use crate::pipeline::tables::{DynamicRow, DynamicTable, RateTable};

/// Merge the win, ban, and pick tables into a single dynamic table.
///
/// The three inputs must have equal row counts and identical
/// `(champion, date)` ordering; a mismatch is an alignment error, never a
/// truncation or padding. Every row position is verified against its key
/// while zipping, so a reordered input fails on the first offending row.
pub fn combine_rate_data(
    win: &RateTable,
    ban: &RateTable,
    pick: &RateTable,
) -> Result<DynamicTable> {
    if win.len() != ban.len() || win.len() != pick.len() {
        return Err(LolStatsError::misaligned(format!(
            "rate tables disagree: win has {} rows, ban has {} rows, pick has {} rows",
            win.len(),
            ban.len(),
            pick.len()
        )));
    }

    let mut rows = Vec::with_capacity(win.len());
    for (index, ((w, b), p)) in win
        .rows
        .iter()
        .zip(&ban.rows)
        .zip(&pick.rows)
        .enumerate()
    {
        for (metric_row, metric) in [(b, ban.metric), (p, pick.metric)] {
            if metric_row.champion != w.champion || metric_row.date != w.date {
                return Err(LolStatsError::misaligned(format!(
                    "row {index}: win is ({}, {}) but {} is ({}, {})",
                    w.champion, w.date, metric, metric_row.champion, metric_row.date
                )));
            }
        }
        rows.push(DynamicRow {
            champion: w.champion.clone(),
            date: w.date,
            winrate: w.rate,
            banrate: b.rate,
            pickrate: p.rate,
        });
    }

    Ok(DynamicTable::new(rows))
}
