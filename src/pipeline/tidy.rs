//! Tidy table assembly.

use crate::error::{LolStatsError, Result};
use crate::pipeline::age::champion_ages;
use crate::pipeline::tables::{DynamicTable, StaticRow, TidyRow, TidyTable};
use chrono::NaiveDate;

/// Concatenate the replicated static table with the dynamic table column-wise,
/// attach the computed champion-age column, and project onto the modeling
/// feature set.
///
/// Both inputs must already share row count and day-major row order. The
/// champion key is re-verified at every row position; this is the last line
/// of defense against the silent misalignment the day-major convention
/// invites. No key-based join is performed.
pub fn assemble(replicated_static: &[StaticRow], dynamic: &DynamicTable) -> Result<TidyTable> {
    if replicated_static.is_empty() || dynamic.is_empty() {
        return Err(LolStatsError::misaligned(
            "cannot assemble a tidy table from empty inputs",
        ));
    }
    if replicated_static.len() != dynamic.len() {
        return Err(LolStatsError::misaligned(format!(
            "static table has {} rows but dynamic table has {} rows",
            replicated_static.len(),
            dynamic.len()
        )));
    }

    for (index, (stat, dyn_row)) in replicated_static.iter().zip(&dynamic.rows).enumerate() {
        if stat.champion != dyn_row.champion {
            return Err(LolStatsError::misaligned(format!(
                "row {index}: static row is for {} but dynamic row is for {}",
                stat.champion, dyn_row.champion
            )));
        }
    }

    let days = dynamic.days();
    let num_days = days.len();
    if num_days == 0 || dynamic.len() % num_days != 0 {
        return Err(LolStatsError::misaligned(format!(
            "dynamic table has {} rows over {} days; day blocks are ragged",
            dynamic.len(),
            num_days
        )));
    }
    let num_champions = dynamic.len() / num_days;

    let release_dates: Vec<NaiveDate> = replicated_static.iter().map(|r| r.release_date).collect();
    let collection_dates: Vec<NaiveDate> = dynamic.rows.iter().map(|r| r.date).collect();
    let ages = champion_ages(&release_dates, &collection_dates)?;

    let rows = replicated_static
        .iter()
        .zip(&dynamic.rows)
        .zip(ages)
        .map(|((stat, dyn_row), champion_age)| TidyRow {
            champion_age,
            patches_since_change: stat.patches_since_change,
            num_skins: stat.num_skins,
            winrate: dyn_row.winrate,
            banrate: dyn_row.banrate,
            pickrate: dyn_row.pickrate,
        })
        .collect();

    Ok(TidyTable {
        rows,
        num_champions,
        num_days,
    })
}
