//! The data alignment and feature-assembly pipeline.
//!
//! Turns independently collected, differently shaped sources (one row per
//! champion vs. one row per champion per day) into a single tidy table
//! suitable for modeling:
//! - `patches`: patch recency encoding against the curated vocabulary
//! - `replicate`: day replication of the static table
//! - `rates`: win/ban/pick combination into the dynamic table
//! - `age`: champion age in whole days at each collection date
//! - `tidy`: final column-wise assembly and feature projection
//!
//! The whole pipeline is synchronous, single-threaded, and performs no I/O;
//! it consumes fully materialized tables through a [`SnapshotSource`].

pub mod age;
pub mod patches;
pub mod rates;
pub mod replicate;
pub mod tables;
pub mod tidy;


pub use tables::{DynamicRow, DynamicTable, RateRow, RateTable, StaticRow, TidyRow, TidyTable};

use crate::cli::types::{PatchVocabulary, RateMetric};
use crate::error::Result;
use crate::sources::SnapshotSource;

/// Run the full assembly: static feature table plus combined dynamic rates
/// into the tidy modeling table.
///
/// Fails fast on the first alignment, lookup, or parse problem; no partial
/// tidy table is ever produced.
pub fn assemble_tidy(
    source: &dyn SnapshotSource,
    vocabulary: &PatchVocabulary,
) -> Result<TidyTable> {
    let champions = source.champion_names()?;
    let release_dates = source.release_dates()?;
    let skin_counts = source.skin_counts()?;
    let last_changed = source.last_patch_changes()?;

    let since_change = patches::patches_since_change(&champions, &last_changed, vocabulary)?;
    let static_rows = tables::build_static_table(champions, release_dates, skin_counts, since_change)?;

    let win = source.rate_table(RateMetric::Win)?;
    let ban = source.rate_table(RateMetric::Ban)?;
    let pick = source.rate_table(RateMetric::Pick)?;
    let dynamic = rates::combine_rate_data(&win, &ban, &pick)?;

    let num_days = dynamic.days().len();
    let replicated = replicate::repeat_for_days(&static_rows, num_days)?;
    tidy::assemble(&replicated, &dynamic)
}
