//! Day replication of the static table.

use crate::error::{LolStatsError, Result};

/// Stack `num_days` consecutive full copies of `rows`, preserving row order
/// within each copy.
///
/// Day-major convention: copy `d` lines up with the dynamic rows of day `d`,
/// so output row `d * R + j` is input row `j`. Callers must feed a dynamic
/// table with the same convention; the assembler re-verifies champion
/// identity per row afterwards.
pub fn repeat_for_days<T: Clone>(rows: &[T], num_days: usize) -> Result<Vec<T>> {
    if num_days == 0 {
        return Err(LolStatsError::misaligned(
            "cannot replicate the static table over zero days",
        ));
    }

    let mut out = Vec::with_capacity(rows.len() * num_days);
    for _ in 0..num_days {
        out.extend_from_slice(rows);
    }
    Ok(out)
}
