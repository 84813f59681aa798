//! Patch recency encoding.

use crate::cli::types::{Champion, Patch, PatchVocabulary};
use crate::error::{LolStatsError, Result};

/// Encode each champion's last-changed patch as an ordinal distance from the
/// newest vocabulary patch: the newest patch encodes to 1, the one before it
/// to 2, and so on.
///
/// Pure function of its inputs. A token absent from the vocabulary is a hard
/// error naming the offending champion; it is never coerced.
pub fn patches_since_change(
    champions: &[Champion],
    last_changed: &[Patch],
    vocabulary: &PatchVocabulary,
) -> Result<Vec<u32>> {
    if champions.len() != last_changed.len() {
        return Err(LolStatsError::misaligned(format!(
            "{} champions but {} last-changed patches",
            champions.len(),
            last_changed.len()
        )));
    }

    champions
        .iter()
        .zip(last_changed)
        .map(|(champion, patch)| {
            vocabulary
                .position(patch)
                .map(|index| index as u32 + 1)
                .ok_or_else(|| LolStatsError::UnknownPatch {
                    champion: champion.to_string(),
                    patch: patch.as_str().to_string(),
                })
        })
        .collect()
}
