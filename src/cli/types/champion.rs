//! Champion identity type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for a champion's display name.
///
/// Champion names are unique within a snapshot and serve as one half of the
/// `(champion, date)` key that travels through every pipeline stage.
/// Alphabetical `Ord` on the cleaned name is the ordering convention shared
/// by all per-champion snapshot files.
///
/// # Examples
///
/// ```rust
/// use lol_stats::Champion;
///
/// let champ = Champion::new("Aatrox");
/// assert_eq!(champ.as_str(), "Aatrox");
/// assert_eq!(champ.to_string(), "Aatrox");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Champion(String);

impl Champion {
    /// Create a new Champion from a display name. Surrounding whitespace is
    /// trimmed; any other cleaning belongs to the scraper that produced the
    /// raw text.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    /// Get the champion name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Champion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
