//! Patch token type and the curated patch vocabulary.

use crate::error::{LolStatsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a normalized game-patch token.
///
/// Normalization strips a leading `v`/`V` and all whitespace, so scraped
/// variants like `"v9.18"` and `" 9.18 "` compare equal to the vocabulary
/// entry `"9.18"`.
///
/// # Examples
///
/// ```rust
/// use lol_stats::Patch;
///
/// assert_eq!(Patch::new("v9.18"), Patch::new("9.18"));
/// assert_eq!(Patch::new(" 8.24b ").as_str(), "8.24b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Patch(String);

impl Patch {
    /// Create a Patch from a raw token, applying normalization.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let token: String = raw
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let token = token
            .strip_prefix('v')
            .or_else(|| token.strip_prefix('V'))
            .unwrap_or(&token)
            .to_string();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Patch {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Patch tokens from the reference patch back to the oldest curated one,
/// newest first. Hand-maintained; extend from the front when re-scraping
/// under a newer patch.
const CURRENT_VOCABULARY: [&str; 47] = [
    "9.18", "9.17", "9.16", "9.15", "9.14", "9.13", "9.12", "9.11", "9.10", "9.9", "9.8", "9.7",
    "9.6", "9.5", "9.4", "9.3", "9.2", "9.1", "8.24b", "8.24", "8.23", "8.22", "8.21", "8.20",
    "8.19", "8.18", "8.17", "8.16", "8.15", "8.14", "8.13", "8.12", "8.11", "8.10", "8.9", "8.8",
    "8.7", "8.6", "8.5", "8.4", "8.3", "8.2", "8.1", "7.24b", "7.24", "7.23", "7.22",
];

/// Validated, ordered list of unique patch tokens, newest first.
///
/// The vocabulary defines the total order behind the patches-since-change
/// feature: position 0 (the newest patch) encodes to 1. Process-wide,
/// read-only, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchVocabulary {
    patches: Vec<Patch>,
}

impl PatchVocabulary {
    /// Build a vocabulary from already-normalized patches, newest first.
    ///
    /// Rejects empty input and duplicate tokens so that lookup anomalies
    /// surface here, at load time, rather than mid-pipeline.
    pub fn new(patches: Vec<Patch>) -> Result<Self> {
        if patches.is_empty() {
            return Err(LolStatsError::Vocabulary {
                message: "vocabulary must contain at least one patch".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for patch in &patches {
            if !seen.insert(patch.as_str().to_string()) {
                return Err(LolStatsError::Vocabulary {
                    message: format!("duplicate patch {:?}", patch.as_str()),
                });
            }
        }
        Ok(Self { patches })
    }

    /// Build a vocabulary from raw tokens, normalizing each.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self> {
        Self::new(tokens.iter().map(Patch::new).collect())
    }

    /// The curated vocabulary shipped with the tool, covering the reference
    /// patch 9.18 back through 7.22.
    pub fn current() -> Self {
        Self {
            patches: CURRENT_VOCABULARY.iter().map(Patch::new).collect(),
        }
    }

    /// Zero-based position of a patch, newest first.
    pub fn position(&self, patch: &Patch) -> Option<usize> {
        self.patches.iter().position(|p| p == patch)
    }

    /// The most recent patch in the vocabulary.
    pub fn newest(&self) -> &Patch {
        &self.patches[0]
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}
