//! Type-safe wrappers and enums for League champion statistics data.

pub mod champion;
pub mod date;
pub mod metric;
pub mod patch;

pub use champion::Champion;
pub use date::ScrapeDate;
pub use metric::RateMetric;
pub use patch::{Patch, PatchVocabulary};
