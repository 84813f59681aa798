//! League of Legends Champion Statistics CLI Library
//!
//! A Rust library for collecting League of Legends champion statistics,
//! assembling them into a model-ready dataset, and exploring which features
//! predict pick rate.
//!
//! ## Features
//!
//! - **Champion Data Scraping**: Names, release dates, skin counts, and
//!   last-balance-change patches from the champion wiki
//! - **Daily Rate Scraping**: Win/ban/pick rates persisted as one flat file
//!   per scrape date per metric
//! - **Tidy Assembly**: Alignment-checked pipeline joining static and daily
//!   tables into one row per champion per day
//! - **Patch Recency Encoding**: Ordinal patches-since-change feature over a
//!   validated patch vocabulary
//! - **Pick-Rate Modeling**: OLS comparison of full vs. static-only feature
//!   sets by adjusted R^2 on held-out days
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lol_stats::pipeline::assemble_tidy;
//! use lol_stats::storage::DataStore;
//! use lol_stats::PatchVocabulary;
//!
//! # fn example() -> lol_stats::Result<()> {
//! // Assemble the tidy modeling table from an existing snapshot directory.
//! let store = DataStore::open("./data")?;
//! let tidy = assemble_tidy(&store, &PatchVocabulary::current())?;
//! println!("{} rows ready for modeling", tidy.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the snapshot directory to avoid passing it in every command:
//! ```bash
//! export LOL_STATS_DATA_DIR=/var/lib/lol-stats/data
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod sources;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{Champion, Patch, PatchVocabulary, RateMetric, ScrapeDate};
pub use error::{LolStatsError, Result};

pub const DATA_DIR_ENV_VAR: &str = "LOL_STATS_DATA_DIR";
