//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::RateMetric;

use crate::sources::http::DEFAULT_PAGE_DELAY_MS;

/// Snapshot-location arguments shared between commands
#[derive(Debug, Args)]
pub struct StoreOpts {
    /// Snapshot directory (or set `LOL_STATS_DATA_DIR`; defaults to ./data).
    #[clap(long, short)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Load (or scrape and persist) the static champion tables.
    ///
    /// Names, release dates, skin counts, and last-changed patches share one
    /// alphabetical row order across their files. Prints the per-champion
    /// static view including the patches-since-change encoding.
    ChampionData {
        #[clap(flatten)]
        store: StoreOpts,

        /// Force a live scrape, overwriting the snapshot files.
        #[clap(long)]
        refresh: bool,

        /// Output the static table as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print progress while scraping.
        #[clap(long)]
        verbose: bool,

        /// Delay between per-champion page fetches, in milliseconds.
        #[clap(long, default_value_t = DEFAULT_PAGE_DELAY_MS)]
        delay_ms: u64,
    },

    /// Scrape today's win/ban/pick rates into per-day snapshot files.
    ///
    /// Run once per day; each run adds one file per metric. Past days cannot
    /// be re-scraped.
    RateData {
        #[clap(flatten)]
        store: StoreOpts,

        /// Metric to scrape (repeatable): `-m win -m ban`. Defaults to all.
        #[clap(short, long = "metric")]
        metrics: Option<Vec<RateMetric>>,

        /// Print progress while scraping.
        #[clap(long)]
        verbose: bool,

        /// Delay between metric page fetches, in milliseconds.
        #[clap(long, default_value_t = DEFAULT_PAGE_DELAY_MS)]
        delay_ms: u64,
    },

    /// Assemble the tidy per-champion, per-day modeling table.
    TidyData {
        #[clap(flatten)]
        store: StoreOpts,

        /// Re-scrape the static tables before assembling (rate snapshots are
        /// per-day and are always read from the store).
        #[clap(long)]
        refresh: bool,

        /// Output tidy rows as JSON instead of writing the csv file.
        #[clap(long)]
        json: bool,

        /// Output file (defaults to tidy_data.csv inside the data dir).
        #[clap(long, short)]
        output: Option<PathBuf>,

        /// Print progress while assembling.
        #[clap(long)]
        verbose: bool,

        /// Delay between per-champion page fetches when refreshing.
        #[clap(long, default_value_t = DEFAULT_PAGE_DELAY_MS)]
        delay_ms: u64,
    },

    /// Fit and compare pick-rate regressions on the assembled tidy table.
    ///
    /// Compares a full model (static + dynamic features) against a
    /// static-only model by adjusted R^2 on held-out days.
    PickrateAnalysis {
        #[clap(flatten)]
        store: StoreOpts,

        /// Output the comparison report as JSON.
        #[clap(long)]
        json: bool,

        /// Fraction of distinct days used for training.
        #[clap(long, default_value_t = 0.8)]
        train_fraction: f64,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "lol-stats", about = "League of Legends champion statistics CLI")]
pub struct LolStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get champion data and derived datasets
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
