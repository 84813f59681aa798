//! Daily rate scraping command implementation

use crate::cli::types::{RateMetric, ScrapeDate};
use crate::error::{LolStatsError, Result};
use crate::sources::http::{build_client, page_delay};
use crate::sources::opgg::scrape_daily_rates;
use crate::storage::DataStore;
use std::path::PathBuf;

use super::resolve_data_root;

/// Handle the rate-data command: scrape today's table for each requested
/// metric and write one per-day snapshot file per metric.
pub async fn handle_rate_data(
    data_dir: Option<PathBuf>,
    metrics: Option<Vec<RateMetric>>,
    verbose: bool,
    delay_ms: u64,
) -> Result<()> {
    let store = DataStore::open(resolve_data_root(data_dir))?;
    let client = build_client()?;
    let date = ScrapeDate::today();
    let metrics = metrics.unwrap_or_else(|| RateMetric::ALL.to_vec());

    for (index, metric) in metrics.iter().enumerate() {
        if index > 0 {
            page_delay(delay_ms).await;
        }
        if verbose {
            println!("Scraping {metric} rates for {date}...");
        }

        let table = scrape_daily_rates(&client, *metric, date).await?;
        check_roster_alignment(&store, *metric, &table)?;

        let rates: Vec<f64> = table.rows.iter().map(|r| r.rate).collect();
        let path = store.save_daily_rates(*metric, date, &rates)?;
        if verbose {
            println!("Saved {} rows to {}", rates.len(), path.display());
        }
    }
    Ok(())
}

/// Rate rows are keyed by position against champion_names.csv, so a scrape
/// whose champion set disagrees with the stored roster would poison every
/// later read. Verified here, at write time, while the champion column is
/// still in hand.
fn check_roster_alignment(
    store: &DataStore,
    metric: RateMetric,
    table: &crate::pipeline::tables::RateTable,
) -> Result<()> {
    let roster = match store.load_champion_names() {
        Ok(roster) => roster,
        // No roster yet; nothing to check against.
        Err(LolStatsError::MissingSource { .. }) => return Ok(()),
        Err(e) => return Err(e),
    };

    if roster.len() != table.len() {
        return Err(LolStatsError::misaligned(format!(
            "scraped {metric} table has {} rows but the stored roster has {} champions",
            table.len(),
            roster.len()
        )));
    }
    for (index, (row, expected)) in table.rows.iter().zip(&roster).enumerate() {
        if row.champion != *expected {
            return Err(LolStatsError::misaligned(format!(
                "row {index}: scraped {metric} table has {} but the stored roster has {}",
                row.champion, expected
            )));
        }
    }
    Ok(())
}
