//! Daily champion statistics scraper (win/ban/pick rates).
//!
//! The statistics site serves one ranked table per metric. The parser's
//! contract with the markup is minimal: a table whose rows carry a
//! `td.champion` name cell and a percent-formatted rate cell. Rows are
//! sorted alphabetically by champion before persisting, which is the
//! ordering convention every per-day snapshot file shares.

use crate::cli::types::{Champion, RateMetric, ScrapeDate};
use crate::error::{LolStatsError, Result};
use crate::pipeline::tables::{RateRow, RateTable};
use crate::sources::http::fetch_html;
use reqwest::Client;
use scraper::{Html, Selector};

const CHAMPION_STATS_URL: &str = "https://na.op.gg/statistics/champion/";


fn stats_url(metric: RateMetric) -> String {
    format!("{CHAMPION_STATS_URL}?type={}", metric.dir_name())
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LolStatsError::Scrape {
        message: format!("bad selector {css:?}: {e}"),
    })
}

/// Convert a percent cell ("52.33%") to a fraction rounded to 4 decimal
/// places, validating the [0, 1] range.
pub(crate) fn percent_to_rate(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let value: f64 = number.parse().map_err(|_| LolStatsError::InvalidRate {
        value: trimmed.to_string(),
    })?;

    let rate = (value / 100.0 * 10_000.0).round() / 10_000.0;
    if !(0.0..=1.0).contains(&rate) {
        return Err(LolStatsError::InvalidRate {
            value: trimmed.to_string(),
        });
    }
    Ok(rate)
}

/// Extract `(champion, rate)` pairs from a statistics page, sorted
/// alphabetically by champion name.
pub fn parse_rate_rows(html: &str) -> Result<Vec<(Champion, f64)>> {
    let document = Html::parse_document(html);
    let row_sel = selector("table tbody tr")?;
    let name_sel = selector("td.champion")?;
    let cell_sel = selector("td")?;

    let mut rows = Vec::new();
    for row in document.select(&row_sel) {
        let Some(name_cell) = row.select(&name_sel).next() else {
            continue;
        };
        let champion = Champion::new(name_cell.text().collect::<String>());

        let percent_cell = row.select(&cell_sel).find_map(|cell| {
            let text = cell.text().collect::<String>().trim().to_string();
            text.ends_with('%').then_some(text)
        });
        let Some(percent) = percent_cell else {
            return Err(LolStatsError::Scrape {
                message: format!("no percent cell in the row for {champion}"),
            });
        };

        rows.push((champion, percent_to_rate(&percent)?));
    }

    if rows.is_empty() {
        return Err(LolStatsError::Scrape {
            message: "no champion rate rows found".to_string(),
        });
    }
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(rows)
}

/// Fetch and parse the current-day table for one metric, stamping every row
/// with the scrape date.
pub async fn scrape_daily_rates(
    client: &Client,
    metric: RateMetric,
    date: ScrapeDate,
) -> Result<RateTable> {
    let html = fetch_html(client, &stats_url(metric)).await?;
    let rows = parse_rate_rows(&html)?
        .into_iter()
        .map(|(champion, rate)| RateRow {
            champion,
            date: date.as_date(),
            rate,
        })
        .collect();
    Ok(RateTable::new(metric, rows))
}
