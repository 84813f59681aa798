//! Shared HTTP plumbing for the scrapers.

use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Some wiki mirrors reject the default reqwest user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Default delay between per-champion page fetches, in milliseconds.
pub const DEFAULT_PAGE_DELAY_MS: u64 = 2000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared scraping client.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}

/// Fetch a page and return its body, failing on non-2xx status.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    Ok(client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?)
}

/// Sleep the polite inter-page delay.
pub async fn page_delay(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
