//! Champion wiki scrapers: roster (names + release dates), per-champion skin
//! counts, and last-changed patch tokens.
//!
//! Fetching is thin; all page interpretation lives in pure `parse_*`
//! functions that are unit-tested against fixture HTML.

use crate::cli::types::{Champion, Patch};
use crate::error::{LolStatsError, Result};
use crate::sources::http::{fetch_html, page_delay};
use chrono::NaiveDate;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::cli::types::date::parse_iso_date;

const CHAMPION_LIST_URL: &str = "https://leagueoflegends.fandom.com/wiki/List_of_champions";

/// Inline style that identifies one skin tile on a champion's skins page.
const SKIN_TILE_STYLE: &str = "display:inline-block; margin:5px; width:342px";


fn skins_url(champion: &Champion) -> String {
    format!(
        "https://leagueoflegends.fandom.com/wiki/{}/Skins",
        wiki_slug(champion)
    )
}

fn patch_history_url(champion: &Champion) -> String {
    format!("https://lol.gamepedia.com/{}#Patch_History", wiki_slug(champion))
}

/// URL path segment for a champion page.
pub(crate) fn wiki_slug(champion: &Champion) -> String {
    champion.as_str().replace(' ', "_")
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| LolStatsError::Scrape {
        message: format!("bad selector {css:?}: {e}"),
    })
}

fn cell_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Strip the epithet from a roster-cell name: everything after the first
/// comma or after the non-breaking-space + "the" separator is dropped
/// ("Aatrox, the Darkin Blade" and "Jax\u{a0}the Grandmaster" both become
/// the bare name).
pub(crate) fn clean_champion_name(raw: &str) -> Champion {
    let base = raw.split(',').next().unwrap_or(raw);
    let base = base.split("\u{a0}the").next().unwrap_or(base);
    Champion::new(base.replace('\u{a0}', " "))
}

/// Extract `(champion, release_date)` pairs from the champion list page,
/// sorted alphabetically by champion name.
///
/// The roster table is located structurally: the first table whose header
/// row names both a Champion and a Release Date column.
pub fn parse_champion_roster(html: &str) -> Result<Vec<(Champion, NaiveDate)>> {
    let document = Html::parse_document(html);
    let table_sel = selector("table")?;
    let header_sel = selector("th")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;

    for table in document.select(&table_sel) {
        let headers: Vec<String> = table.select(&header_sel).map(cell_text).collect();
        let champ_idx = headers.iter().position(|h| h.starts_with("Champion"));
        let date_idx = headers.iter().position(|h| h.starts_with("Release"));
        let (Some(champ_idx), Some(date_idx)) = (champ_idx, date_idx) else {
            continue;
        };

        let mut roster = Vec::new();
        for row in table.select(&row_sel) {
            let cells: Vec<_> = row.select(&cell_sel).collect();
            if cells.is_empty() {
                // header row
                continue;
            }
            let (Some(name_cell), Some(date_cell)) = (cells.get(champ_idx), cells.get(date_idx))
            else {
                return Err(LolStatsError::Scrape {
                    message: format!(
                        "roster row has {} cells, expected at least {}",
                        cells.len(),
                        champ_idx.max(date_idx) + 1
                    ),
                });
            };
            let champion = clean_champion_name(&cell_text(*name_cell));
            let release_date = parse_iso_date(&cell_text(*date_cell))?;
            roster.push((champion, release_date));
        }

        if roster.is_empty() {
            return Err(LolStatsError::Scrape {
                message: "roster table contains no data rows".to_string(),
            });
        }
        roster.sort_by(|a, b| a.0.cmp(&b.0));
        return Ok(roster);
    }

    Err(LolStatsError::Scrape {
        message: "no table with Champion and Release Date columns found".to_string(),
    })
}

/// Count the skin tiles on a champion's skins page.
pub fn parse_skin_count(html: &str) -> Result<u32> {
    let document = Html::parse_document(html);
    let tile_sel = selector(&format!("div[style=\"{SKIN_TILE_STYLE}\"]"))?;
    Ok(document.select(&tile_sel).count() as u32)
}

/// Extract the most recent patch in which a champion was changed: the first
/// patch-history link on the page whose text is a bare patch token
/// (`v9.18`, `Patch 9.18`, `8.24b`, ...).
pub fn parse_last_patch(html: &str, champion: &Champion) -> Result<Patch> {
    let document = Html::parse_document(html);
    let link_sel = selector("a")?;
    let token_re = Regex::new(r"^\s*(?:Patch\s+)?[vV]?(\d+\.\d+[a-z]?)\s*$").map_err(|e| {
        LolStatsError::Scrape {
            message: format!("bad patch regex: {e}"),
        }
    })?;

    for link in document.select(&link_sel) {
        let text = cell_text(link);
        if let Some(caps) = token_re.captures(&text) {
            return Ok(Patch::new(&caps[1]));
        }
    }

    Err(LolStatsError::Scrape {
        message: format!("no patch-history link matched for {champion}"),
    })
}

/// Fetch and parse the champion roster.
pub async fn scrape_champion_roster(client: &Client) -> Result<Vec<(Champion, NaiveDate)>> {
    let html = fetch_html(client, CHAMPION_LIST_URL).await?;
    parse_champion_roster(&html)
}

/// Fetch each champion's skins page and count its skin tiles, pausing the
/// polite delay between page fetches.
pub async fn scrape_skin_counts(
    client: &Client,
    champions: &[Champion],
    delay_ms: u64,
) -> Result<Vec<u32>> {
    let mut counts = Vec::with_capacity(champions.len());
    for (index, champion) in champions.iter().enumerate() {
        if index > 0 {
            page_delay(delay_ms).await;
        }
        let html = fetch_html(client, &skins_url(champion)).await?;
        counts.push(parse_skin_count(&html)?);
    }
    Ok(counts)
}

/// Fetch each champion's page and extract the most recent patch in which the
/// champion was changed, pausing the polite delay between page fetches.
pub async fn scrape_last_patch_changes(
    client: &Client,
    champions: &[Champion],
    delay_ms: u64,
) -> Result<Vec<Patch>> {
    let mut patches = Vec::with_capacity(champions.len());
    for (index, champion) in champions.iter().enumerate() {
        if index > 0 {
            page_delay(delay_ms).await;
        }
        let html = fetch_html(client, &patch_history_url(champion)).await?;
        patches.push(parse_last_patch(&html, champion)?);
    }
    Ok(patches)
}
