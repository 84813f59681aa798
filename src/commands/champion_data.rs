//! Champion static-data command implementation

use crate::cli::types::{Champion, Patch, PatchVocabulary};
use crate::error::Result;
use crate::pipeline::patches::patches_since_change;
use crate::pipeline::tables::build_static_table;
use crate::sources::http::build_client;
use crate::sources::wiki::{scrape_champion_roster, scrape_last_patch_changes, scrape_skin_counts};
use crate::storage::DataStore;
use chrono::NaiveDate;
use std::path::PathBuf;

use super::resolve_data_root;

type StaticColumns = (Vec<Champion>, Vec<NaiveDate>, Vec<u32>, Vec<Patch>);

/// Handle the champion-data command: load (or scrape) the four static
/// tables and print the per-champion static view.
pub async fn handle_champion_data(
    data_dir: Option<PathBuf>,
    refresh: bool,
    as_json: bool,
    verbose: bool,
    delay_ms: u64,
) -> Result<()> {
    let store = DataStore::open(resolve_data_root(data_dir))?;

    let (champions, release_dates, skin_counts, last_changed) = if refresh {
        refresh_static_tables(&store, delay_ms, verbose && !as_json).await?
    } else {
        load_static_tables(&store)?
    };

    let vocabulary = PatchVocabulary::current();
    let since_change = patches_since_change(&champions, &last_changed, &vocabulary)?;
    let static_rows = build_static_table(champions, release_dates, skin_counts, since_change)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&static_rows)?);
    } else {
        for row in &static_rows {
            println!(
                "{:<16} released {}  skins {:>2}  patches since change {:>2}",
                row.champion, row.release_date, row.num_skins, row.patches_since_change
            );
        }
        println!("{} champions", static_rows.len());
    }
    Ok(())
}

/// Scrape all four static tables, persist them, and return the columns in
/// the shared alphabetical order.
pub(crate) async fn refresh_static_tables(
    store: &DataStore,
    delay_ms: u64,
    verbose: bool,
) -> Result<StaticColumns> {
    let client = build_client()?;

    if verbose {
        println!("Scraping champion roster...");
    }
    let roster = scrape_champion_roster(&client).await?;
    let (champions, release_dates): (Vec<Champion>, Vec<NaiveDate>) = roster.into_iter().unzip();

    if verbose {
        println!("Scraping skin counts for {} champions...", champions.len());
    }
    let skin_counts = scrape_skin_counts(&client, &champions, delay_ms).await?;

    if verbose {
        println!("Scraping last patch changes...");
    }
    let last_changed = scrape_last_patch_changes(&client, &champions, delay_ms).await?;

    store.save_champion_names(&champions)?;
    store.save_release_dates(&release_dates)?;
    store.save_skin_counts(&skin_counts)?;
    store.save_last_patch_changes(&last_changed)?;
    if verbose {
        println!("Saved static tables to {}", store.root().display());
    }

    Ok((champions, release_dates, skin_counts, last_changed))
}

fn load_static_tables(store: &DataStore) -> Result<StaticColumns> {
    Ok((
        store.load_champion_names()?,
        store.load_release_dates()?,
        store.load_skin_counts()?,
        store.load_last_patch_changes()?,
    ))
}
