//! Tidy dataset command implementation

use crate::cli::types::PatchVocabulary;
use crate::error::Result;
use crate::pipeline::assemble_tidy;
use crate::storage::DataStore;
use std::path::PathBuf;

use super::{champion_data::refresh_static_tables, resolve_data_root};

/// Handle the tidy-data command: run the full assembly pipeline over the
/// store and write (or print) the model-ready table.
pub async fn handle_tidy_data(
    data_dir: Option<PathBuf>,
    refresh: bool,
    as_json: bool,
    output: Option<PathBuf>,
    verbose: bool,
    delay_ms: u64,
) -> Result<()> {
    let store = DataStore::open(resolve_data_root(data_dir))?;

    if refresh {
        refresh_static_tables(&store, delay_ms, verbose && !as_json).await?;
    }

    if verbose && !as_json {
        println!("Assembling tidy table from {}", store.root().display());
    }
    let vocabulary = PatchVocabulary::current();
    let tidy = assemble_tidy(&store, &vocabulary)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&tidy.rows)?);
    } else {
        let path = store.write_tidy(&tidy, output.as_deref())?;
        println!(
            "Wrote {} rows ({} champions x {} days) to {}",
            tidy.len(),
            tidy.num_champions,
            tidy.num_days,
            path.display()
        );
    }
    Ok(())
}
