//! Pick-rate regression comparison command implementation

use crate::cli::types::PatchVocabulary;
use crate::error::Result;
use crate::model::{compare_models, FittedModel};
use crate::pipeline::assemble_tidy;
use crate::storage::DataStore;
use std::path::PathBuf;

use super::resolve_data_root;

/// Handle the pickrate-analysis command: assemble the tidy table, then fit
/// and compare the full and static-only pick-rate models.
pub fn handle_pickrate_analysis(
    data_dir: Option<PathBuf>,
    as_json: bool,
    train_fraction: f64,
) -> Result<()> {
    let store = DataStore::open(resolve_data_root(data_dir))?;
    let vocabulary = PatchVocabulary::current();

    let tidy = assemble_tidy(&store, &vocabulary)?;
    let comparison = compare_models(&tidy, train_fraction)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!(
        "Pick-rate models over {} rows ({} champions x {} days), {} train day(s), {} test day(s):",
        tidy.len(),
        tidy.num_champions,
        tidy.num_days,
        comparison.train_days,
        comparison.test_days
    );
    println!();
    print_model(&comparison.full);
    println!();
    print_model(&comparison.static_only);
    println!();
    println!("Winner by adjusted R^2 on held-out days: {}", comparison.winner);
    Ok(())
}

fn print_model(model: &FittedModel) {
    println!(
        "{} model (trained on {} rows, tested on {} rows):",
        model.name, model.n_train, model.n_test
    );
    println!("  {:<22} {:>12.6}", "intercept", model.intercept);
    for coefficient in &model.coefficients {
        println!("  {:<22} {:>12.6}", coefficient.feature, coefficient.value);
    }
    println!(
        "  R^2 {:.4}  adjusted R^2 {:.4}",
        model.r_squared, model.adj_r_squared
    );
}
