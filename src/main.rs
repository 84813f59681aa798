//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use lol_stats::{
    cli::{Commands, GetCmd, LolStats},
    commands::{
        champion_data::handle_champion_data, pickrate_analysis::handle_pickrate_analysis,
        rate_data::handle_rate_data, tidy_data::handle_tidy_data,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = LolStats::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::ChampionData {
                store,
                refresh,
                json,
                verbose,
                delay_ms,
            } => handle_champion_data(store.data_dir, refresh, json, verbose, delay_ms).await?,

            GetCmd::RateData {
                store,
                metrics,
                verbose,
                delay_ms,
            } => handle_rate_data(store.data_dir, metrics, verbose, delay_ms).await?,

            GetCmd::TidyData {
                store,
                refresh,
                json,
                output,
                verbose,
                delay_ms,
            } => {
                handle_tidy_data(store.data_dir, refresh, json, output, verbose, delay_ms).await?
            }

            GetCmd::PickrateAnalysis {
                store,
                json,
                train_fraction,
            } => handle_pickrate_analysis(store.data_dir, json, train_fraction)?,
        },
    }

    Ok(())
}
