use anyhow::Result;
use clap::Parser;
use log::info;

use feedscan::{
    config::{Cli, FeedQuery},
    runner::{connect, run, RunOutcome},
    utils::setup_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logger(cli.log_level)?;

    let query = FeedQuery::from_cli(&cli)?;
    let aggregator = connect(&query)?;

    let mut stdout = std::io::stdout().lock();
    match run(&query, &aggregator, &mut stdout).await? {
        RunOutcome::Reported(_) => info!("Report printed for {}", query.contract),
        RunOutcome::NoData => info!("No data returned for {}", query.contract),
        RunOutcome::NotAFeed => info!("{} skipped", query.contract),
    }

    Ok(())
}
