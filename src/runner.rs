use anyhow::{Context, Result};
use ethers::providers::{Http, Provider};
use log::{info, warn};
use std::{io::Write, sync::Arc};

use crate::{
    abi::ChainlinkAggregator,
    config::FeedQuery,
    feed::{fetch_feed_report, is_price_feed, AggregatorSource, FeedReport},
};

/// How a single run ended. All variants are successful runs.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Reported(FeedReport),
    NoData,
    NotAFeed,
}

/// Builds the aggregator binding for the configured endpoint and address.
pub fn connect(query: &FeedQuery) -> Result<ChainlinkAggregator<Provider<Http>>> {
    let provider = Provider::<Http>::try_from(query.rpc_url.as_str())
        .with_context(|| format!("Failed to create provider for {}", query.rpc_url))?;
    Ok(ChainlinkAggregator::new(query.address, Arc::new(provider)))
}

/// Detects, reports and prints for the single configured contract.
pub async fn run<S, W>(query: &FeedQuery, source: &S, out: &mut W) -> Result<RunOutcome>
where
    S: AggregatorSource + ?Sized,
    W: Write,
{
    writeln!(out, "Scanning contracts for Chainlink price feeds...\n")?;

    let address = query.contract.as_str();
    let is_feed = is_price_feed(source).await;
    info!("Detection for {}: {}", address, if is_feed { "price feed" } else { "not a price feed" });

    if !is_feed {
        if query.gate_on_detection {
            writeln!(out, "{} is not a Chainlink price feed\n", address)?;
            return Ok(RunOutcome::NotAFeed);
        }
        warn!("Reporting {} anyway (--force)", address);
    }

    let outcome = match fetch_feed_report(source, address, query.policy).await {
        Some(report) => {
            writeln!(out, "{}", report)?;
            RunOutcome::Reported(report)
        }
        None => RunOutcome::NoData,
    };
    out.flush().context("Failed to flush output")?;

    Ok(outcome)
}
