use ethers::types::I256;
use log::{error, warn};

use super::{
    convert::{format_timestamp, scale_answer, FALLBACK_DECIMALS},
    AggregatorSource, FeedError, FeedReport, FetchPolicy, RawFeedData,
};

/// Fetches display data for `address` and builds a report.
///
/// Returns `None` when the fetch fails under the given policy. Failures are logged
/// here and never propagate to the caller.
pub async fn fetch_feed_report<S: AggregatorSource + ?Sized>(
    source: &S,
    address: &str,
    policy: FetchPolicy,
) -> Option<FeedReport> {
    let result = match policy {
        FetchPolicy::Strict => fetch_strict(source, address).await,
        FetchPolicy::Lenient => fetch_lenient(source, address).await,
    };

    match result {
        Ok(report) => Some(report),
        Err(e) => {
            error!("Error fetching data for {}: {}", address, e);
            None
        }
    }
}

async fn fetch_strict<S: AggregatorSource + ?Sized>(
    source: &S,
    address: &str,
) -> Result<FeedReport, FeedError> {
    let (decimals, description, round) = futures::try_join!(
        source.decimals(),
        source.description(),
        source.latest_round_data()
    )?;

    Ok(FeedReport {
        address: address.to_string(),
        pair: Some(description),
        price: scale_answer(round.answer, decimals),
        last_update: Some(format_timestamp(round.updated_at)?),
        round_id: Some(round.round_id.to_string()),
        latest_answer: None,
        decimals: None,
        policy: FetchPolicy::Strict,
    })
}

async fn fetch_lenient<S: AggregatorSource + ?Sized>(
    source: &S,
    address: &str,
) -> Result<FeedReport, FeedError> {
    let (decimals, description, round, answer) = futures::join!(
        source.decimals(),
        source.description(),
        source.latest_round_data(),
        source.latest_answer()
    );

    // The answer is the report; everything else only describes it.
    let answer = answer?;
    let raw = RawFeedData {
        decimals: soft(address, decimals),
        description: soft(address, description),
        round: soft(address, round),
        latest_answer: Some(answer),
    };

    Ok(lenient_report(address, raw, answer))
}

fn lenient_report(address: &str, raw: RawFeedData, answer: I256) -> FeedReport {
    let exponent = raw.decimals.unwrap_or(FALLBACK_DECIMALS);
    let last_update = raw
        .round
        .as_ref()
        .and_then(|round| soft(address, format_timestamp(round.updated_at)));

    FeedReport {
        address: address.to_string(),
        pair: raw.description,
        price: scale_answer(answer, exponent),
        last_update,
        round_id: raw.round.map(|round| round.round_id.to_string()),
        latest_answer: Some(answer.to_string()),
        decimals: raw.decimals.map(|d| d.to_string()),
        policy: FetchPolicy::Lenient,
    }
}

fn soft<T>(address: &str, result: Result<T, FeedError>) -> Option<T> {
    result
        .map_err(|e| warn!("{}: {}, continuing without it", address, e))
        .ok()
}
