pub mod convert;
pub mod detector;
pub mod reporter;
pub mod types;

use async_trait::async_trait;
use ethers::{
    providers::Middleware,
    types::{I256, U256},
};
use thiserror::Error;

use crate::abi::ChainlinkAggregator;

pub use detector::is_price_feed;
pub use reporter::fetch_feed_report;
pub use types::{FeedReport, FetchPolicy, RawFeedData, RoundData};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("call to {method}() failed: {reason}")]
    Call { method: &'static str, reason: String },
    #[error("updatedAt {0} is not a representable timestamp")]
    Timestamp(U256),
}

/// Read side of a Chainlink aggregator.
///
/// Implemented for the generated contract binding; tests substitute a mock.
#[async_trait]
pub trait AggregatorSource: Send + Sync {
    async fn decimals(&self) -> Result<u8, FeedError>;
    async fn description(&self) -> Result<String, FeedError>;
    async fn latest_round_data(&self) -> Result<RoundData, FeedError>;
    async fn latest_answer(&self) -> Result<I256, FeedError>;
}

fn call_error(method: &'static str, e: impl std::fmt::Display) -> FeedError {
    FeedError::Call {
        method,
        reason: e.to_string(),
    }
}

#[async_trait]
impl<M: Middleware + 'static> AggregatorSource for ChainlinkAggregator<M> {
    async fn decimals(&self) -> Result<u8, FeedError> {
        ChainlinkAggregator::decimals(self)
            .call()
            .await
            .map_err(|e| call_error("decimals", e))
    }

    async fn description(&self) -> Result<String, FeedError> {
        ChainlinkAggregator::description(self)
            .call()
            .await
            .map_err(|e| call_error("description", e))
    }

    async fn latest_round_data(&self) -> Result<RoundData, FeedError> {
        let (round_id, answer, started_at, updated_at, answered_in_round) =
            ChainlinkAggregator::latest_round_data(self)
                .call()
                .await
                .map_err(|e| call_error("latestRoundData", e))?;

        Ok(RoundData {
            round_id,
            answer,
            started_at,
            updated_at,
            answered_in_round,
        })
    }

    async fn latest_answer(&self) -> Result<I256, FeedError> {
        ChainlinkAggregator::latest_answer(self)
            .call()
            .await
            .map_err(|e| call_error("latestAnswer", e))
    }
}
