#![allow(dead_code)]

use async_trait::async_trait;
use ethers::types::{I256, U256};
use feedscan::feed::{AggregatorSource, FeedError, RoundData};
use mockall::mock;

pub const FEED_ADDRESS: &str = "0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419";
pub const ROUND_ID: u128 = 18_446_744_073_709_562_300;
pub const ANSWER: i64 = 312_345_678_900;
pub const UPDATED_AT: u64 = 1_700_000_000;

mock! {
    pub Aggregator {}

    #[async_trait]
    impl AggregatorSource for Aggregator {
        async fn decimals(&self) -> Result<u8, FeedError>;
        async fn description(&self) -> Result<String, FeedError>;
        async fn latest_round_data(&self) -> Result<RoundData, FeedError>;
        async fn latest_answer(&self) -> Result<I256, FeedError>;
    }
}

pub fn round_data() -> RoundData {
    RoundData {
        round_id: ROUND_ID,
        answer: I256::from(ANSWER),
        started_at: U256::from(UPDATED_AT - 12),
        updated_at: U256::from(UPDATED_AT),
        answered_in_round: ROUND_ID,
    }
}

fn reverted(method: &'static str) -> FeedError {
    FeedError::Call {
        method,
        reason: "execution reverted".to_string(),
    }
}

/// ETH / USD aggregator where the named methods revert.
pub fn aggregator(failing: &[&str]) -> MockAggregator {
    aggregator_with(failing, 8, round_data())
}

pub fn aggregator_with(failing: &[&str], decimals: u8, round: RoundData) -> MockAggregator {
    let fails = |name: &str| failing.contains(&name);
    let mut mock = MockAggregator::new();

    let fail = fails("decimals");
    mock.expect_decimals()
        .returning(move || if fail { Err(reverted("decimals")) } else { Ok(decimals) });

    let fail = fails("description");
    mock.expect_description().returning(move || {
        if fail {
            Err(reverted("description"))
        } else {
            Ok("ETH / USD".to_string())
        }
    });

    let fail = fails("latestRoundData");
    mock.expect_latest_round_data().returning(move || {
        if fail {
            Err(reverted("latestRoundData"))
        } else {
            Ok(round.clone())
        }
    });

    let fail = fails("latestAnswer");
    mock.expect_latest_answer().returning(move || {
        if fail {
            Err(reverted("latestAnswer"))
        } else {
            Ok(I256::from(ANSWER))
        }
    });

    mock
}
