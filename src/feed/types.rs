use ethers::types::{I256, U256};
use std::fmt;

use super::convert::format_price;

/// How the reporter treats individual call failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Any failed call aborts the whole fetch.
    #[default]
    Strict,
    /// Metadata calls fall back to absent values; `latestAnswer` is mandatory.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: u128,
    pub answer: I256,
    pub started_at: U256,
    pub updated_at: U256,
    pub answered_in_round: u128,
}

/// Unprocessed call results. Fields are only ever `None` under `FetchPolicy::Lenient`.
#[derive(Debug, Clone, Default)]
pub struct RawFeedData {
    pub decimals: Option<u8>,
    pub description: Option<String>,
    pub round: Option<RoundData>,
    pub latest_answer: Option<I256>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedReport {
    pub address: String,
    pub pair: Option<String>,
    pub price: f64,
    pub last_update: Option<String>,
    pub round_id: Option<String>,
    pub latest_answer: Option<String>,
    pub decimals: Option<String>,
    pub policy: FetchPolicy,
}

const MISSING: &str = "n/a";

impl fmt::Display for FeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found Chainlink Price Feed:")?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Pair: {}", self.pair.as_deref().unwrap_or(MISSING))?;
        writeln!(f, "Current Price: {}", format_price(self.price))?;
        writeln!(f, "Last Update: {}", self.last_update.as_deref().unwrap_or(MISSING))?;
        writeln!(f, "Round ID: {}", self.round_id.as_deref().unwrap_or(MISSING))?;
        if self.policy == FetchPolicy::Lenient {
            writeln!(
                f,
                "Latest Answer: {}",
                self.latest_answer.as_deref().unwrap_or(MISSING)
            )?;
            if let Some(decimals) = &self.decimals {
                writeln!(f, "Decimals: {}", decimals)?;
            }
        }
        writeln!(f, "-------------------")
    }
}
