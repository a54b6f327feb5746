use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use ethers::{types::Address, utils::to_checksum};
use log::LevelFilter;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::feed::FetchPolicy;

/// Command-line surface of the scanner.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "feedscan",
    version,
    about = "Check whether a contract is a Chainlink price feed and print its latest round"
)]
pub struct Cli {
    /// Ethereum JSON-RPC provider URL
    #[arg(short, long)]
    pub provider: String,

    /// Contract address to check
    #[arg(short, long)]
    pub contract: String,

    /// Reporter variant: `strict` aborts on any failed call, `lenient` tolerates
    /// missing metadata and also reads the legacy `latestAnswer`
    #[arg(short, long, value_enum, default_value_t = Mode::Strict)]
    pub mode: Mode,

    /// Report the contract even when it fails feed detection
    #[arg(long)]
    pub force: bool,

    /// Diagnostic log level written to stderr; fetch errors are always shown
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Strict,
    Lenient,
}

impl From<Mode> for FetchPolicy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Strict => FetchPolicy::Strict,
            Mode::Lenient => FetchPolicy::Lenient,
        }
    }
}

/// Immutable per-run input, passed explicitly into every stage.
#[derive(Debug, Clone, Validate)]
pub struct FeedQuery {
    #[validate(custom = "validate_rpc_url")]
    pub rpc_url: String,
    /// Address exactly as the user typed it.
    #[validate(custom = "validate_address")]
    pub contract: String,
    pub address: Address,
    pub policy: FetchPolicy,
    pub gate_on_detection: bool,
}

impl FeedQuery {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let address = Address::from_str(&cli.contract)
            .with_context(|| format!("Invalid contract address: {}", cli.contract))?;

        let query = Self {
            rpc_url: cli.provider.clone(),
            contract: cli.contract.clone(),
            address,
            policy: cli.mode.into(),
            gate_on_detection: !cli.force,
        };
        query.validate_all()?;
        Ok(query)
    }

    pub fn validate_all(&self) -> Result<()> {
        if let Err(e) = self.validate() {
            return Err(anyhow!("Configuration validation failed: {}", e));
        }
        Ok(())
    }
}

fn validate_rpc_url(url: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(url).map_err(|_| ValidationError::new("invalid_rpc_url"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ValidationError::new("unsupported_rpc_scheme")),
    }
}

fn validate_address(address: &str) -> Result<(), ValidationError> {
    let hex = address
        .strip_prefix("0x")
        .ok_or_else(|| ValidationError::new("missing_0x_prefix"))?;
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::new("invalid_address"));
    }

    // Mixed case means EIP-55; single-case input carries no checksum.
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        let parsed =
            Address::from_str(hex).map_err(|_| ValidationError::new("invalid_address"))?;
        if to_checksum(&parsed, None) != address {
            return Err(ValidationError::new("invalid_checksum"));
        }
    }
    Ok(())
}
