use chrono::{SecondsFormat, TimeZone, Utc};
use ethers::types::{I256, U256};

use super::FeedError;

/// Exponent used when a lenient fetch could not read `decimals()`.
pub const FALLBACK_DECIMALS: u8 = 8;

/// Scales a raw fixed-point answer into a human-readable price.
pub fn scale_answer(answer: I256, decimals: u8) -> f64 {
    // Parsing the decimal string keeps precision for answers wider than i128.
    let raw: f64 = answer.to_string().parse().unwrap_or(f64::NAN);
    raw / 10f64.powi(i32::from(decimals))
}

/// Formats a price the way a JavaScript number prints: plain decimals inside
/// `[1e-6, 1e21)`, exponent notation with an explicit sign outside it.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = price.abs();
    if price == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{}", price);
    }

    let exp = format!("{:e}", price);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => exp,
    }
}

/// Renders a unix timestamp in seconds as ISO-8601 with millisecond precision.
pub fn format_timestamp(updated_at: U256) -> Result<String, FeedError> {
    if updated_at > U256::from(i64::MAX as u64) {
        return Err(FeedError::Timestamp(updated_at));
    }

    Utc.timestamp_opt(updated_at.as_u64() as i64, 0)
        .single()
        .map(|at| at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or(FeedError::Timestamp(updated_at))
}
