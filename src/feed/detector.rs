use log::debug;

use super::AggregatorSource;

/// Probes `decimals`, `description` and `latestRoundData` concurrently.
///
/// Returns `true` only when all three succeed. A single failed call is enough to
/// classify the contract negatively; nothing is retried.
pub async fn is_price_feed<S: AggregatorSource + ?Sized>(source: &S) -> bool {
    match futures::try_join!(
        source.decimals(),
        source.description(),
        source.latest_round_data()
    ) {
        Ok(_) => true,
        Err(e) => {
            debug!("Feed detection failed: {}", e);
            false
        }
    }
}
