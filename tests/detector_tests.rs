mod common;

use feedscan::feed::is_price_feed;
use test_log::test;

use common::MockAggregator;

#[test(tokio::test)]
async fn test_detects_feed_when_all_probes_succeed() {
    assert!(is_price_feed(&common::aggregator(&[])).await);
}

#[test(tokio::test)]
async fn test_any_failed_probe_means_not_a_feed() {
    for method in ["decimals", "description", "latestRoundData"] {
        let source = common::aggregator(&[method]);
        assert!(!is_price_feed(&source).await, "{} failure should reject", method);
    }
}

#[test(tokio::test)]
async fn test_legacy_answer_is_not_probed() {
    let mut source = MockAggregator::new();
    source.expect_decimals().times(1).returning(|| Ok(8));
    source
        .expect_description()
        .times(1)
        .returning(|| Ok("ETH / USD".to_string()));
    source
        .expect_latest_round_data()
        .times(1)
        .returning(|| Ok(common::round_data()));
    source.expect_latest_answer().never();

    assert!(is_price_feed(&source).await);
}
