use ethers::contract::abigen;

// Chainlink AggregatorV3Interface plus the legacy AggregatorInterface getter.
// `version()` is part of the interface but never queried.
abigen!(
    ChainlinkAggregator,
    r#"[
        function decimals() external view returns (uint8)
        function description() external view returns (string)
        function latestRoundData() external view returns (uint80 roundId, int256 answer, uint256 startedAt, uint256 updatedAt, uint80 answeredInRound)
        function version() external view returns (uint256)
        function latestAnswer() external view returns (int256)
    ]"#,
);
