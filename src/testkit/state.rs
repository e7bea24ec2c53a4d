//! JSON state documents for bulk-load and CLI tests.

/// The reference scenario as a state document, voting power unnormalized.
pub const REFERENCE_STATE_JSON: &str = r#"{
  "preferences": {
    "A": [{ "tokenA": "X", "tokenB": "Y", "weight": 0.7 }],
    "B": [{ "tokenA": "Y", "tokenB": "X", "weight": 0.5 }]
  },
  "ownership": {
    "A": { "stakeFraction": 0.6, "tokenCount": 600, "votingPower": 0.6 },
    "B": { "stakeFraction": 0.4, "tokenCount": 400, "votingPower": 0.4 }
  }
}"#;

/// Three holders whose stakes sum to 2.0 and whose weights are unnormalized.
pub const SKEWED_STATE_JSON: &str = r#"{
  "preferences": {
    "A": [
      { "tokenA": "ETH", "tokenB": "USDC", "weight": 3.0 },
      { "tokenA": "WBTC", "tokenB": "ETH", "weight": 1.0 }
    ],
    "B": [{ "tokenA": "USDC", "tokenB": "DAI", "weight": 2.0 }],
    "C": [{ "tokenA": "USDC", "tokenB": "ETH", "weight": 0.0 }]
  },
  "ownership": {
    "A": { "stakeFraction": 1.0, "tokenCount": 1000, "votingPower": 1.0 },
    "B": { "stakeFraction": 0.5, "tokenCount": 500, "votingPower": 0.5 },
    "C": { "stakeFraction": 0.5, "tokenCount": 500, "votingPower": 0.5 }
  }
}"#;
