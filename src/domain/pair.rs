//! Derived incentive aggregates for token pairs.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Address, PairKey, TokenId};

/// Aggregated incentive for one unordered token pair.
///
/// Built fresh from the preference table on every query; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncentivizedPair {
    token_a: TokenId,
    token_b: TokenId,
    total_incentive: f64,
    per_address_contribution: BTreeMap<Address, f64>,
}

impl IncentivizedPair {
    /// Create an empty aggregate for `key`, tokens in canonical order.
    #[must_use]
    pub fn new(key: &PairKey) -> Self {
        Self {
            token_a: key.low().clone(),
            token_b: key.high().clone(),
            total_incentive: 0.0,
            per_address_contribution: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn token_a(&self) -> &TokenId {
        &self.token_a
    }

    #[must_use]
    pub fn token_b(&self) -> &TokenId {
        &self.token_b
    }

    #[must_use]
    pub fn key(&self) -> PairKey {
        PairKey::new(self.token_a.clone(), self.token_b.clone())
    }

    #[must_use]
    pub fn total_incentive(&self) -> f64 {
        self.total_incentive
    }

    /// Contribution of each address to the total.
    #[must_use]
    pub fn contributions(&self) -> &BTreeMap<Address, f64> {
        &self.per_address_contribution
    }

    /// Contribution of a single address, if it has one.
    #[must_use]
    pub fn contribution(&self, address: &Address) -> Option<f64> {
        self.per_address_contribution.get(address).copied()
    }

    /// Add `amount` from `address` to this pair.
    pub(crate) fn accumulate(&mut self, address: &Address, amount: f64) {
        self.total_incentive += amount;
        *self
            .per_address_contribution
            .entry(address.clone())
            .or_insert(0.0) += amount;
    }
}

/// A pair aggregate together with each address's share of the total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairDetails {
    #[serde(flatten)]
    pair: IncentivizedPair,
    normalized_contribution: BTreeMap<Address, f64>,
}

impl PairDetails {
    pub(crate) fn new(
        pair: IncentivizedPair,
        normalized_contribution: BTreeMap<Address, f64>,
    ) -> Self {
        Self {
            pair,
            normalized_contribution,
        }
    }

    #[must_use]
    pub fn pair(&self) -> &IncentivizedPair {
        &self.pair
    }

    /// Each contributor's share of the total incentive, summing to 1.0.
    #[must_use]
    pub fn normalized_contributions(&self) -> &BTreeMap<Address, f64> {
        &self.normalized_contribution
    }
}
