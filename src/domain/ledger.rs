//! The ledger: preference and ownership tables plus the computations over them.
//!
//! # Update policy
//!
//! Preference updates follow one policy throughout:
//!
//! - An address must hold an ownership record before it may state a
//!   preference. Unknown addresses are rejected with
//!   [`LedgerError::UnknownAddress`].
//! - Upserting a pair that already exists (in either token order)
//!   overwrites its weight. Weights are not additive.
//! - Upserts never normalize. Call [`Ledger::normalize_preferences`]
//!   explicitly.
//! - Tokens are stored in the order the caller gave them. Pair identity is
//!   the unordered token set; aggregation uses the sorted [`PairKey`].
//!
//! [`Ledger::set_ownership`] likewise never renormalizes voting power
//! across addresses; call [`Ledger::renormalize_voting_power`] when the
//! table should sum to 1.0.
//!
//! Bulk loads are trusted verbatim: no range checks and no normalization.
//!
//! # Example
//!
//! ```
//! use pairvote::domain::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_ownership("alice", 600, 0.6).unwrap();
//! ledger.set_ownership("bob", 400, 0.4).unwrap();
//! ledger.upsert_preference("alice", "X", "Y", 0.7).unwrap();
//! ledger.upsert_preference("bob", "Y", "X", 0.5).unwrap();
//!
//! let top = ledger.top_incentivized_pairs(5);
//! assert_eq!(top.len(), 1);
//! assert!((top[0].total_incentive() - 0.62).abs() < 1e-9);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::ownership::is_valid_stake;
use super::preference::total_weight;
use super::{
    Address, IncentivizedPair, OwnershipRecord, PairDetails, PairKey, PreferenceRecord, TokenId,
};
use crate::error::LedgerError;

/// Sums within this distance of 1.0 are treated as already normalized.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-3;

/// Number of pairs returned by ranking when the caller has no preference.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Both ledger tables, as loaded from or handed out to callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerState {
    pub preferences: BTreeMap<Address, Vec<PreferenceRecord>>,
    pub ownership: BTreeMap<Address, OwnershipRecord>,
}

impl LedgerState {
    /// Returns true if both tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty() && self.ownership.is_empty()
    }
}

/// Mutable ledger instance.
///
/// Instances share nothing. Mutation needs `&mut self`; wrap the ledger in
/// [`SharedLedger`](super::SharedLedger) to share it across threads.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    state: LedgerState,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding `state` verbatim.
    #[must_use]
    pub fn from_state(state: LedgerState) -> Self {
        Self { state }
    }

    /// Replace both tables with `state`.
    pub fn bulk_load(&mut self, state: LedgerState) {
        debug!(
            preference_addresses = state.preferences.len(),
            owners = state.ownership.len(),
            "Bulk loading ledger state"
        );
        self.state = state;
    }

    /// Replace both tables from an untyped JSON value.
    ///
    /// Fails with [`LedgerError::InvalidInput`] when the value is null, not
    /// an object, or does not describe both tables.
    pub fn bulk_load_value(&mut self, value: serde_json::Value) -> Result<(), LedgerError> {
        if value.is_null() {
            return Err(LedgerError::invalid_input("state payload is absent"));
        }
        if !value.is_object() {
            return Err(LedgerError::invalid_input(
                "state payload must be an object with preferences and ownership",
            ));
        }
        let state: LedgerState = serde_json::from_value(value)
            .map_err(|e| LedgerError::invalid_input(e.to_string()))?;
        self.bulk_load(state);
        Ok(())
    }

    /// Replace both tables from a JSON document.
    pub fn bulk_load_json(&mut self, json: &str) -> Result<(), LedgerError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LedgerError::invalid_input(e.to_string()))?;
        self.bulk_load_value(value)
    }

    /// Clear both tables.
    pub fn reset(&mut self) {
        debug!("Resetting ledger");
        self.state = LedgerState::default();
    }

    /// Deep copy of both tables.
    #[must_use]
    pub fn snapshot(&self) -> LedgerState {
        self.state.clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Addresses that hold at least one preference record.
    pub fn preference_addresses(&self) -> impl Iterator<Item = &Address> {
        self.state
            .preferences
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(address, _)| address)
    }

    /// Addresses that hold an ownership record.
    pub fn owners(&self) -> impl Iterator<Item = &Address> {
        self.state.ownership.keys()
    }

    /// Preference records for `address`, in insertion order.
    #[must_use]
    pub fn preferences(&self, address: &Address) -> Option<&[PreferenceRecord]> {
        self.state.preferences.get(address).map(Vec::as_slice)
    }

    /// Ownership record for `address`.
    pub fn ownership(&self, address: impl Into<Address>) -> Result<OwnershipRecord, LedgerError> {
        let address = address.into();
        self.state
            .ownership
            .get(&address)
            .cloned()
            .ok_or_else(|| LedgerError::unknown_address(address.as_str()))
    }

    /// Insert or overwrite the weight `address` gives to `{token_a, token_b}`.
    ///
    /// Returns the address's full preference list after the update.
    pub fn upsert_preference(
        &mut self,
        address: impl Into<Address>,
        token_a: impl Into<TokenId>,
        token_b: impl Into<TokenId>,
        weight: f64,
    ) -> Result<Vec<PreferenceRecord>, LedgerError> {
        let address = address.into();
        let (token_a, token_b) = (token_a.into(), token_b.into());

        if token_a == token_b {
            return Err(LedgerError::invalid_input(format!(
                "pair needs two distinct tokens, got {token_a} twice"
            )));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(LedgerError::InvalidRange {
                field: "weight",
                value: weight,
            });
        }
        if !self.state.ownership.contains_key(&address) {
            return Err(LedgerError::unknown_address(address.as_str()));
        }

        let records = self.state.preferences.entry(address.clone()).or_default();
        match records.iter_mut().find(|r| r.is_pair(&token_a, &token_b)) {
            Some(existing) => {
                trace!(
                    %address,
                    %token_a,
                    %token_b,
                    old = existing.weight(),
                    new = weight,
                    "Overwriting preference"
                );
                existing.set_weight(weight);
            }
            None => {
                trace!(%address, %token_a, %token_b, weight, "Appending preference");
                records.push(PreferenceRecord::new(token_a, token_b, weight));
            }
        }

        Ok(records.clone())
    }

    /// Write the ownership record for `address`, overwriting any previous one.
    ///
    /// Voting power is reset to the new stake fraction. Other addresses are
    /// untouched.
    pub fn set_ownership(
        &mut self,
        address: impl Into<Address>,
        token_count: u64,
        stake_fraction: f64,
    ) -> Result<OwnershipRecord, LedgerError> {
        if !is_valid_stake(stake_fraction) {
            return Err(LedgerError::InvalidRange {
                field: "stake_fraction",
                value: stake_fraction,
            });
        }

        let address = address.into();
        let record = OwnershipRecord::new(token_count, stake_fraction);
        debug!(%address, token_count, stake_fraction, "Setting ownership");
        self.state.ownership.insert(address, record.clone());
        Ok(record)
    }

    /// Rescale the weights of `address` so they sum to 1.0.
    ///
    /// Sums already within [`NORMALIZATION_TOLERANCE`] of 1.0 are left as
    /// they are.
    pub fn normalize_preferences(
        &mut self,
        address: impl Into<Address>,
    ) -> Result<Vec<PreferenceRecord>, LedgerError> {
        let address = address.into();
        let records = match self.state.preferences.get_mut(&address) {
            Some(records) if !records.is_empty() => records,
            _ => return Err(LedgerError::unknown_address(address.as_str())),
        };

        let total = total_weight(records);
        if total == 0.0 {
            return Err(LedgerError::ZeroTotalWeight {
                address: address.to_string(),
            });
        }

        if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
            debug!(%address, total, records = records.len(), "Normalizing preferences");
            for record in records.iter_mut() {
                record.set_weight(record.weight() / total);
            }
        }

        Ok(records.clone())
    }

    /// Rescale every stake fraction so the table sums to 1.0.
    ///
    /// An empty or all-zero table is left alone. Idempotent.
    pub fn renormalize_voting_power(&mut self) -> BTreeMap<Address, OwnershipRecord> {
        let total: f64 = self
            .state
            .ownership
            .values()
            .map(OwnershipRecord::stake_fraction)
            .sum();

        if total != 0.0 && (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
            debug!(total, owners = self.state.ownership.len(), "Renormalizing voting power");
            for record in self.state.ownership.values_mut() {
                record.rescale(total);
            }
        }

        self.state.ownership.clone()
    }

    /// Aggregate incentive for every pair with at least one preference.
    ///
    /// An address without an ownership record contributes with zero voting
    /// power rather than failing the computation.
    #[must_use]
    pub fn incentivized_pairs(&self) -> BTreeMap<PairKey, IncentivizedPair> {
        let mut pairs: BTreeMap<PairKey, IncentivizedPair> = BTreeMap::new();

        for (address, records) in &self.state.preferences {
            let voting_power = self
                .state
                .ownership
                .get(address)
                .map_or(0.0, OwnershipRecord::voting_power);

            for record in records {
                let key = record.pair_key();
                pairs
                    .entry(key)
                    .or_insert_with_key(IncentivizedPair::new)
                    .accumulate(address, voting_power * record.weight());
            }
        }

        trace!(pairs = pairs.len(), "Aggregated pair incentives");
        pairs
    }

    /// The `limit` pairs with the highest total incentive, highest first.
    ///
    /// Order among equal totals is not guaranteed.
    #[must_use]
    pub fn top_incentivized_pairs(&self, limit: usize) -> Vec<IncentivizedPair> {
        if limit == 0 {
            return Vec::new();
        }
        let mut ranked: Vec<IncentivizedPair> = self.incentivized_pairs().into_values().collect();
        ranked.sort_by(|a, b| b.total_incentive().total_cmp(&a.total_incentive()));
        ranked.truncate(limit);
        ranked
    }

    /// Aggregate for `{token_a, token_b}` plus each contributor's share.
    pub fn pair_details(
        &self,
        token_a: impl Into<TokenId>,
        token_b: impl Into<TokenId>,
    ) -> Result<PairDetails, LedgerError> {
        let key = PairKey::new(token_a, token_b);
        let pair = self
            .incentivized_pairs()
            .remove(&key)
            .ok_or_else(|| LedgerError::PairNotFound {
                pair: key.to_string(),
            })?;

        let total = pair.total_incentive();
        if total == 0.0 {
            return Err(LedgerError::DivisionUndefined {
                pair: key.to_string(),
            });
        }

        let shares = pair
            .contributions()
            .iter()
            .map(|(address, amount)| (address.clone(), amount / total))
            .collect();

        Ok(PairDetails::new(pair, shares))
    }
}
