//! Table rows for ledger query results.

use std::collections::BTreeMap;

use tabled::Tabled;

use super::output::fraction;
use crate::domain::{Address, IncentivizedPair, OwnershipRecord, PairDetails};

#[derive(Tabled)]
pub struct PairRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Pair")]
    pair: String,
    #[tabled(rename = "Total Incentive")]
    total: String,
    #[tabled(rename = "Contributors")]
    contributors: usize,
}

#[derive(Tabled)]
pub struct OwnerRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Tokens")]
    tokens: u64,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Voting Power")]
    voting_power: String,
}

#[derive(Tabled)]
pub struct ShareRow {
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Contribution")]
    contribution: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// One row per pair, ranked in the given order starting at 1.
pub fn pair_rows(pairs: &[IncentivizedPair]) -> Vec<PairRow> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| PairRow {
            rank: i + 1,
            pair: pair.key().to_string(),
            total: fraction(pair.total_incentive()),
            contributors: pair.contributions().len(),
        })
        .collect()
}

pub fn owner_rows(table: &BTreeMap<Address, OwnershipRecord>) -> Vec<OwnerRow> {
    table
        .iter()
        .map(|(address, record)| OwnerRow {
            address: address.to_string(),
            tokens: record.token_count(),
            stake: fraction(record.stake_fraction()),
            voting_power: fraction(record.voting_power()),
        })
        .collect()
}

pub fn share_rows(details: &PairDetails) -> Vec<ShareRow> {
    let shares = details.normalized_contributions();
    details
        .pair()
        .contributions()
        .iter()
        .map(|(address, amount)| ShareRow {
            address: address.to_string(),
            contribution: fraction(*amount),
            share: fraction(shares.get(address).copied().unwrap_or(0.0)),
        })
        .collect()
}
