//! `pairvote demo`: walk through the two-holder reference scenario.
//!
//! Holder A owns 60% and holder B 40%. Both prefer pair X-Y, A with weight
//! 0.7 and B with 0.5, so the pair earns 0.6 * 0.7 + 0.4 * 0.5 = 0.62.

use super::output;
use super::rows::{owner_rows, pair_rows, share_rows};
use crate::config::Config;
use crate::domain::Ledger;
use crate::error::Result;

pub fn execute(config: &Config) -> Result<()> {
    let mut ledger = Ledger::new();
    ledger.set_ownership("A", 600, 0.6)?;
    ledger.set_ownership("B", 400, 0.4)?;
    ledger.upsert_preference("A", "X", "Y", 0.7)?;
    ledger.upsert_preference("B", "X", "Y", 0.5)?;

    output::section("Ownership");
    let owners = ledger.renormalize_voting_power();
    output::results("ownership", &owners, owner_rows(&owners))?;

    let limit = config.ranking.default_limit;
    output::section(&format!("Top {limit} pairs"));
    let pairs = ledger.top_incentivized_pairs(limit);
    output::results("pairs", &pairs, pair_rows(&pairs))?;

    output::section("Pair X-Y");
    let details = ledger.pair_details("X", "Y")?;
    output::results("pair", &details, share_rows(&details))?;

    output::section("Rejected update");
    match ledger.set_ownership("C", 1000, 1.5) {
        Ok(_) => output::warning("stake above 1.0 was accepted"),
        Err(e) => output::note(&format!("stake 1.5 for C rejected: {e}")),
    }

    Ok(())
}
