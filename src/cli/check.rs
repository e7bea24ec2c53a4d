//! `pairvote check`: load a state file and summarize it.
//!
//! Reports table sizes and flags holders whose weights or the voting power
//! table are not normalized, without changing anything.

use serde_json::json;

use super::command::StateArg;
use super::output;
use super::state::load_ledger;
use crate::config::Config;
use crate::domain::{total_weight, Ledger, OwnershipRecord, NORMALIZATION_TOLERANCE};
use crate::error::Result;

pub fn execute(args: &StateArg, config: &Config) -> Result<()> {
    let ledger = load_ledger(&args.state, args.renormalize, config)?;
    let summary = summarize(&ledger);

    output::section("Ledger state");
    output::field("Owners", summary.owners);
    output::field("Voters", summary.voters);
    output::field("Pairs", summary.pairs);
    output::field("Voting power", output::fraction(summary.voting_power_total));

    let power_skewed = summary.power_needs_renormalizing();
    if power_skewed {
        output::warning("voting power does not sum to 1.0; run with --renormalize");
    }
    for address in &summary.unnormalized {
        output::warning(&format!("preference weights for {address} do not sum to 1.0"));
    }
    for address in &summary.unowned {
        output::warning(&format!("{address} has preferences but no ownership record"));
    }

    if output::is_json() {
        output::emit(
            "summary",
            json!({
                "owners": summary.owners,
                "voters": summary.voters,
                "pairs": summary.pairs,
                "votingPowerTotal": summary.voting_power_total,
                "unnormalized": summary.unnormalized,
                "unowned": summary.unowned,
            }),
        );
    } else if !power_skewed && summary.unnormalized.is_empty() && summary.unowned.is_empty() {
        output::success("state is consistent");
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Summary {
    owners: usize,
    voters: usize,
    pairs: usize,
    voting_power_total: f64,
    unnormalized: Vec<String>,
    unowned: Vec<String>,
}

impl Summary {
    /// Renormalizing helps only when some holder has voting power.
    fn power_needs_renormalizing(&self) -> bool {
        self.voting_power_total != 0.0 && !is_normalized(self.voting_power_total)
    }
}

fn summarize(ledger: &Ledger) -> Summary {
    let snapshot = ledger.snapshot();
    let mut summary = Summary {
        owners: snapshot.ownership.len(),
        pairs: ledger.incentivized_pairs().len(),
        voting_power_total: snapshot
            .ownership
            .values()
            .map(OwnershipRecord::voting_power)
            .sum::<f64>()
            // An empty sum is -0.0.
            + 0.0,
        ..Summary::default()
    };

    for (address, records) in &snapshot.preferences {
        if records.is_empty() {
            continue;
        }
        summary.voters += 1;
        if !is_normalized(total_weight(records)) {
            summary.unnormalized.push(address.to_string());
        }
        if !snapshot.ownership.contains_key(address) {
            summary.unowned.push(address.to_string());
        }
    }
    summary
}

fn is_normalized(total: f64) -> bool {
    (total - 1.0).abs() <= NORMALIZATION_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::reference_ledger;
    use crate::testkit::state::SKEWED_STATE_JSON;

    #[test]
    fn reference_state_is_clean_apart_from_weights() {
        let summary = summarize(&reference_ledger());

        assert_eq!(summary.owners, 2);
        assert_eq!(summary.voters, 2);
        assert_eq!(summary.pairs, 1);
        assert!(is_normalized(summary.voting_power_total));
        assert!(!summary.power_needs_renormalizing());
        assert_eq!(summary.unnormalized, vec!["A", "B"]);
        assert!(summary.unowned.is_empty());
    }

    #[test]
    fn skewed_state_reports_every_issue() {
        let mut ledger = Ledger::new();
        ledger.bulk_load_json(SKEWED_STATE_JSON).unwrap();
        let summary = summarize(&ledger);

        assert_eq!(summary.owners, 3);
        assert_eq!(summary.pairs, 3);
        assert!(summary.power_needs_renormalizing());
        assert_eq!(summary.unnormalized, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_state_has_nothing_to_renormalize() {
        let summary = summarize(&Ledger::new());

        assert_eq!(summary.owners, 0);
        assert!(summary.voting_power_total.is_sign_positive());
        assert_eq!(output::fraction(summary.voting_power_total), "0.000000");
        assert!(!summary.power_needs_renormalizing());
    }
}
