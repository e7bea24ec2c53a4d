//! `pairvote normalize`: rewrite a state file with normalized weights.

use tracing::warn;

use super::command::NormalizeArgs;
use super::output;
use super::state::load_ledger;
use crate::config::Config;
use crate::domain::{Address, Ledger, LedgerState};
use crate::error::{LedgerError, Result};

pub fn execute(args: &NormalizeArgs, config: &Config) -> Result<()> {
    let mut ledger = load_ledger(&args.state, false, config)?;
    let skipped = normalize_all(&mut ledger)?;

    // A bare document on stdout leaves skip reports to the stderr log.
    if args.output.is_some() || output::is_json() {
        for address in &skipped {
            output::warning(&format!(
                "skipped {address}: preference weights sum to zero"
            ));
        }
    }

    let state = ledger.snapshot();
    match &args.output {
        Some(path) => {
            std::fs::write(path, render(&state)?)?;
            output::success(&format!("wrote {}", path.display()));
        }
        None if output::is_json() => output::emit("state", serde_json::to_value(&state)?),
        None => println!("{}", render(&state)?),
    }
    Ok(())
}

/// Normalize every holder's weights, then the voting power table.
///
/// Holders whose weights sum to zero are left as they are and returned.
fn normalize_all(ledger: &mut Ledger) -> Result<Vec<Address>> {
    let addresses: Vec<Address> = ledger.preference_addresses().cloned().collect();
    let mut skipped = Vec::new();

    for address in addresses {
        match ledger.normalize_preferences(address.clone()) {
            Ok(_) => {}
            Err(LedgerError::ZeroTotalWeight { .. }) => {
                warn!(%address, "Skipping holder with zero total weight");
                skipped.push(address);
            }
            Err(e) => return Err(e.into()),
        }
    }

    ledger.renormalize_voting_power();
    Ok(skipped)
}

fn render(state: &LedgerState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{total_weight, OwnershipRecord};
    use crate::testkit::domain::approx_eq;
    use crate::testkit::state::SKEWED_STATE_JSON;

    #[test]
    fn normalizes_weights_and_voting_power() {
        let mut ledger = Ledger::new();
        ledger.bulk_load_json(SKEWED_STATE_JSON).unwrap();

        let skipped = normalize_all(&mut ledger).unwrap();
        let state = ledger.snapshot();

        assert_eq!(skipped, vec![Address::from("C")]);
        assert!(approx_eq(total_weight(&state.preferences[&Address::from("A")]), 1.0));
        assert!(approx_eq(total_weight(&state.preferences[&Address::from("B")]), 1.0));
        assert_eq!(total_weight(&state.preferences[&Address::from("C")]), 0.0);

        let power: f64 = state
            .ownership
            .values()
            .map(OwnershipRecord::voting_power)
            .sum();
        assert!(approx_eq(power, 1.0));
    }

    #[test]
    fn rendered_state_loads_back() {
        let mut ledger = Ledger::new();
        ledger.bulk_load_json(SKEWED_STATE_JSON).unwrap();
        normalize_all(&mut ledger).unwrap();
        let state = ledger.snapshot();

        let mut reloaded = Ledger::new();
        reloaded.bulk_load_json(&render(&state).unwrap()).unwrap();
        assert_eq!(reloaded.snapshot(), state);
    }
}
