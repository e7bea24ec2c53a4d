//! Loading ledger state files for CLI commands.

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::domain::Ledger;
use crate::error::Result;

/// Read a state document from `path` into a fresh ledger.
///
/// Voting power is renormalized when `renormalize` is set or the
/// configuration asks for it on every load.
pub fn load_ledger(path: &Path, renormalize: bool, config: &Config) -> Result<Ledger> {
    let content = std::fs::read_to_string(path)?;
    let mut ledger = Ledger::new();
    ledger.bulk_load_json(&content)?;

    info!(
        path = %path.display(),
        owners = ledger.owners().count(),
        "Loaded ledger state"
    );

    if renormalize || config.ledger.renormalize_on_load {
        ledger.renormalize_voting_power();
    }

    Ok(ledger)
}
