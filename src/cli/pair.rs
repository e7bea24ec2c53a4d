//! `pairvote pair`: contributors to one pair and their shares.

use super::command::PairArgs;
use super::output;
use super::rows::share_rows;
use super::state::load_ledger;
use crate::config::Config;
use crate::error::Result;

pub fn execute(args: &PairArgs, config: &Config) -> Result<()> {
    let ledger = load_ledger(&args.input.state, args.input.renormalize, config)?;
    let details = ledger.pair_details(args.token_a.as_str(), args.token_b.as_str())?;

    output::section(&format!("Pair {}", details.pair().key()));
    output::field("Total incentive", output::fraction(details.pair().total_incentive()));
    output::results("pair", &details, share_rows(&details))
}
