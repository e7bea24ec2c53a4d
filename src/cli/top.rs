//! `pairvote top`: rank pairs by total incentive.

use super::command::TopArgs;
use super::output;
use super::rows::pair_rows;
use super::state::load_ledger;
use crate::config::Config;
use crate::error::Result;

pub fn execute(args: &TopArgs, config: &Config) -> Result<()> {
    let ledger = load_ledger(&args.input.state, args.input.renormalize, config)?;
    let limit = resolve_limit(args.limit, config.ranking.default_limit);
    let pairs = ledger.top_incentivized_pairs(limit);

    output::section(&format!("Top {limit} pairs"));
    output::results("pairs", &pairs, pair_rows(&pairs))
}

/// Map a signed CLI limit onto a count; zero and negatives list nothing.
fn resolve_limit(requested: Option<i64>, default: usize) -> usize {
    match requested {
        None => default,
        Some(n) if n <= 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_falls_back_to_default() {
        assert_eq!(resolve_limit(None, 5), 5);
    }

    #[test]
    fn non_positive_limit_lists_nothing() {
        assert_eq!(resolve_limit(Some(0), 5), 0);
        assert_eq!(resolve_limit(Some(-4), 5), 0);
    }

    #[test]
    fn positive_limit_is_used() {
        assert_eq!(resolve_limit(Some(12), 5), 12);
    }
}
