//! Ownership records and the voting power derived from them.

use serde::{Deserialize, Serialize};

/// An address's stake in the tracked supply.
///
/// `voting_power` has no public setter: it is written alongside
/// `stake_fraction` and rewritten only by voting-power renormalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipRecord {
    stake_fraction: f64,
    token_count: u64,
    voting_power: f64,
}

impl OwnershipRecord {
    /// Create a record whose voting power equals its stake fraction.
    #[must_use]
    pub fn new(token_count: u64, stake_fraction: f64) -> Self {
        Self {
            stake_fraction,
            token_count,
            voting_power: stake_fraction,
        }
    }

    #[must_use]
    pub fn stake_fraction(&self) -> f64 {
        self.stake_fraction
    }

    #[must_use]
    pub fn token_count(&self) -> u64 {
        self.token_count
    }

    #[must_use]
    pub fn voting_power(&self) -> f64 {
        self.voting_power
    }

    /// Divide the stake by `total` and resync voting power to it.
    pub(crate) fn rescale(&mut self, total: f64) {
        self.stake_fraction /= total;
        self.voting_power = self.stake_fraction;
    }
}

/// Returns true if `fraction` is a valid stake in `[0, 1]`.
#[must_use]
pub fn is_valid_stake(fraction: f64) -> bool {
    (0.0..=1.0).contains(&fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_starts_with_voting_power_equal_to_stake() {
        let record = OwnershipRecord::new(600, 0.6);
        assert_eq!(record.token_count(), 600);
        assert_eq!(record.stake_fraction(), 0.6);
        assert_eq!(record.voting_power(), 0.6);
    }

    #[test]
    fn rescale_keeps_voting_power_in_sync() {
        let mut record = OwnershipRecord::new(500, 0.5);
        record.rescale(2.0);
        assert_eq!(record.stake_fraction(), 0.25);
        assert_eq!(record.voting_power(), 0.25);
    }

    #[test]
    fn stake_bounds_are_inclusive() {
        assert!(is_valid_stake(0.0));
        assert!(is_valid_stake(1.0));
        assert!(!is_valid_stake(1.5));
        assert!(!is_valid_stake(-0.1));
        assert!(!is_valid_stake(f64::NAN));
    }

    #[test]
    fn record_uses_camel_case_on_the_wire() {
        let value = serde_json::to_value(OwnershipRecord::new(10, 1.0)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"stakeFraction": 1.0, "tokenCount": 10, "votingPower": 1.0})
        );
    }
}
