//! Preference records: an address's weight for directing incentive to a pair.

use serde::{Deserialize, Serialize};

use super::{PairKey, TokenId};

/// A weighted preference for one token pair.
///
/// Tokens are kept in the order the caller supplied them. Two records
/// name the same pair when their token sets are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    token_a: TokenId,
    token_b: TokenId,
    weight: f64,
}

impl PreferenceRecord {
    /// Create a new preference record.
    pub fn new(token_a: impl Into<TokenId>, token_b: impl Into<TokenId>, weight: f64) -> Self {
        Self {
            token_a: token_a.into(),
            token_b: token_b.into(),
            weight,
        }
    }

    /// First token as supplied.
    #[must_use]
    pub fn token_a(&self) -> &TokenId {
        &self.token_a
    }

    /// Second token as supplied.
    #[must_use]
    pub fn token_b(&self) -> &TokenId {
        &self.token_b
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Canonical key for this record's pair.
    #[must_use]
    pub fn pair_key(&self) -> PairKey {
        PairKey::new(self.token_a.clone(), self.token_b.clone())
    }

    /// Returns true if this record names `{a, b}` in either order.
    #[must_use]
    pub fn is_pair(&self, a: &TokenId, b: &TokenId) -> bool {
        (&self.token_a == a && &self.token_b == b) || (&self.token_a == b && &self.token_b == a)
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

/// Sum of weights across a preference list.
#[must_use]
pub fn total_weight(records: &[PreferenceRecord]) -> f64 {
    records.iter().map(PreferenceRecord::weight).sum()
}
