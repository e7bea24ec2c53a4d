//! Builders for ledgers and domain records used across tests.
//!
//! Keeps scenario setup in one place so tests focus on assertions rather
//! than construction boilerplate.

use crate::domain::Ledger;

/// Tolerance used by [`approx_eq`].
pub const EPSILON: f64 = 1e-9;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Generate `n` token IDs named `t0`, `t1`, ..., `t{n-1}`.
pub fn make_tokens(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("t{i}")).collect()
}

/// Ledger with holders `A` (0.6) and `B` (0.4) both preferring pair X-Y.
///
/// `A` weighs the pair 0.7 and `B` weighs it 0.5, giving a total incentive
/// of 0.62 with contributions 0.42 and 0.2.
pub fn reference_ledger() -> Ledger {
    LedgerBuilder::new()
        .holder("A", 600, 0.6)
        .holder("B", 400, 0.4)
        .preference("A", "X", "Y", 0.7)
        .preference("B", "X", "Y", 0.5)
        .build()
}

/// Fluent builder that panics on invalid setup.
///
/// Intended for tests only: a setup mistake should fail loudly.
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    ledger: Ledger,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a holder with the given token count and stake fraction.
    pub fn holder(mut self, address: &str, token_count: u64, stake_fraction: f64) -> Self {
        self.ledger
            .set_ownership(address, token_count, stake_fraction)
            .expect("valid stake fraction");
        self
    }

    /// Add or overwrite a preference for an existing holder.
    pub fn preference(mut self, address: &str, token_a: &str, token_b: &str, weight: f64) -> Self {
        self.ledger
            .upsert_preference(address, token_a, token_b, weight)
            .expect("holder registered before preference");
        self
    }

    pub fn build(self) -> Ledger {
        self.ledger
    }
}
