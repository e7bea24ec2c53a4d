//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] — Builders for ledgers and records: the two-holder
//!   reference scenario, holders with weights, approximate comparison.
//! - [`state`] — JSON state documents for bulk-load and CLI tests.

pub mod domain;
pub mod state;
