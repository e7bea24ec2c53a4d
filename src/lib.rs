//! Pairvote - ownership-weighted incentive aggregation for token pairs.
//!
//! Holders carry a stake in a tracked supply and state weighted preferences
//! over token pairs. The ledger turns stakes into voting power and combines
//! voting power with preference weights into an incentive score per pair.
//!
//! # Modules
//!
//! - [`domain`] - Identifiers, records, aggregates, and the [`domain::Ledger`]
//! - [`error`] - Error types for the crate
//! - [`config`] - TOML configuration for the command-line tool
//! - [`cli`] - Command definitions and handlers for the `pairvote` binary
//!
//! # Example
//!
//! ```
//! use pairvote::domain::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.set_ownership("alice", 300, 0.75).unwrap();
//! ledger.set_ownership("bob", 100, 0.75).unwrap();
//! ledger.renormalize_voting_power();
//!
//! ledger.upsert_preference("alice", "ETH", "USDC", 1.0).unwrap();
//! ledger.upsert_preference("bob", "USDC", "ETH", 1.0).unwrap();
//!
//! let details = ledger.pair_details("ETH", "USDC").unwrap();
//! assert!((details.pair().total_incentive() - 1.0).abs() < 1e-9);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
