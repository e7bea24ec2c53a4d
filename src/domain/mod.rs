//! Ledger domain: identifiers, records, aggregates, and the engine itself.

mod id;
mod ledger;
mod ownership;
mod pair;
mod preference;
mod shared;

pub use id::{Address, PairKey, TokenId};
pub use ledger::{Ledger, LedgerState, DEFAULT_TOP_LIMIT, NORMALIZATION_TOLERANCE};
pub use ownership::{is_valid_stake, OwnershipRecord};
pub use pair::{IncentivizedPair, PairDetails};
pub use preference::{total_weight, PreferenceRecord};
pub use shared::SharedLedger;
