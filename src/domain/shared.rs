//! Lock-guarded ledger handle for callers that share one instance.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Ledger;

/// Cloneable handle to a single ledger behind one reader-writer lock.
///
/// Clones share the same instance. Every mutation goes through
/// [`SharedLedger::write`], so mutations on one instance are serialized.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wrap an existing ledger.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Get read access to the ledger.
    pub fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read()
    }

    /// Get write access to the ledger.
    pub fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write()
    }

    /// Run `f` with exclusive access and return its result.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut Ledger) -> T) -> T {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn clones_share_one_instance() {
        let shared = SharedLedger::default();
        let other = shared.clone();

        other.write().set_ownership("A", 1, 1.0).unwrap();

        assert!(shared.read().ownership("A").is_ok());
    }

    #[test]
    fn concurrent_writers_are_serialized() {
        let shared = SharedLedger::new(Ledger::new());
        shared.write().set_ownership("A", 1, 1.0).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.with_mut(|ledger| {
                        ledger
                            .upsert_preference("A", "X", format!("T{i}"), 1.0)
                            .map(|records| records.len())
                    })
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert_eq!(shared.read().preferences(&"A".into()).unwrap().len(), 8);
    }
}
