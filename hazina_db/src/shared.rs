use std::sync::Arc;

use parking_lot::Mutex;

use crate::admin::Admin;
use crate::core::Ledger;

/// Cloneable handle to one ledger shared between threads.
///
/// Every call holds a single exclusive lock for the whole closure, so no two
/// operations ever interleave.
#[derive(Clone, Debug, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut Ledger) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    pub fn with_admin<R>(&self, f: impl FnOnce(&mut Admin<'_>) -> R) -> R {
        let mut guard = self.inner.lock();
        let mut admin = Admin::new(&mut *guard);
        f(&mut admin)
    }
}
