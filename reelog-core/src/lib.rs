//! Dashboard core for reelog — local-first data assembly.
//!
//! The core prefers authoritative remote data when reachable and falls back
//! to the local store otherwise, without ever blocking the user on the
//! network.
//!
//! # Components
//!
//! - **Reconciliation**: per-collection remote-or-local assembly with
//!   legacy-key merging, identity-chain deduplication and descending
//!   effective-timestamp ordering
//! - **Grouping**: diary entries bucketed by month, then by day, for
//!   presentation
//! - **Mutation**: optimistic add/remove toggles — synchronous local write,
//!   detached best-effort remote mirror, domain event to registered
//!   observers
//!
//! The [`Dashboard`] owns the store handle, the remote seam and the observer
//! registry; all pure logic lives in the `reconcile` and `grouping` modules
//! so it can be exercised without I/O.

mod error;
pub mod grouping;
pub mod reconcile;
mod mutate;

pub use error::{CoreError, CoreResult};
pub use grouping::{group_by_month, DayGroup, MonthGroup};
pub use mutate::{ToggleItem, ToggleOutcome};

use reelog_remote::RemoteApi;
use reelog_store::LocalStore;
use reelog_types::ListChanged;
use std::sync::{Arc, Mutex};

type Listener = Box<dyn Fn(&ListChanged) + Send + Sync>;

/// The dashboard core service.
pub struct Dashboard {
    store: LocalStore,
    remote: Arc<dyn RemoteApi>,
    listeners: Mutex<Vec<Listener>>,
}

impl Dashboard {
    /// Creates a new dashboard over a store and a remote seam.
    pub fn new(store: LocalStore, remote: Arc<dyn RemoteApi>) -> Self {
        Self {
            store,
            remote,
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Registers an observer for [`ListChanged`] events.
    ///
    /// Observers are invoked synchronously on the mutating task, after the
    /// local write has completed and before `toggle` returns.
    pub fn on_list_change(&self, listener: impl Fn(&ListChanged) + Send + Sync + 'static) {
        let mut listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        listeners.push(Box::new(listener));
    }

    /// Returns the underlying local store.
    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub(crate) fn remote(&self) -> &Arc<dyn RemoteApi> {
        &self.remote
    }

    pub(crate) fn emit(&self, event: &ListChanged) {
        let listeners = match self.listeners.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for listener in listeners.iter() {
            listener(event);
        }
    }
}
