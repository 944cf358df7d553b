//! Remote API seam.
//!
//! The core talks to the remote through this trait so tests can substitute
//! a fake that records calls or stalls on purpose.

use crate::wire::NewListItem;
use async_trait::async_trait;
use reelog_types::{DiaryEntry, ListEntry, ListKind, MediaKind, ProfileSnapshot, SessionContext};

/// The media API surface the core consumes.
///
/// All reads return `None` for "no remote" (see the crate docs); mutations
/// return bare success and are meant to be fired and forgotten.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Fetches the canonical watchlist or favorites, mapped to local entries.
    async fn list(&self, kind: ListKind, session: &SessionContext) -> Option<Vec<ListEntry>>;

    /// Fetches the user's diary logs, mapped to local entries.
    async fn logs(&self, session: &SessionContext) -> Option<Vec<DiaryEntry>>;

    /// Fetches the user's profile.
    async fn profile(&self, session: &SessionContext) -> Option<ProfileSnapshot>;

    /// Creates a list item on the remote.
    async fn add_list_item(
        &self,
        kind: ListKind,
        item: NewListItem,
        session: &SessionContext,
    ) -> bool;

    /// Deletes a list item on the remote.
    async fn remove_list_item(
        &self,
        kind: ListKind,
        item_id: i64,
        media_kind: MediaKind,
        session: &SessionContext,
    ) -> bool;

    /// Advisory reachability probe (`GET /health`). Reconciliation does not
    /// gate on this; a confirmed 2xx on the fetch itself is the only signal
    /// that suppresses local fallback.
    async fn is_reachable(&self) -> bool;
}
