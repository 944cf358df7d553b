//! Mutation coordinator — optimistic list toggles.
//!
//! The local write is synchronous and completes before `toggle` returns; the
//! remote mirror runs in a detached task whose outcome is never awaited,
//! never retried and never rolled back. A single failed remote attempt is
//! permanently dropped — local/remote consistency is best-effort only.

use crate::{CoreError, CoreResult, Dashboard};
use chrono::Utc;
use reelog_remote::NewListItem;
use reelog_types::{ListChanged, ListEntry, ListKind, MediaKind, SessionContext};
use tracing::debug;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// The item a toggle acts on, as known to the caller (detail page, search
/// result). The core fills in ownership and the added-at timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleItem {
    pub item_id: i64,
    pub media_kind: MediaKind,
    pub title: String,
    pub poster_url: Option<String>,
}

impl Dashboard {
    /// Toggles an item's membership in a list.
    ///
    /// Requires an active user identity; without one, nothing is written and
    /// [`CoreError::NoCredential`] is returned. On success the local store
    /// already holds the new state, a [`ListChanged`] event has been
    /// delivered to every observer, and the remote mirror has been fired and
    /// forgotten.
    pub async fn toggle(
        &self,
        kind: ListKind,
        item: ToggleItem,
        session: &SessionContext,
    ) -> CoreResult<ToggleOutcome> {
        if !session.has_user() {
            return Err(CoreError::NoCredential);
        }

        let key = kind.store_key();
        let item_id = item.item_id;
        let mut entries: Vec<ListEntry> = self.store().get_collection(key)?;

        let outcome = match entries
            .iter()
            .position(|entry| entry.matches(item_id, &session.user_id))
        {
            Some(idx) => {
                let removed = entries.remove(idx);
                self.store().put_collection(key, &entries)?;
                self.spawn_remote_remove(kind, removed.item_id, removed.media_kind, session);
                ToggleOutcome::Removed
            }
            None => {
                entries.push(ListEntry {
                    item_id,
                    user_id: session.user_id.clone(),
                    media_kind: item.media_kind,
                    title: item.title.clone(),
                    poster_url: item.poster_url.clone(),
                    added_at: Utc::now(),
                });
                self.store().put_collection(key, &entries)?;
                self.spawn_remote_add(kind, item, session);
                ToggleOutcome::Added
            }
        };

        // Local write is durable at this point; observers may re-read.
        self.emit(&ListChanged::new(kind, item_id, &session.user_id));
        Ok(outcome)
    }

    /// Returns whether an item is in a list, from local state only.
    pub fn is_in_list(
        &self,
        kind: ListKind,
        item_id: i64,
        session: &SessionContext,
    ) -> CoreResult<bool> {
        if !session.has_user() {
            return Ok(false);
        }
        let entries: Vec<ListEntry> = self.store().get_collection(kind.store_key())?;
        Ok(entries
            .iter()
            .any(|entry| entry.matches(item_id, &session.user_id)))
    }

    // ── Detached remote mirrors ─────────────────────────────────

    fn spawn_remote_add(&self, kind: ListKind, item: ToggleItem, session: &SessionContext) {
        let remote = self.remote().clone();
        let session = session.clone();
        let item_id = item.item_id;
        tokio::spawn(async move {
            let payload = NewListItem {
                tmdb_id: item.item_id,
                media_type: item.media_kind,
                title: item.title,
                poster_path: item.poster_url,
            };
            if !remote.add_list_item(kind, payload, &session).await {
                debug!(list = %kind, item_id, "remote add dropped");
            }
        });
    }

    fn spawn_remote_remove(
        &self,
        kind: ListKind,
        item_id: i64,
        media_kind: MediaKind,
        session: &SessionContext,
    ) {
        let remote = self.remote().clone();
        let session = session.clone();
        tokio::spawn(async move {
            if !remote.remove_list_item(kind, item_id, media_kind, &session).await {
                debug!(list = %kind, item_id, "remote remove dropped");
            }
        });
    }
}
