//! Domain events emitted by the mutation coordinator.
//!
//! Events are delivered to observers the caller registers on the core; there
//! is no ambient event bus. The payload is deliberately small — interested
//! components re-read the collection they care about.

use crate::ListKind;
use serde::{Deserialize, Serialize};

/// Emitted after a list mutation's local write has completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListChanged {
    /// Which list changed.
    pub list: ListKind,
    /// The affected item.
    pub item_id: i64,
    /// The owning user.
    pub user_id: String,
}

impl ListChanged {
    /// Creates a new event.
    #[must_use]
    pub fn new(list: ListKind, item_id: i64, user_id: impl Into<String>) -> Self {
        Self {
            list,
            item_id,
            user_id: user_id.into(),
        }
    }

    /// Stable event name, one per list.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self.list {
            ListKind::Watchlist => "list-changed-for-watchlist",
            ListKind::Favorites => "list-changed-for-favorites",
        }
    }
}
