//! List and diary entry types.
//!
//! These are the shapes persisted in the local store. Both tolerate the
//! legacy field names found in data written by earlier versions: entries are
//! deserialized through serde aliases so a merged read over old and new keys
//! yields one uniform type.

use crate::MediaKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An entry in a user-mutable list (watchlist or favorites).
///
/// Identity within a list is `(item_id, user_id)`; the store never holds
/// more than one entry per identity per list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    /// TMDB id of the movie or show. Legacy records store this as `id`.
    #[serde(alias = "id")]
    pub item_id: i64,
    pub user_id: String,
    #[serde(default, alias = "type", alias = "mediaType")]
    pub media_kind: MediaKind,
    pub title: String,
    #[serde(default, alias = "poster")]
    pub poster_url: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl ListEntry {
    /// Returns true if this entry belongs to the given user and item.
    #[must_use]
    pub fn matches(&self, item_id: i64, user_id: &str) -> bool {
        self.item_id == item_id && self.user_id == user_id
    }
}

/// Dedup identity of a diary entry.
///
/// Legacy diary records name their item id inconsistently (`tmdbId`, `id` or
/// `movieId`); the chain below resolves whichever is present. Records with
/// no id at all share the `Unknown` identity, so at most one of them
/// survives deduplication — the same outcome the pre-migration data had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiaryIdentity {
    Item(i64),
    Unknown,
}

/// A diary log entry: one watched movie or show.
///
/// Created by the logging flow (outside this core) and only read, merged and
/// grouped here. All id and timestamp fields are optional because the two
/// legacy storage keys disagree on which ones they carry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub movie_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, alias = "type", alias = "mediaType")]
    pub media_kind: MediaKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "poster", alias = "posterPath")]
    pub poster_url: Option<String>,
    /// Rating on a 0–10 scale; absent means "not rated".
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default, alias = "languageWatched")]
    pub language: Option<String>,
    #[serde(default)]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl DiaryEntry {
    /// Resolves the item id through the legacy fallback chain.
    #[must_use]
    pub fn item_id(&self) -> Option<i64> {
        self.tmdb_id.or(self.id).or(self.movie_id)
    }

    /// The identity key used for deduplication across merged sources.
    #[must_use]
    pub fn identity(&self) -> DiaryIdentity {
        match self.item_id() {
            Some(id) => DiaryIdentity::Item(id),
            None => DiaryIdentity::Unknown,
        }
    }

    /// Effective timestamp: watched time if present, else creation time.
    #[must_use]
    pub fn effective_at(&self) -> Option<DateTime<Utc>> {
        self.watched_at.or(self.created_at)
    }

    /// Returns true if this entry belongs to the given session identity.
    ///
    /// Older records carry only a `username`; both are checked, as the
    /// pre-migration reader did.
    #[must_use]
    pub fn belongs_to(&self, user_id: &str, username: &str) -> bool {
        self.user_id.as_deref() == Some(user_id)
            || (!username.is_empty() && self.username.as_deref() == Some(username))
    }
}
