//! Wire types for the media API.
//!
//! The remote schema differs from the local one in field names only
//! (`tmdbId`, `mediaType`, `posterPath`, ...). Conversions below are pure
//! renames; no semantics change on the way through.

use chrono::{DateTime, Utc};
use reelog_types::{DiaryEntry, ListEntry, MediaKind, ProfileSnapshot};
use serde::{Deserialize, Serialize};

/// One item of a remote watchlist/favorites response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteListItem {
    pub tmdb_id: i64,
    #[serde(default)]
    pub media_type: MediaKind,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
}

impl RemoteListItem {
    /// Maps onto the local entry shape, scoped to the active user.
    #[must_use]
    pub fn into_entry(self, user_id: &str) -> ListEntry {
        ListEntry {
            item_id: self.tmdb_id,
            user_id: user_id.to_string(),
            media_kind: self.media_type,
            title: self.title,
            poster_url: self.poster_path,
            added_at: self.added_at,
        }
    }
}

/// Request body for a list create.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListItem {
    pub tmdb_id: i64,
    pub media_type: MediaKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// One diary log from `GET /logs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteLog {
    #[serde(default)]
    pub tmdb_id: Option<i64>,
    #[serde(default)]
    pub media_type: MediaKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub review: Option<String>,
    #[serde(default)]
    pub language_watched: Option<String>,
    #[serde(default)]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl RemoteLog {
    /// Maps onto the local diary shape, scoped to the active user.
    #[must_use]
    pub fn into_entry(self, user_id: &str) -> DiaryEntry {
        DiaryEntry {
            tmdb_id: self.tmdb_id,
            id: None,
            movie_id: None,
            user_id: Some(user_id.to_string()),
            username: None,
            media_kind: self.media_type,
            title: self.title,
            poster_url: self.poster_path,
            rating: self.rating,
            review: self.review,
            language: self.language_watched,
            watched_at: self.watched_at,
            created_at: self.created_at,
        }
    }
}

/// Response of `GET /user/profile`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProfile {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
}

impl From<RemoteProfile> for ProfileSnapshot {
    fn from(profile: RemoteProfile) -> Self {
        Self {
            username: profile.username,
            email: profile.email,
            bio: profile.bio,
            followers_count: profile.followers_count,
            following_count: profile.following_count,
        }
    }
}
