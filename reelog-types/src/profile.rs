//! Read-only snapshot types assembled by the reconciliation engine.

use serde::{Deserialize, Serialize};

/// A user profile view, assembled from remote data or from the local users
/// directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
}

/// Dashboard stats derived from the reconciled diary plus profile counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    /// Number of diary entries after deduplication.
    pub watched_count: u64,
    /// Mean of the rated entries' ratings, 0.0 when nothing is rated.
    pub average_rating: f64,
    pub followers_count: u64,
    pub following_count: u64,
}
