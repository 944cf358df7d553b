//! The local users directory.
//!
//! Kept only so follower/following counts can be derived when the remote
//! profile is unreachable. Account management itself is out of scope.

use serde::{Deserialize, Deserializer, Serialize};

/// One record in the local users directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// User ids this user follows. Legacy records store this as a single
    /// comma-separated string; both encodings are accepted.
    #[serde(default, deserialize_with = "following_compat")]
    pub following: Vec<String>,
}

impl StoredUser {
    /// Returns true if this user follows the given user id.
    #[must_use]
    pub fn follows(&self, user_id: &str) -> bool {
        self.following.iter().any(|id| id == user_id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FollowingField {
    List(Vec<String>),
    Csv(String),
}

fn following_compat<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<FollowingField>::deserialize(deserializer)?;
    Ok(match field {
        Some(FollowingField::List(ids)) => ids,
        Some(FollowingField::Csv(csv)) => csv
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}
