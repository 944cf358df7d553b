//! Reconciliation engine — local-first assembly of each collection.
//!
//! Per collection: prefer the remote result when one arrives (a 2xx carrying
//! an empty array IS a result — zero items, no fallback), else read the
//! local store scoped to the active user, merging legacy keys where the
//! schema migrated. Then deduplicate by identity, first occurrence wins, and
//! sort diary-like collections newest first.

use crate::{CoreResult, Dashboard};
use reelog_store::{keys, StoredUser};
use reelog_types::{
    DiaryEntry, ListEntry, ListKind, ProfileSnapshot, SessionContext, StatsSnapshot,
};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::debug;

// ── Pure reconciliation steps ───────────────────────────────────

/// Keeps the first entry per `(item_id, user_id)` identity.
#[must_use]
pub fn dedup_list(entries: Vec<ListEntry>) -> Vec<ListEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert((entry.item_id, entry.user_id.clone())))
        .collect()
}

/// Keeps the first entry per diary identity (legacy id fallback chain;
/// records with no id at all share one identity).
#[must_use]
pub fn dedup_diary(entries: Vec<DiaryEntry>) -> Vec<DiaryEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.identity()))
        .collect()
}

/// Sorts newest first by effective timestamp; undated entries sort last.
///
/// Stable, so entries sharing a timestamp keep their encounter order.
pub fn sort_diary_desc(entries: &mut [DiaryEntry]) {
    entries.sort_by_key(|entry| Reverse(entry.effective_at()));
}

/// Derives follower/following counts from the local users directory.
#[must_use]
pub fn derive_follow_counts(users: &[StoredUser], user_id: &str) -> (u64, u64) {
    let followers = users.iter().filter(|u| u.follows(user_id)).count() as u64;
    let following = users
        .iter()
        .find(|u| u.id == user_id)
        .map(|u| u.following.len() as u64)
        .unwrap_or(0);
    (followers, following)
}

/// Computes the stats snapshot from a reconciled diary plus follow counts.
#[must_use]
pub fn compute_stats(diary: &[DiaryEntry], followers: u64, following: u64) -> StatsSnapshot {
    let watched_count = diary.len() as u64;
    let average_rating = if diary.is_empty() {
        0.0
    } else {
        let sum: u64 = diary
            .iter()
            .map(|entry| u64::from(entry.rating.unwrap_or(0)))
            .sum();
        sum as f64 / watched_count as f64
    };
    StatsSnapshot {
        watched_count,
        average_rating,
        followers_count: followers,
        following_count: following,
    }
}

// ── Collection loaders ──────────────────────────────────────────

impl Dashboard {
    /// Loads a user-mutable list, remote first, local fallback.
    pub async fn load_list(
        &self,
        kind: ListKind,
        session: &SessionContext,
    ) -> CoreResult<Vec<ListEntry>> {
        let entries = match self.remote().list(kind, session).await {
            Some(remote) => remote,
            None => {
                debug!(list = %kind, "remote miss, reading local store");
                self.store()
                    .get_collection::<ListEntry>(kind.store_key())?
                    .into_iter()
                    .filter(|entry| entry.user_id == session.user_id)
                    .collect()
            }
        };
        Ok(dedup_list(entries))
    }

    /// Loads the diary, remote first; the local fallback concatenates the
    /// current and legacy storage keys before filtering to the active user.
    pub async fn load_diary(&self, session: &SessionContext) -> CoreResult<Vec<DiaryEntry>> {
        let entries = match self.remote().logs(session).await {
            Some(remote) => remote,
            None => {
                debug!("remote miss, merging local diary keys");
                let mut local: Vec<DiaryEntry> = self.store().get_collection(keys::DIARY)?;
                local.extend(self.store().get_collection::<DiaryEntry>(keys::MOVIE_LOGS)?);
                local.retain(|entry| entry.belongs_to(&session.user_id, &session.username));
                local
            }
        };
        let mut entries = dedup_diary(entries);
        sort_diary_desc(&mut entries);
        Ok(entries)
    }

    /// Assembles the profile view, remote first; the local fallback takes
    /// identity fields from the session and derives counts from the users
    /// directory.
    pub async fn load_profile(&self, session: &SessionContext) -> CoreResult<ProfileSnapshot> {
        if let Some(profile) = self.remote().profile(session).await {
            return Ok(profile);
        }
        debug!("remote miss, assembling profile from local data");

        let users: Vec<StoredUser> = self.store().get_collection(keys::USERS)?;
        let bio = users
            .iter()
            .find(|u| u.id == session.user_id)
            .and_then(|u| u.bio.clone());
        let (followers_count, following_count) = derive_follow_counts(&users, &session.user_id);

        Ok(ProfileSnapshot {
            username: session.username.clone(),
            email: session.email.clone(),
            bio,
            followers_count,
            following_count,
        })
    }

    /// Computes dashboard stats from the reconciled diary and profile.
    pub async fn load_stats(&self, session: &SessionContext) -> CoreResult<StatsSnapshot> {
        let diary = self.load_diary(session).await?;

        let (followers, following) = match self.remote().profile(session).await {
            Some(profile) => (profile.followers_count, profile.following_count),
            None => {
                let users: Vec<StoredUser> = self.store().get_collection(keys::USERS)?;
                derive_follow_counts(&users, &session.user_id)
            }
        };

        Ok(compute_stats(&diary, followers, following))
    }
}
