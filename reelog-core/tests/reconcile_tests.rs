mod common;

use common::{at, dashboard, diary, list_entry, local_session, session, FakeRemote};
use pretty_assertions::assert_eq;
use reelog_core::reconcile::{compute_stats, dedup_diary, dedup_list, derive_follow_counts};
use reelog_store::{keys, StoredUser};
use reelog_types::{DiaryEntry, ListKind, ProfileSnapshot};
use std::sync::atomic::Ordering;

// ── Dedup ───────────────────────────────────────────────────────

#[test]
fn dedup_diary_keeps_first_occurrence() {
    let mut first_five = diary(Some(5), Some(at(2026, 1, 1, 10)));
    first_five.review = Some("first".to_string());
    let mut second_five = diary(Some(5), Some(at(2026, 1, 2, 10)));
    second_five.review = Some("second".to_string());
    let seven = diary(Some(7), Some(at(2026, 1, 3, 10)));

    let deduped = dedup_diary(vec![first_five, second_five, seven]);
    assert_eq!(deduped.len(), 2);
    assert_eq!(deduped[0].item_id(), Some(5));
    assert_eq!(deduped[0].review.as_deref(), Some("first"));
    assert_eq!(deduped[1].item_id(), Some(7));
}

#[test]
fn dedup_diary_collapses_records_with_no_id() {
    let a = diary(None, Some(at(2026, 1, 1, 10)));
    let b = diary(None, Some(at(2026, 1, 2, 10)));
    let deduped = dedup_diary(vec![a.clone(), b]);
    assert_eq!(deduped, vec![a]);
}

#[test]
fn dedup_diary_resolves_legacy_id_fields() {
    // Same item named by different legacy fields collapses to one record.
    let via_tmdb = diary(Some(5), None);
    let mut via_movie_id = DiaryEntry::default();
    via_movie_id.movie_id = Some(5);
    let deduped = dedup_diary(vec![via_tmdb.clone(), via_movie_id]);
    assert_eq!(deduped, vec![via_tmdb]);
}

#[test]
fn dedup_list_is_per_user() {
    let entries = vec![
        list_entry(1, "u1"),
        list_entry(1, "u2"),
        list_entry(1, "u1"),
    ];
    let deduped = dedup_list(entries);
    assert_eq!(deduped.len(), 2);
}

// ── Sort order ──────────────────────────────────────────────────

#[tokio::test]
async fn diary_sorts_descending_by_effective_timestamp() {
    let t1 = at(2026, 1, 1, 10);
    let t2 = at(2026, 1, 2, 10);
    let t3 = at(2026, 1, 3, 10);
    let (dash, _) = dashboard(FakeRemote::with_logs(vec![
        diary(Some(2), Some(t2)),
        diary(Some(1), Some(t1)),
        diary(Some(3), Some(t3)),
    ]));

    let loaded = dash.load_diary(&session()).await.unwrap();
    let times: Vec<_> = loaded.iter().filter_map(|e| e.effective_at()).collect();
    assert_eq!(times, vec![t3, t2, t1]);
}

#[tokio::test]
async fn undated_entries_sort_last() {
    let (dash, _) = dashboard(FakeRemote::with_logs(vec![
        diary(Some(1), None),
        diary(Some(2), Some(at(2026, 1, 2, 10))),
    ]));

    let loaded = dash.load_diary(&session()).await.unwrap();
    assert_eq!(loaded[0].item_id(), Some(2));
    assert_eq!(loaded[1].item_id(), Some(1));
}

#[tokio::test]
async fn sort_uses_created_at_when_watched_at_missing() {
    let mut created_late = diary(Some(1), None);
    created_late.created_at = Some(at(2026, 2, 1, 10));
    let watched_early = diary(Some(2), Some(at(2026, 1, 1, 10)));

    let (dash, _) = dashboard(FakeRemote::with_logs(vec![
        watched_early,
        created_late,
    ]));
    let loaded = dash.load_diary(&session()).await.unwrap();
    assert_eq!(loaded[0].item_id(), Some(1));
    assert_eq!(loaded[1].item_id(), Some(2));
}

// ── Remote-empty vs remote-down ─────────────────────────────────

#[tokio::test]
async fn remote_empty_suppresses_local_fallback() {
    let (dash, _) = dashboard(FakeRemote::with_lists(vec![]));
    // Local data exists, but the remote's confirmed zero-item result wins.
    dash.store()
        .put_collection(keys::WATCHLIST, &[list_entry(1, "u1")])
        .unwrap();

    let loaded = dash.load_list(ListKind::Watchlist, &session()).await.unwrap();
    assert!(loaded.is_empty());
}

#[tokio::test]
async fn remote_down_falls_back_to_local() {
    let (dash, _) = dashboard(FakeRemote::down());
    dash.store()
        .put_collection(keys::WATCHLIST, &[list_entry(1, "u1")])
        .unwrap();

    let loaded = dash.load_list(ListKind::Watchlist, &session()).await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].item_id, 1);
}

#[tokio::test]
async fn missing_token_skips_remote_entirely() {
    let (dash, remote) = dashboard(FakeRemote::with_lists(vec![list_entry(9, "u1")]));
    dash.store()
        .put_collection(keys::FAVORITES, &[list_entry(1, "u1")])
        .unwrap();

    let loaded = dash
        .load_list(ListKind::Favorites, &local_session())
        .await
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].item_id, 1);
    assert_eq!(remote.list_fetches.load(Ordering::SeqCst), 0);
}

// ── Local fallback semantics ────────────────────────────────────

#[tokio::test]
async fn local_list_is_scoped_to_active_user() {
    let (dash, _) = dashboard(FakeRemote::down());
    dash.store()
        .put_collection(
            keys::WATCHLIST,
            &[list_entry(1, "u1"), list_entry(2, "u2"), list_entry(3, "u1")],
        )
        .unwrap();

    let loaded = dash.load_list(ListKind::Watchlist, &session()).await.unwrap();
    let ids: Vec<_> = loaded.iter().map(|e| e.item_id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn diary_fallback_merges_legacy_key() {
    let (dash, _) = dashboard(FakeRemote::down());
    dash.store()
        .put_collection(keys::DIARY, &[diary(Some(1), Some(at(2026, 1, 5, 10)))])
        .unwrap();
    dash.store()
        .put_collection(
            keys::MOVIE_LOGS,
            &[
                diary(Some(2), Some(at(2026, 1, 6, 10))),
                // duplicate of the current-key record: dropped
                diary(Some(1), Some(at(2026, 1, 7, 10))),
            ],
        )
        .unwrap();

    let loaded = dash.load_diary(&session()).await.unwrap();
    let ids: Vec<_> = loaded.iter().map(|e| e.item_id()).collect();
    assert_eq!(ids, vec![Some(2), Some(1)]);
}

#[tokio::test]
async fn diary_fallback_matches_legacy_username_records() {
    let (dash, _) = dashboard(FakeRemote::down());
    let mut legacy = diary(Some(4), Some(at(2025, 12, 1, 20)));
    legacy.user_id = None;
    legacy.username = Some("alice".to_string());
    let mut foreign = diary(Some(5), Some(at(2025, 12, 2, 20)));
    foreign.user_id = Some("someone-else".to_string());

    dash.store()
        .put_collection(keys::MOVIE_LOGS, &[legacy, foreign])
        .unwrap();

    let loaded = dash.load_diary(&session()).await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].item_id(), Some(4));
}

// ── Profile ─────────────────────────────────────────────────────

#[tokio::test]
async fn profile_prefers_remote() {
    let fake = FakeRemote::down();
    *fake.profile.lock().unwrap() = Some(ProfileSnapshot {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        bio: Some("from remote".to_string()),
        followers_count: 10,
        following_count: 20,
    });
    let (dash, _) = dashboard(fake);

    let profile = dash.load_profile(&session()).await.unwrap();
    assert_eq!(profile.bio.as_deref(), Some("from remote"));
    assert_eq!(profile.followers_count, 10);
}

#[tokio::test]
async fn profile_fallback_derives_counts_from_users_directory() {
    let (dash, _) = dashboard(FakeRemote::down());
    dash.store()
        .put_collection(
            keys::USERS,
            &[
                StoredUser {
                    id: "u1".to_string(),
                    username: "alice".to_string(),
                    bio: Some("local bio".to_string()),
                    following: vec!["u2".to_string(), "u3".to_string()],
                    ..Default::default()
                },
                StoredUser {
                    id: "u2".to_string(),
                    username: "bob".to_string(),
                    following: vec!["u1".to_string()],
                    ..Default::default()
                },
                StoredUser {
                    id: "u3".to_string(),
                    username: "carol".to_string(),
                    ..Default::default()
                },
            ],
        )
        .unwrap();

    let profile = dash.load_profile(&session()).await.unwrap();
    assert_eq!(profile.username, "alice");
    assert_eq!(profile.bio.as_deref(), Some("local bio"));
    assert_eq!(profile.followers_count, 1);
    assert_eq!(profile.following_count, 2);
}

// ── Stats ───────────────────────────────────────────────────────

#[test]
fn derive_follow_counts_handles_unknown_user() {
    let (followers, following) = derive_follow_counts(&[], "nobody");
    assert_eq!((followers, following), (0, 0));
}

#[test]
fn compute_stats_averages_over_all_entries() {
    let mut rated = diary(Some(1), None);
    rated.rating = Some(8);
    let unrated = diary(Some(2), None);

    // Unrated entries count as zero, as the dashboard always displayed it.
    let stats = compute_stats(&[rated, unrated], 3, 4);
    assert_eq!(stats.watched_count, 2);
    assert_eq!(stats.average_rating, 4.0);
    assert_eq!(stats.followers_count, 3);
    assert_eq!(stats.following_count, 4);
}

#[test]
fn compute_stats_empty_diary() {
    let stats = compute_stats(&[], 0, 0);
    assert_eq!(stats.watched_count, 0);
    assert_eq!(stats.average_rating, 0.0);
}

#[tokio::test]
async fn load_stats_uses_reconciled_diary_and_remote_counts() {
    let fake = FakeRemote::with_logs(vec![
        {
            let mut e = diary(Some(1), Some(at(2026, 1, 1, 10)));
            e.rating = Some(10);
            e
        },
        {
            let mut e = diary(Some(2), Some(at(2026, 1, 2, 10)));
            e.rating = Some(6);
            e
        },
        // duplicate, dropped before counting
        diary(Some(1), Some(at(2026, 1, 3, 10))),
    ]);
    *fake.profile.lock().unwrap() = Some(ProfileSnapshot {
        username: "alice".to_string(),
        followers_count: 7,
        following_count: 9,
        ..Default::default()
    });
    let (dash, _) = dashboard(fake);

    let stats = dash.load_stats(&session()).await.unwrap();
    assert_eq!(stats.watched_count, 2);
    assert_eq!(stats.average_rating, 8.0);
    assert_eq!(stats.followers_count, 7);
    assert_eq!(stats.following_count, 9);
}

// ── Store damage degrades, never errors ─────────────────────────

#[tokio::test]
async fn malformed_local_collection_degrades_to_empty() {
    let (dash, _) = dashboard(FakeRemote::down());
    dash.store().put_raw(keys::WATCHLIST, "][").unwrap();

    let loaded = dash.load_list(ListKind::Watchlist, &session()).await.unwrap();
    assert!(loaded.is_empty());
}
