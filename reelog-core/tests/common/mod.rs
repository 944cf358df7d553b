//! Shared test fixtures: an in-memory dashboard over a scriptable fake
//! remote.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reelog_core::Dashboard;
use reelog_remote::{NewListItem, RemoteApi};
use reelog_store::LocalStore;
use reelog_types::{
    DiaryEntry, ListEntry, ListKind, MediaKind, ProfileSnapshot, SessionContext,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scriptable [`RemoteApi`] fake.
///
/// Each response slot is `None` for "remote down" or `Some(data)` for a
/// confirmed result (possibly empty). Mutations are recorded; `hold_adds`
/// stalls `add_list_item` until released so tests can observe that `toggle`
/// returns before the detached task settles.
#[derive(Default)]
pub struct FakeRemote {
    pub lists: Mutex<Option<Vec<ListEntry>>>,
    pub logs: Mutex<Option<Vec<DiaryEntry>>>,
    pub profile: Mutex<Option<ProfileSnapshot>>,
    pub list_fetches: AtomicUsize,
    pub adds: Mutex<Vec<(ListKind, NewListItem)>>,
    pub removes: Mutex<Vec<(ListKind, i64, MediaKind)>>,
    pub hold_adds: AtomicBool,
    pub release: Notify,
    pub settled: Notify,
}

impl FakeRemote {
    pub fn down() -> Self {
        Self::default()
    }

    pub fn with_lists(entries: Vec<ListEntry>) -> Self {
        let fake = Self::default();
        *fake.lists.lock().unwrap() = Some(entries);
        fake
    }

    pub fn with_logs(entries: Vec<DiaryEntry>) -> Self {
        let fake = Self::default();
        *fake.logs.lock().unwrap() = Some(entries);
        fake
    }
}

#[async_trait]
impl RemoteApi for FakeRemote {
    async fn list(&self, _kind: ListKind, session: &SessionContext) -> Option<Vec<ListEntry>> {
        session.token()?;
        self.list_fetches.fetch_add(1, Ordering::SeqCst);
        self.lists.lock().unwrap().clone()
    }

    async fn logs(&self, session: &SessionContext) -> Option<Vec<DiaryEntry>> {
        session.token()?;
        self.logs.lock().unwrap().clone()
    }

    async fn profile(&self, session: &SessionContext) -> Option<ProfileSnapshot> {
        session.token()?;
        self.profile.lock().unwrap().clone()
    }

    async fn add_list_item(
        &self,
        kind: ListKind,
        item: NewListItem,
        _session: &SessionContext,
    ) -> bool {
        if self.hold_adds.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        self.adds.lock().unwrap().push((kind, item));
        self.settled.notify_one();
        true
    }

    async fn remove_list_item(
        &self,
        kind: ListKind,
        item_id: i64,
        media_kind: MediaKind,
        _session: &SessionContext,
    ) -> bool {
        self.removes.lock().unwrap().push((kind, item_id, media_kind));
        self.settled.notify_one();
        true
    }

    async fn is_reachable(&self) -> bool {
        self.lists.lock().unwrap().is_some() || self.logs.lock().unwrap().is_some()
    }
}

pub fn dashboard(remote: FakeRemote) -> (Dashboard, Arc<FakeRemote>) {
    let remote = Arc::new(remote);
    let store = LocalStore::open_in_memory().unwrap();
    (Dashboard::new(store, remote.clone()), remote)
}

pub fn session() -> SessionContext {
    SessionContext {
        user_id: "u1".to_string(),
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        token: Some("token".to_string()),
    }
}

pub fn local_session() -> SessionContext {
    SessionContext {
        token: None,
        ..session()
    }
}

pub fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
}

pub fn diary(id: Option<i64>, watched_at: Option<DateTime<Utc>>) -> DiaryEntry {
    DiaryEntry {
        tmdb_id: id,
        user_id: Some("u1".to_string()),
        title: id.map(|id| format!("movie-{id}")),
        watched_at,
        ..Default::default()
    }
}

pub fn list_entry(item_id: i64, user_id: &str) -> ListEntry {
    ListEntry {
        item_id,
        user_id: user_id.to_string(),
        media_kind: MediaKind::Movie,
        title: format!("movie-{item_id}"),
        poster_url: None,
        added_at: at(2026, 1, 1, 12),
    }
}
