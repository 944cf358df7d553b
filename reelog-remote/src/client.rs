//! reqwest-backed implementation of [`RemoteApi`].

use crate::api::RemoteApi;
use crate::wire::{NewListItem, RemoteListItem, RemoteLog, RemoteProfile};
use async_trait::async_trait;
use reelog_types::{DiaryEntry, ListEntry, ListKind, MediaKind, ProfileSnapshot, SessionContext};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the remote client.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the media API (e.g. `http://localhost:8080/api`).
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 10,
        }
    }
}

/// HTTP client for the media API.
///
/// Attaches the session's bearer credential to every request; without one it
/// returns "no remote" immediately, before any request is issued.
pub struct RemoteClient {
    config: RemoteConfig,
    client: Client,
}

impl RemoteClient {
    /// Creates a new client with its own connection pool.
    pub fn new(config: RemoteConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// Issues one authenticated request and parses the JSON body.
    ///
    /// Any failure — no token, network error, non-2xx, unparseable body —
    /// collapses to `None`. Never retries.
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        session: &SessionContext,
    ) -> Option<T> {
        let response = self.send(method, path, body, session).await?;
        match response.json::<T>().await {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path, error = %e, "unparseable remote response, using local store");
                None
            }
        }
    }

    /// Issues one authenticated request, returning the response on 2xx.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
        session: &SessionContext,
    ) -> Option<reqwest::Response> {
        let Some(token) = session.token() else {
            debug!(path, "no credential, skipping remote");
            return None;
        };

        let mut request = self
            .client
            .request(method, self.url(path))
            .bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => Some(response),
            Ok(response) => {
                warn!(path, status = %response.status(), "remote error, using local store");
                None
            }
            Err(e) => {
                warn!(path, error = %e, "remote unreachable, using local store");
                None
            }
        }
    }
}

#[async_trait]
impl RemoteApi for RemoteClient {
    async fn list(&self, kind: ListKind, session: &SessionContext) -> Option<Vec<ListEntry>> {
        let path = format!("/media/{}", kind.resource());
        let items: Vec<RemoteListItem> = self.call(Method::GET, &path, None, session).await?;
        Some(
            items
                .into_iter()
                .map(|item| item.into_entry(&session.user_id))
                .collect(),
        )
    }

    async fn logs(&self, session: &SessionContext) -> Option<Vec<DiaryEntry>> {
        let logs: Vec<RemoteLog> = self.call(Method::GET, "/logs", None, session).await?;
        Some(
            logs.into_iter()
                .map(|log| log.into_entry(&session.user_id))
                .collect(),
        )
    }

    async fn profile(&self, session: &SessionContext) -> Option<ProfileSnapshot> {
        let profile: RemoteProfile = self
            .call(Method::GET, "/user/profile", None, session)
            .await?;
        Some(profile.into())
    }

    async fn add_list_item(
        &self,
        kind: ListKind,
        item: NewListItem,
        session: &SessionContext,
    ) -> bool {
        let path = format!("/media/{}", kind.resource());
        let body = match serde_json::to_value(&item) {
            Ok(body) => body,
            Err(e) => {
                warn!(path, error = %e, "unserializable list item");
                return false;
            }
        };
        // Empty response body on success is valid; only the status matters.
        self.send(Method::POST, &path, Some(&body), session)
            .await
            .is_some()
    }

    async fn remove_list_item(
        &self,
        kind: ListKind,
        item_id: i64,
        media_kind: MediaKind,
        session: &SessionContext,
    ) -> bool {
        let path = match kind {
            ListKind::Watchlist => format!("/media/watchlist/{item_id}"),
            ListKind::Favorites => {
                format!("/media/favorites/{item_id}?mediaType={}", media_kind)
            }
        };
        self.send(Method::DELETE, &path, None, session)
            .await
            .is_some()
    }

    async fn is_reachable(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
