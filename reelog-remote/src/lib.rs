//! Remote sync client for the reelog media API.
//!
//! Every read returns `Option<T>`: `None` means "no remote" — missing
//! credential, network failure, timeout or a non-2xx status — and callers
//! must treat it exactly like "use the local store". Failures are logged at
//! warn level and never retried. A 2xx response carrying an empty array is
//! `Some(vec![])`: a valid zero-item result that must NOT trigger local
//! fallback.
//!
//! Mutations (list add/remove) report bare success as `bool`; callers fire
//! them from detached tasks and never inspect the outcome.

mod api;
mod client;
mod wire;

pub use api::RemoteApi;
pub use client::{RemoteClient, RemoteConfig};
pub use wire::{NewListItem, RemoteListItem, RemoteLog, RemoteProfile};
