//! Core type definitions for reelog.
//!
//! This crate defines the fundamental types shared by the store, the remote
//! client and the dashboard core:
//! - Media and list kinds
//! - List entries and diary entries (with legacy-schema tolerance)
//! - Profile and stats snapshots
//! - The `ListChanged` domain event
//! - The explicit session context passed into every core operation
//!
//! Anything presentation-related (card markup, labels beyond the grouping
//! headers) belongs to the rendering adapter, not here.

mod entry;
mod event;
mod media;
mod profile;
mod session;

pub use entry::{DiaryEntry, DiaryIdentity, ListEntry};
pub use event::ListChanged;
pub use media::{ListKind, MediaKind};
pub use profile::{ProfileSnapshot, StatsSnapshot};
pub use session::SessionContext;
