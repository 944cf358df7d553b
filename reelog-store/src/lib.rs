//! Local key-value store for reelog.
//!
//! String-keyed JSON blobs in a single SQLite file, one key per collection
//! plus the session fields. Operations are synchronous: the store lives on
//! local disk (or in memory for tests) and is never a suspension point.
//!
//! Read tolerance: a blob that fails to parse degrades to "no data" with a
//! warning rather than an error, and a collection whose individual records
//! fail to parse keeps the records that do parse. Only database-level
//! failures surface as [`StoreError`].

mod error;
mod kv;
mod users;

pub use error::{StoreError, StoreResult};
pub use kv::LocalStore;
pub use users::StoredUser;

/// Store keys, one per collection plus the session fields.
pub mod keys {
    pub const WATCHLIST: &str = "watchlist";
    pub const FAVORITES: &str = "favorites";
    /// Current diary key.
    pub const DIARY: &str = "diary";
    /// Legacy diary key, still read and merged during reconciliation.
    pub const MOVIE_LOGS: &str = "movie_logs";
    /// Directory of known users (for locally derived follower counts).
    pub const USERS: &str = "users";

    pub const SESSION_USER_ID: &str = "session.user_id";
    pub const SESSION_USERNAME: &str = "session.username";
    pub const SESSION_EMAIL: &str = "session.email";
    pub const SESSION_TOKEN: &str = "session.token";
    pub const SESSION_LOGGED_IN: &str = "session.logged_in";
}
