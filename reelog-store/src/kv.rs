//! SQLite-backed key-value store.

use crate::error::{StoreError, StoreResult};
use crate::keys;
use reelog_types::SessionContext;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Persistent local store backed by SQLite.
///
/// Cloning shares the underlying connection. All accesses take the
/// connection mutex for the duration of one statement; there are no
/// multi-statement transactions because every collection lives under a
/// single key and is replaced whole (last-writer-wins).
#[derive(Clone)]
pub struct LocalStore {
    conn: Arc<Mutex<Connection>>,
}

impl LocalStore {
    /// Opens (or creates) a store at the given path.
    pub fn new(path: &str) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.lock();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    // ── Raw access ──────────────────────────────────────────────

    /// Reads the raw string under a key.
    pub fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self.lock();
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes a raw string under a key, replacing any existing value.
    pub fn put_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        let conn = self.lock();
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Removes a key. Removing an absent key is not an error.
    pub fn delete(&self, key: &str) -> StoreResult<()> {
        let conn = self.lock();
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Typed access ────────────────────────────────────────────

    /// Reads and parses the JSON blob under a key.
    ///
    /// Malformed JSON degrades to `None` with a warning.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!(key, error = %e, "malformed stored JSON, treating as absent");
                Ok(None)
            }
        }
    }

    /// Serializes a value and writes it under a key.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialization)?;
        self.put_raw(key, &raw)
    }

    /// Reads a JSON array under a key, keeping the records that parse.
    ///
    /// A missing key, a malformed blob, or a blob that is not an array all
    /// degrade to an empty collection. Individual records that fail to parse
    /// are skipped with a warning.
    pub fn get_collection<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        let Some(raw) = self.get_raw(key)? else {
            return Ok(Vec::new());
        };
        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                warn!(key, error = %e, "malformed stored collection, treating as empty");
                return Ok(Vec::new());
            }
        };
        let mut records = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value(value) {
                Ok(record) => records.push(record),
                Err(e) => warn!(key, error = %e, "skipping malformed record"),
            }
        }
        Ok(records)
    }

    /// Replaces the JSON array under a key.
    pub fn put_collection<T: Serialize>(&self, key: &str, records: &[T]) -> StoreResult<()> {
        self.put_json(key, &records)
    }

    // ── Session fields ──────────────────────────────────────────

    /// Assembles the session context from the session keys.
    ///
    /// Absent fields come back empty; an absent token comes back `None`.
    pub fn load_session(&self) -> StoreResult<SessionContext> {
        Ok(SessionContext {
            user_id: self.get_raw(keys::SESSION_USER_ID)?.unwrap_or_default(),
            username: self.get_raw(keys::SESSION_USERNAME)?.unwrap_or_default(),
            email: self.get_raw(keys::SESSION_EMAIL)?.unwrap_or_default(),
            token: self.get_raw(keys::SESSION_TOKEN)?,
        })
    }

    /// Persists the session context into the session keys.
    pub fn save_session(&self, session: &SessionContext) -> StoreResult<()> {
        self.put_raw(keys::SESSION_USER_ID, &session.user_id)?;
        self.put_raw(keys::SESSION_USERNAME, &session.username)?;
        self.put_raw(keys::SESSION_EMAIL, &session.email)?;
        match &session.token {
            Some(token) => self.put_raw(keys::SESSION_TOKEN, token)?,
            None => self.delete(keys::SESSION_TOKEN)?,
        }
        Ok(())
    }

    /// Reads the logged-in flag.
    pub fn is_logged_in(&self) -> StoreResult<bool> {
        Ok(self.get_raw(keys::SESSION_LOGGED_IN)?.as_deref() == Some("true"))
    }

    /// Sets the logged-in flag.
    pub fn set_logged_in(&self, logged_in: bool) -> StoreResult<()> {
        self.put_raw(
            keys::SESSION_LOGGED_IN,
            if logged_in { "true" } else { "false" },
        )
    }
}
