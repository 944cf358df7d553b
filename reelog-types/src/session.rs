//! Explicit session context.
//!
//! The active user identity is owned by an external auth flow. Instead of
//! reading ambient globals, every core operation takes this value; an empty
//! `user_id` means "nobody is logged in".

use serde::{Deserialize, Serialize};

/// The active user's identity and credential for one core operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: String,
    pub username: String,
    pub email: String,
    /// Bearer credential for the remote API. Absent means local-only mode.
    pub token: Option<String>,
}

impl SessionContext {
    /// Returns true if an active user identity is present.
    #[must_use]
    pub fn has_user(&self) -> bool {
        !self.user_id.is_empty()
    }

    /// Returns the bearer token, if the session carries one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
