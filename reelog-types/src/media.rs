//! Media and list kind enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of media an entry refers to.
///
/// Legacy records sometimes carry unexpected values in this field; anything
/// unrecognized deserializes as `Movie`, matching how the rest of the system
/// treats records with no kind at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Tv,
    #[default]
    #[serde(other)]
    Movie,
}

impl MediaKind {
    /// Wire name used in remote request bodies and query strings.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two user-mutable lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Watchlist,
    Favorites,
}

impl ListKind {
    /// Key under which this list is stored in the local store.
    #[must_use]
    pub const fn store_key(&self) -> &'static str {
        match self {
            Self::Watchlist => "watchlist",
            Self::Favorites => "favorites",
        }
    }

    /// Path segment under the remote media namespace.
    #[must_use]
    pub const fn resource(&self) -> &'static str {
        match self {
            Self::Watchlist => "watchlist",
            Self::Favorites => "favorites",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.store_key())
    }
}
