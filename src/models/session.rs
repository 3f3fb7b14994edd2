//! Local client session state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Client session persisted in local storage.
///
/// Created by the portal's auth flow (outside this crate); portico
/// only reads it for display and clears it on logout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Display name of the logged-in user, if known
    #[serde(default)]
    pub user: Option<String>,

    /// Opaque session token
    #[serde(default)]
    pub token: Option<String>,

    /// When the session was established
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session for the given user, stamped now.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            token: None,
            created_at: Utc::now(),
        }
    }
}
