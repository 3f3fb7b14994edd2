// src/services/session.rs

//! Portal logout flow.
//!
//! The one operation in this crate whose failure is user-visible:
//! errors are propagated to the caller instead of being substituted
//! away.

use std::sync::Arc;

use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::storage::LocalStorage;

/// Where the user ends up after a completed logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutOutcome {
    /// Redirect target (the portal's auth page)
    pub redirect: String,

    /// Whether local session state existed and was removed
    pub session_cleared: bool,
}

/// Service handling the portal logout flow.
pub struct SessionService {
    config: Arc<Config>,
    client: Client,
    storage: LocalStorage,
}

impl SessionService {
    /// Create a new session service.
    pub fn new(config: Arc<Config>, client: Client, storage: LocalStorage) -> Self {
        Self {
            config,
            client,
            storage,
        }
    }

    /// Log out of the portal.
    ///
    /// Posts to the logout endpoint, clears the local client storage,
    /// and yields the auth redirect target. Every step must succeed;
    /// any failure propagates.
    pub async fn logout(&self) -> Result<LogoutOutcome> {
        let url = self.config.portal.logout_url()?;
        self.client
            .post(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AppError::session(format!("logout endpoint rejected the request: {e}")))?;

        let session_cleared = self.storage.clear_session().await?;

        Ok(LogoutOutcome {
            redirect: self.config.portal.auth_path.clone(),
            session_cleared,
        })
    }
}
