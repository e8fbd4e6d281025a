//! Auth session
//!
//! Explicit replacement for a process-wide auth provider: the desk owns one
//! [`Session`] and passes it to every view. The session holds the token,
//! the signed-in identity and the business settings fetched after sign-in.

mod claims;
mod storage;

pub use claims::Claims;
pub use storage::{SESSION_FILE, SessionStorage, StoredSession};

use shared::client::UserInfo;
use shared::models::{BusinessSettings, Role};
use thiserror::Error;

use crate::access::{Action, Guard, Route};
use crate::{HttpClient, InventoryClient};

/// Session error type
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Invalid session token: {0}")]
    InvalidToken(String),
}

/// Signed-in state
#[derive(Debug)]
pub struct Session {
    storage: SessionStorage,
    token: Option<String>,
    user: Option<UserInfo>,
    settings: Option<BusinessSettings>,
}

impl Session {
    /// Restore the session persisted in `storage`
    ///
    /// A token whose payload cannot be decoded is discarded. An expired
    /// token is kept; the API will reject it and the user signs in again.
    pub fn init(storage: SessionStorage) -> Self {
        let mut session = Self {
            storage,
            token: None,
            user: None,
            settings: None,
        };

        let Some(stored) = session.storage.load() else {
            return session;
        };

        match Claims::decode(&stored.token) {
            Ok(claims) => {
                if claims.is_expired() {
                    tracing::warn!(exp = ?claims.exp, "Stored session token has expired");
                }
                session.user = Some(claims.to_user_info(stored.user.as_ref()));
                session.token = Some(stored.token);
                tracing::info!(role = %claims.role, "Session restored");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding undecodable session token");
                if let Err(e) = session.storage.delete() {
                    tracing::warn!(error = %e, "Failed to remove session file");
                }
            }
        }
        session
    }

    /// Persist and adopt a freshly issued token
    pub fn login(&mut self, token: String, user: UserInfo) -> Result<(), SessionError> {
        self.storage.save(&StoredSession {
            token: token.clone(),
            user: Some(user.clone()),
        })?;
        tracing::info!(user_id = user.id, role = %user.role, "Signed in");
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    /// Forget the token, identity and settings
    ///
    /// In-memory state is cleared even if the stored file cannot be removed.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.token = None;
        self.user = None;
        self.settings = None;
        tracing::info!("Signed out");
        self.storage.delete()?;
        Ok(())
    }

    /// Fetch business settings for receipts and the dashboard header
    ///
    /// Failure is logged only; the previous settings are kept.
    pub async fn load_settings<H: HttpClient>(&mut self, client: &InventoryClient<H>) {
        match client.business_settings().await {
            Ok(settings) => self.settings = Some(settings),
            Err(e) => tracing::warn!(error = %e, "Could not fetch business settings"),
        }
    }

    /// Replace the cached settings after an edit
    pub fn set_settings(&mut self, settings: BusinessSettings) {
        self.settings = Some(settings);
    }

    /// Token presence is the only check
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn settings(&self) -> Option<&BusinessSettings> {
        self.settings.as_ref()
    }

    /// Role of the signed-in user; signed-out sessions count as `user`
    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or_default()
    }

    /// Whether the stored token's `exp` has passed
    pub fn token_expired(&self) -> bool {
        self.token
            .as_deref()
            .and_then(|t| Claims::decode(t).ok())
            .is_some_and(|c| c.is_expired())
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role().is_admin()
    }

    /// Whether `route` may be shown
    pub fn guard(&self, route: Route) -> Guard {
        route.guard(self.is_authenticated())
    }

    /// Whether `action` is offered to the signed-in user
    pub fn can(&self, action: Action) -> bool {
        self.is_authenticated() && action.permitted(self.role())
    }

    pub fn storage(&self) -> &SessionStorage {
        &self.storage
    }
}
