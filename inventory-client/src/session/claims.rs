//! Token payload decoding
//!
//! The payload of the JWT is read without verifying the signature. The
//! API checks the token on every request; the client only needs the
//! identity and role to decide what to show.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use shared::client::UserInfo;
use shared::models::Role;

use super::SessionError;

/// Identity claims carried in the session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    /// Expiry as seconds since the Unix epoch
    #[serde(default)]
    pub exp: Option<u64>,
}

impl Claims {
    /// Decode the payload segment of `header.payload.signature`
    pub fn decode(token: &str) -> Result<Self, SessionError> {
        let parts: Vec<&str> = token.trim().split('.').collect();
        if parts.len() != 3 {
            return Err(SessionError::InvalidToken(format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        }

        // Some issuers keep the base64 padding
        let payload = parts[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| SessionError::InvalidToken(format!("payload is not base64url: {}", e)))?;
        serde_json::from_slice(&bytes)
            .map_err(|e| SessionError::InvalidToken(format!("payload is not valid JSON: {}", e)))
    }

    /// Whether `exp` lies before `now` (seconds since epoch)
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.exp.is_some_and(|exp| now >= exp)
    }

    pub fn is_expired(&self) -> bool {
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        self.is_expired_at(now)
    }

    /// Identity for the session, filling gaps from a stored user record
    pub fn to_user_info(&self, stored: Option<&UserInfo>) -> UserInfo {
        let stored = stored.filter(|u| self.id.is_none_or(|id| id == u.id));
        UserInfo {
            id: self.id.or(stored.map(|u| u.id)).unwrap_or_default(),
            username: self
                .username
                .clone()
                .or_else(|| stored.map(|u| u.username.clone()))
                .unwrap_or_default(),
            email: self.email.clone().or_else(|| stored.and_then(|u| u.email.clone())),
            role: self.role,
        }
    }
}
