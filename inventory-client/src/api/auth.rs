//! Auth API

use serde::de::IgnoredAny;
use shared::client::{LoginRequest, LoginResponse, RegisterRequest};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    /// Exchange email and password for a token and the user record
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post("/api/auth/login", &request).await
    }

    /// Create a new account; the response body is ignored
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        self.http
            .post::<IgnoredAny, _>("/api/auth/register", request)
            .await?;
        Ok(())
    }
}
