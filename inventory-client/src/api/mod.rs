//! Typed calls against the inventory REST API
//!
//! One `impl` block per resource. Responses the UI does not use are read
//! as [`IgnoredAny`](serde::de::IgnoredAny) so an empty or unexpected body
//! on success is not an error.

mod auth;
mod customers;
mod dashboard;
mod products;
mod reports;
mod sales;
mod settings;
mod suppliers;
mod users;

use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Inventory API client
#[derive(Debug, Clone)]
pub struct InventoryClient<H: HttpClient = NetworkHttpClient> {
    http: H,
}

impl InventoryClient<NetworkHttpClient> {
    /// Create a client over the network transport
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_http(config.build_http_client()?))
    }
}

impl<H: HttpClient> InventoryClient<H> {
    /// Create a client over any transport
    pub fn with_http(http: H) -> Self {
        Self { http }
    }

    /// Current bearer token
    pub fn token(&self) -> Option<&str> {
        self.http.token()
    }

    /// Replace the bearer token sent with every request
    pub fn set_token(&mut self, token: Option<String>) {
        self.http.set_token(token);
    }

    pub fn http(&self) -> &H {
        &self.http
    }
}
