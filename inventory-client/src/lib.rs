//! Inventory Client - HTTP client for the Smart Inventory API
//!
//! Typed endpoint calls over a bearer-token [`HttpClient`], the auth
//! [`Session`] and route gate, checkout submission, CSV import/export and
//! receipt rendering.

pub mod access;
pub mod api;
pub mod checkout;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod http;
pub mod receipt;
pub mod session;

pub use access::{Action, Guard, Route};
pub use api::InventoryClient;
pub use checkout::{CheckoutError, CheckoutSession, SaleGateway};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use receipt::ReceiptRenderer;
pub use session::{Claims, Session, SessionError, SessionStorage, StoredSession};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
pub use shared::models::Role;
