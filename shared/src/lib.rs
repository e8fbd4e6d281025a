//! Shared types for the Smart Inventory client
//!
//! Wire models mirrored from the inventory API, the unified error codes,
//! money helpers, client-side search and the checkout cart engine.

pub mod cart;
pub mod client;
pub mod error;
pub mod models;
pub mod money;
pub mod search;

// Re-exports
pub use http;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartChange, CartError, CartField, CartLine, CartTotals};
pub use error::{AppError, AppResult, ErrorCode};
