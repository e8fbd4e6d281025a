//! Data models
//!
//! Records mirrored from the inventory API. The API is backed by a SQL
//! database whose aggregate and numeric columns are sometimes returned as
//! strings, so counts and money accept either a JSON number or a string.
//! All IDs are `i64`.

pub mod customer;
pub mod dashboard;
pub mod serde_helpers;
pub mod product;
pub mod report;
pub mod sale;
pub mod settings;
pub mod supplier;
pub mod user;

// Re-exports
pub use customer::*;
pub use dashboard::*;
pub use product::*;
pub use report::*;
pub use sale::*;
pub use settings::*;
pub use supplier::*;
pub use user::*;
