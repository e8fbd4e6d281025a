//! Unified error codes for the inventory client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Sale / cart errors
//! - 6xxx: Product errors
//! - 7xxx: Contact (customer / supplier) errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,
    /// Confirmation value does not match
    ConfirmationMismatch = 9,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Sale ====================
    /// Sale not found
    SaleNotFound = 4001,
    /// Cart is empty
    CartEmpty = 4007,
    /// Cart line not found
    CartLineNotFound = 4008,
    /// Requested quantity exceeds the stock snapshot
    InsufficientStock = 4009,
    /// Discount exceeds the line subtotal
    DiscountExceedsSubtotal = 4010,
    /// Amount is not a valid money value
    InvalidAmount = 4011,
    /// Sale submission rejected by the server
    SaleSubmitFailed = 4012,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Product is out of stock
    ProductOutOfStock = 6003,
    /// Product SKU already exists
    ProductSkuExists = 6004,
    /// Bulk import file could not be read
    ImportFileInvalid = 6501,
    /// Bulk import file has no rows
    ImportFileEmpty = 6505,

    // ==================== 7xxx: Contact ====================
    /// Customer not found
    CustomerNotFound = 7001,
    /// Supplier not found
    SupplierNotFound = 7101,
    /// Contact email already exists
    ContactEmailExists = 7002,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,
    /// Username or email already registered
    UserAlreadyExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9002,
    /// Server responded with an unexpected payload
    InvalidResponse = 9003,
    /// Configuration error
    ConfigError = 9004,
    /// Local storage error
    StorageError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::ConfirmationMismatch => "Values do not match",

            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "Invalid email or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",

            Self::PermissionDenied => "Permission denied",
            Self::AdminRequired => "Admin role required",

            Self::SaleNotFound => "Sale not found",
            Self::CartEmpty => "Cart is empty",
            Self::CartLineNotFound => "Item is not in the cart",
            Self::InsufficientStock => "Insufficient stock",
            Self::DiscountExceedsSubtotal => "Discount exceeds item subtotal",
            Self::InvalidAmount => "Invalid amount",
            Self::SaleSubmitFailed => "Failed to complete sale",

            Self::ProductNotFound => "Product not found",
            Self::ProductInvalidPrice => "Product has invalid price",
            Self::ProductOutOfStock => "Product is out of stock",
            Self::ProductSkuExists => "Product SKU already exists",
            Self::ImportFileInvalid => "Import file could not be read",
            Self::ImportFileEmpty => "Import file has no rows",

            Self::CustomerNotFound => "Customer not found",
            Self::SupplierNotFound => "Supplier not found",
            Self::ContactEmailExists => "Email might already exist",

            Self::UserNotFound => "User not found",
            Self::UserAlreadyExists => "User already exists",

            Self::InternalError => "Internal error",
            Self::NetworkError => "Network error",
            Self::InvalidResponse => "Invalid response from server",
            Self::ConfigError => "Configuration error",
            Self::StorageError => "Local storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,
            9 => Self::ConfirmationMismatch,

            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,

            2001 => Self::PermissionDenied,
            2003 => Self::AdminRequired,

            4001 => Self::SaleNotFound,
            4007 => Self::CartEmpty,
            4008 => Self::CartLineNotFound,
            4009 => Self::InsufficientStock,
            4010 => Self::DiscountExceedsSubtotal,
            4011 => Self::InvalidAmount,
            4012 => Self::SaleSubmitFailed,

            6001 => Self::ProductNotFound,
            6002 => Self::ProductInvalidPrice,
            6003 => Self::ProductOutOfStock,
            6004 => Self::ProductSkuExists,
            6501 => Self::ImportFileInvalid,
            6505 => Self::ImportFileEmpty,

            7001 => Self::CustomerNotFound,
            7101 => Self::SupplierNotFound,
            7002 => Self::ContactEmailExists,

            8001 => Self::UserNotFound,
            8002 => Self::UserAlreadyExists,

            9001 => Self::InternalError,
            9002 => Self::NetworkError,
            9003 => Self::InvalidResponse,
            9004 => Self::ConfigError,
            9005 => Self::StorageError,

            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::CartEmpty.code(), 4007);
        assert_eq!(ErrorCode::InsufficientStock.code(), 4009);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(
            ErrorCode::try_from(4010),
            Ok(ErrorCode::DiscountExceedsSubtotal)
        );
        assert_eq!(ErrorCode::try_from(7101), Ok(ErrorCode::SupplierNotFound));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_roundtrip() {
        for code in [
            ErrorCode::ValidationFailed,
            ErrorCode::TokenExpired,
            ErrorCode::AdminRequired,
            ErrorCode::SaleSubmitFailed,
            ErrorCode::ImportFileEmpty,
            ErrorCode::UserAlreadyExists,
            ErrorCode::StorageError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::CartEmpty).unwrap();
        assert_eq!(json, "4007");
        let code: ErrorCode = serde_json::from_str("6003").unwrap();
        assert_eq!(code, ErrorCode::ProductOutOfStock);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::InsufficientStock.to_string(), "E4009");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::CartEmpty.message(), "Cart is empty");
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
    }
}
