//! Error codes for HTTP statuses returned by the inventory API

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Classify a non-success HTTP status returned by the inventory API
    pub fn from_http_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => Self::ValidationFailed,
            StatusCode::UNAUTHORIZED => Self::NotAuthenticated,
            StatusCode::FORBIDDEN => Self::PermissionDenied,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::CONFLICT => Self::AlreadyExists,
            s if s.is_success() => Self::Success,
            _ => Self::InternalError,
        }
    }
}
