//! Desk error type
//!
//! Failures a view cannot turn into a notice on its own. API failures are
//! normally reported by the view with its own message; what reaches here is
//! shown as an error notice by the dispatcher.

use inventory_client::csv_io::CsvError;
use inventory_client::{Action, ClientError, Route, SessionError};
use shared::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Please log in to open {0}.")]
    NotSignedIn(Route),

    #[error("Only admins can {}.", .0.describe())]
    AdminRequired(Action),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Csv(#[from] CsvError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Input(String),
}

impl DeskError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotSignedIn(_) => ErrorCode::NotAuthenticated,
            Self::AdminRequired(_) => ErrorCode::AdminRequired,
            Self::Client(e) => e.code(),
            Self::Session(_) => ErrorCode::StorageError,
            Self::Csv(e) => e.code(),
            Self::Io(_) => ErrorCode::InternalError,
            Self::Input(_) => ErrorCode::ValidationFailed,
        }
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
