//! Notices - the terminal's toast messages
//!
//! Every notice is printed to stderr and logged, so the log file keeps a
//! record of what the operator was told.

use std::fmt;

use inventory_client::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    fn tag(&self) -> &'static str {
        match self {
            Self::Success => "ok",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Error notice for an API failure: the server's message, else `fallback`
    pub fn api_error(err: &ClientError, fallback: &str) -> Self {
        log_failure(err);
        Self::error(err.user_message(fallback))
    }

    /// Error notice with a fixed message; the cause only goes to the log
    pub fn failure(err: &ClientError, message: &str) -> Self {
        log_failure(err);
        Self::error(message)
    }

    /// Print to stderr and log at the matching level
    pub fn emit(&self) {
        match self.level {
            Level::Success | Level::Info => tracing::info!(target: "notice", "{}", self.message),
            Level::Warning => tracing::warn!(target: "notice", "{}", self.message),
            Level::Error => tracing::error!(target: "notice", "{}", self.message),
        }
        eprintln!("{}", self);
    }
}

fn log_failure(err: &ClientError) {
    tracing::warn!(code = %err.code(), error = %err, "Request failed");
    if err.is_unauthorized() {
        tracing::warn!("API rejected the session token; log in again");
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.tag(), self.message)
    }
}
