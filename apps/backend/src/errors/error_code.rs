//! Error codes for the backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Each
//! variant maps 1:1 to a canonical SCREAMING_SNAKE_CASE string used in
//! logs and tests.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Payload failed field-level validation
    ValidationError,
    /// Malformed request body
    BadRequest,
    /// Path segment is not a valid greeting id
    InvalidGreetingId,

    // Resources
    /// Greeting does not exist
    GreetingNotFound,
    /// Generic missing resource
    NotFound,

    // Infrastructure
    /// Database query failure
    DbError,
    /// Database unreachable or pool exhausted
    DbUnavailable,
    /// Invalid or missing configuration
    ConfigError,
    /// Unexpected internal failure
    Internal,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidGreetingId => "INVALID_GREETING_ID",
            ErrorCode::GreetingNotFound => "GREETING_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
