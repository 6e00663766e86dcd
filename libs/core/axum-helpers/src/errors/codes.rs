//! Error codes attached to error logs.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier and an integer used as the
//! `error_code` field of the tracing event.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Request body missing, malformed, or rejected by validation
    ValidationError,

    /// Requested resource was not found
    NotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
