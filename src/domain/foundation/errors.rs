//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,

    // Not found errors
    ConversationNotFound,

    // State errors
    InvalidStatusTransition,

    // Infrastructure errors
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::ConversationNotFound => "CONVERSATION_NOT_FOUND",
            ErrorCode::InvalidStatusTransition => "INVALID_STATUS_TRANSITION",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates an empty-field error for a specific field.
    pub fn empty_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            code: ErrorCode::EmptyField,
            message: format!("Field '{}' cannot be empty", field),
            details: HashMap::new(),
        }
        .with_detail("field", field)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_displays_screaming_snake_case() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "VALIDATION_FAILED");
        assert_eq!(
            ErrorCode::ConversationNotFound.to_string(),
            "CONVERSATION_NOT_FOUND"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::InternalError, "boom");
        assert_eq!(format!("{}", err), "[INTERNAL_ERROR] boom");
    }

    #[test]
    fn validation_error_carries_field_detail() {
        let err = DomainError::validation("message", "cannot be empty");
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field").map(String::as_str), Some("message"));
    }

    #[test]
    fn empty_field_error_names_the_field() {
        let err = DomainError::empty_field("content");
        assert_eq!(err.code, ErrorCode::EmptyField);
        assert_eq!(err.details.get("field").map(String::as_str), Some("content"));
    }

    #[test]
    fn with_detail_accumulates() {
        let err = DomainError::new(ErrorCode::InternalError, "boom")
            .with_detail("a", "1")
            .with_detail("b", "2");
        assert_eq!(err.details.len(), 2);
    }
}
