//! Error types for forms, codecs and stores.

use payinstr_types::FieldErrors;
use thiserror::Error;

/// Errors raised by an instruction store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No live record with this id
    #[error("Payment instruction not found: {0}")]
    NotFound(String),

    /// A record with this id already exists (live or soft-deleted)
    #[error("Payment instruction already exists: {0}")]
    AlreadyExists(String),

    /// An update must carry a new id
    #[error("Update must create a new record, got the current id {0}")]
    NotSuperseding(String),
}

/// Errors that can occur while handling payment instructions
#[derive(Error, Debug)]
pub enum InstructionError {
    /// Submission blocked by validation errors
    #[error("Invalid payment instruction: {}", describe(.0))]
    Invalid(FieldErrors),

    /// Method tag outside the known set
    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    /// Stored payload could not be decoded
    #[error("Malformed payment instruction payload: {0}")]
    MalformedPayload(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn describe(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(key, message)| format!("{key}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for instruction operations
pub type Result<T> = std::result::Result<T, InstructionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_lists_every_field() {
        let mut errors = FieldErrors::new();
        errors.insert("bank_name".to_string(), "Bank Name is required".to_string());
        errors.insert("id".to_string(), "Enter a valid UUID".to_string());

        let err = InstructionError::Invalid(errors);
        assert_eq!(
            err.to_string(),
            "Invalid payment instruction: bank_name: Bank Name is required, id: Enter a valid UUID"
        );
    }

    #[test]
    fn test_store_error_converts() {
        let err: InstructionError = StoreError::NotFound("abc".to_string()).into();
        assert!(matches!(err, InstructionError::Store(StoreError::NotFound(_))));
        assert_eq!(
            err.to_string(),
            "Store error: Payment instruction not found: abc"
        );
    }
}
