//! Error types for sign-up validation

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// A single field that failed its rules, with the message of the first
/// rule that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldValidationFailure {
    pub field: Field,
    pub message: String,
}

impl FieldValidationFailure {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldValidationFailure),
}
