//! Registration Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    #[error("Validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RegistrationError {
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload { message: message.into() }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, RegistrationError>;
