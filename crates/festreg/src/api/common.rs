//! Common API types and the error-to-response mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::error::RegistrationError;

/// Standard API error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Validation rejection carrying the full ordered violation list
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrors {
    pub errors: Vec<String>,
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        match self {
            RegistrationError::InvalidPayload { message } => (
                StatusCode::BAD_REQUEST,
                Json(ApiError {
                    error: "INVALID_PAYLOAD".to_string(),
                    message,
                    details: None,
                }),
            )
                .into_response(),
            RegistrationError::Validation { errors } => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrors { errors })).into_response()
            }
            RegistrationError::Database(err) => {
                error!("Database error while saving registration: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiError {
                        error: "DATABASE_ERROR".to_string(),
                        message: "Database error".to_string(),
                        details: Some(serde_json::Value::String(err.to_string())),
                    }),
                )
                    .into_response()
            }
            RegistrationError::Internal { message } => {
                error!("Unexpected error while saving registration: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiError {
                        error: "INTERNAL_ERROR".to_string(),
                        message: "Unexpected server error".to_string(),
                        details: Some(serde_json::Value::String(message)),
                    }),
                )
                    .into_response()
            }
        }
    }
}
