//! Registrations API
//!
//! The single intake endpoint: validate a submission, persist it, report
//! the generated college id and participant count.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

use crate::api::common::{ApiError, ValidationErrors};
use crate::domain::validate;
use crate::error::RegistrationError;
use crate::repository::MySqlRegistrationRepository;

/// Successful registration response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub message: String,
    pub college_id: u64,
    pub participants_count: usize,
}

/// Registrations service state
#[derive(Clone)]
pub struct RegistrationsState {
    pub registration_repo: Arc<MySqlRegistrationRepository>,
}

/// Submit a registration
#[utoipa::path(
    post,
    path = "",
    tag = "registrations",
    responses(
        (status = 201, description = "Registration accepted", body = RegistrationResponse),
        (status = 400, description = "Malformed payload or validation failure", body = ValidationErrors),
        (status = 500, description = "Storage failure", body = ApiError)
    )
)]
pub async fn submit_registration(
    State(state): State<RegistrationsState>,
    Json(payload): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<RegistrationResponse>), RegistrationError> {
    let submission = payload
        .as_object()
        .ok_or_else(|| RegistrationError::invalid_payload("Request body must be a JSON object"))?;

    let registration = validate(submission).map_err(|errors| {
        debug!(violations = errors.len(), "Registration rejected by validation");
        RegistrationError::validation(errors)
    })?;

    let receipt = state.registration_repo.create(&registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            message: "Registration submitted successfully!".to_string(),
            college_id: receipt.college_id,
            participants_count: receipt.participants_count,
        }),
    ))
}

/// Create registrations router
pub fn registrations_router(state: RegistrationsState) -> Router {
    Router::new()
        .route("/", post(submit_registration))
        .with_state(state)
}
