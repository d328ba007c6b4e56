//! API Integration Tests
//!
//! Tests for the error taxonomy and its HTTP response mapping.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use festreg::RegistrationError;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

mod error_response_tests {
    use super::*;

    #[tokio::test]
    async fn test_validation_errors_map_to_bad_request_with_full_list() {
        let errors = vec![
            "collegeName is required".to_string(),
            "Dance must have between 5 and 7 participants (got 4)".to_string(),
        ];
        let response = RegistrationError::validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errors"][0], "collegeName is required");
        assert_eq!(
            body["errors"][1],
            "Dance must have between 5 and 7 participants (got 4)"
        );
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_payload_maps_to_bad_request() {
        let response =
            RegistrationError::invalid_payload("Request body must be a JSON object").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INVALID_PAYLOAD");
        assert_eq!(body["message"], "Request body must be a JSON object");
    }

    #[tokio::test]
    async fn test_database_error_maps_to_internal_server_error_with_cause() {
        let response = RegistrationError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "DATABASE_ERROR");
        assert_eq!(body["message"], "Database error");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn test_unexpected_error_maps_to_internal_server_error() {
        let response = RegistrationError::internal("worker panicked").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert_eq!(body["message"], "Unexpected server error");
        assert_eq!(body["details"], "worker panicked");
    }
}

mod error_display_tests {
    use super::*;

    #[test]
    fn test_validation_error_display_joins_messages() {
        let err = RegistrationError::validation(vec![
            "collegeName is required".to_string(),
            "coordinatorName is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: collegeName is required; coordinatorName is required"
        );
    }

    #[test]
    fn test_database_error_wraps_sqlx_cause() {
        let err = RegistrationError::from(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("Database error:"));
    }
}
