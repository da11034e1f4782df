//! Client-facing error taxonomy and its HTTP mapping.
//!
//! Handlers return [`ApiError`] and the boundary translates each variant
//! into a status code plus a `{"message"}` body. Store failures are logged
//! server-side and surfaced as a generic message, never the raw error text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Error envelope returned to clients.
#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// No credential supplied on a protected route
    #[error("No token")]
    MissingToken,
    /// Credential supplied but failed verification
    #[error("Invalid token")]
    InvalidToken,
    /// Login failure, unknown email and wrong password are indistinguishable
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// Request payload failed validation
    #[error("{0}")]
    Validation(String),
    /// Underlying store failure
    #[error("Server error")]
    Store(#[from] sqlx::Error),
    /// Unexpected internal failure
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::InvalidCredentials | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(err) => error!("Database error: {err}"),
            Self::Internal(err) => error!("Internal error: {err}"),
            _ => {}
        }

        let body = Json(ErrorMessage {
            message: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_message(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: ErrorMessage = serde_json::from_slice(&bytes).unwrap();
        parsed.message
    }

    #[tokio::test]
    async fn test_missing_token_maps_to_401() {
        let response = ApiError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_message(response).await, "No token");
    }

    #[tokio::test]
    async fn test_invalid_token_maps_to_401() {
        let response = ApiError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_message(response).await, "Invalid token");
    }

    #[tokio::test]
    async fn test_invalid_credentials_maps_to_400() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await, "Invalid credentials");
    }

    #[tokio::test]
    async fn test_validation_keeps_its_message() {
        let response = ApiError::Validation("ip address is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await, "ip address is required");
    }

    #[tokio::test]
    async fn test_store_error_does_not_leak_details() {
        let response = ApiError::Store(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await, "Server error");
    }
}
