use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipekit_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::RecipeNotFound(_) => ApiError::NotFound(error.to_string()),
            CoreError::GenerationError(message) => {
                ApiError::InternalServerError(format!("Error generating recipe: {}", message))
            }
            other => ApiError::InternalServerError(format!("Error processing request: {}", other)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, detail = %self, "Request failed");
        }

        (
            status,
            Json(ApiErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_message() {
        let error = ApiError::from(CoreError::RecipeNotFound(42));

        assert_eq!(
            error,
            ApiError::NotFound("Recipe with ID 42 not found".to_string())
        );
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_generation_error_prefix() {
        let error = ApiError::from(CoreError::GenerationError("no candidates".to_string()));

        assert_eq!(
            error,
            ApiError::InternalServerError("Error generating recipe: no candidates".to_string())
        );
    }

    #[test]
    fn test_other_errors_are_processing_errors() {
        for core_error in [
            CoreError::StorageError("insert failed".to_string()),
            CoreError::Invalid("insert failed".to_string()),
            CoreError::TransientFileError("insert failed".to_string()),
        ] {
            let error = ApiError::from(core_error);

            assert_eq!(
                error,
                ApiError::InternalServerError("Error processing request: insert failed".to_string())
            );
            assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_payload_too_large_status() {
        let error = ApiError::PayloadTooLarge("Image too large".to_string());

        assert_eq!(error.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
