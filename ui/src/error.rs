use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// Non-success response from the API, with its `detail`.
    #[error("{detail}")]
    Api { status: u16, detail: String },

    #[error("An error occurred: {0}")]
    Transport(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
