use axum::{
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
};
use recipekit_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::IngestImageInput,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

const FILE_FIELD: &str = "file";

/// Multipart body accepted by [`upload_image`].
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadImageForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadImageResponse {
    pub message: String,
    pub data: Recipe,
}

#[utoipa::path(
    post,
    path = "/upload-image",
    tag = "recipe",
    summary = "Generate a recipe from a food image",
    description = "Uploads the image to the generation service, stores the generated recipe and returns the stored record.",
    request_body(content = UploadImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = UploadImageResponse),
        (status = 400, description = "Not a multipart body or no file in it", body = ApiErrorResponse),
        (status = 413, description = "Image larger than the upload limit", body = ApiErrorResponse),
        (status = 500, description = "Generation or storage failure", body = ApiErrorResponse),
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<UploadImageResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        error!("Rejected upload body: {}", rejection.body_text());
        ApiError::BadRequest(format!(
            "Invalid multipart request: {}",
            rejection.body_text()
        ))
    })?;

    let mut upload: Option<IngestImageInput> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Failed to read file", e))?;

        upload = Some(IngestImageInput {
            file_name,
            data: data.to_vec(),
        });
    }

    let input = upload.ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    info!(file_name = %input.file_name, size = input.data.len(), "Image received");

    let recipe = state
        .service
        .ingest_image(input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UploadImageResponse {
        message: "Recipe stored successfully!".to_string(),
        data: recipe,
    }))
}

fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }

    error!("{}: {}", context, error);
    ApiError::BadRequest(format!("{}: {}", context, error.body_text()))
}
