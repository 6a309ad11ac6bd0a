use mime_guess::mime;
use validator::Validate;

use crate::domain::{common::entities::app_errors::CoreError, recipe::entities::GeneratedRecipe};

/// Strips any directory components a client may have sent with the file name.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Guesses the media type from the file extension. Only images are accepted.
pub fn resolve_image_mime_type(file_name: &str) -> Result<String, CoreError> {
    let mime_type = mime_guess::from_path(file_name).first().ok_or_else(|| {
        CoreError::Invalid("Could not determine the MIME type of the uploaded file.".to_string())
    })?;

    if mime_type.type_() != mime::IMAGE {
        return Err(CoreError::Invalid(format!(
            "Unsupported media type {}: only images are accepted",
            mime_type
        )));
    }

    Ok(mime_type.essence_str().to_string())
}

pub fn parse_generated_recipe(raw_response: &str) -> Result<GeneratedRecipe, CoreError> {
    let recipe: GeneratedRecipe = serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::GenerationError(format!("Failed to parse LLM response: {}", e))
    })?;

    recipe.validate().map_err(|e| {
        tracing::error!("LLM response does not match the recipe schema: {}", e);
        CoreError::GenerationError(format!(
            "LLM response does not match the recipe schema: {}",
            e
        ))
    })?;

    Ok(recipe)
}
