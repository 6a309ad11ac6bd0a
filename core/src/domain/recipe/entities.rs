use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A stored recipe. Serializes to the `RecipeRecord` shape exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: i64,
    pub file_id: String,
    pub file_name: String,
    #[serde(rename = "recipe_title")]
    pub title: String,
    #[serde(rename = "recipe_description")]
    pub description: String,
    #[serde(rename = "recipe_ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "recipe_making_time")]
    pub making_time: String,
    #[serde(rename = "recipe_instructions_to_make")]
    pub instructions: Vec<String>,
    #[serde(rename = "recipe_number_of_people_servings")]
    pub servings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recipe content as returned by the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeneratedRecipe {
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "description is required"))]
    pub description: String,

    #[validate(custom(function = "not_blank", message = "making_time is required"))]
    pub making_time: String,

    #[serde(rename = "number_of_people_servings")]
    #[validate(custom(
        function = "not_blank",
        message = "number_of_people_servings is required"
    ))]
    pub servings: String,

    #[validate(
        length(min = 1, message = "ingredients must not be empty"),
        custom(
            function = "no_blank_items",
            message = "ingredients must not contain blank items"
        )
    )]
    pub ingredients: Vec<String>,

    #[serde(rename = "instructions_to_make")]
    #[validate(
        length(min = 1, message = "instructions_to_make must not be empty"),
        custom(
            function = "no_blank_items",
            message = "instructions_to_make must not contain blank items"
        )
    )]
    pub instructions: Vec<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn no_blank_items(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        return Err(ValidationError::new("blank_item"));
    }
    Ok(())
}

/// A recipe that has not been persisted yet, so it has no store id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub file_id: Uuid,
    pub file_name: String,
    pub title: String,
    pub description: String,
    pub making_time: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl NewRecipe {
    pub fn new(file_id: Uuid, file_name: String, generated: GeneratedRecipe) -> Self {
        Self {
            file_id,
            file_name,
            title: generated.title,
            description: generated.description,
            making_time: generated.making_time,
            servings: generated.servings,
            ingredients: generated.ingredients,
            instructions: generated.instructions,
        }
    }
}

/// Handle to media previously uploaded to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaReference {
    pub uri: String,
    pub mime_type: String,
}
