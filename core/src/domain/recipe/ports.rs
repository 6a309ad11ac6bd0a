use std::future::Future;
use std::path::Path;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{MediaReference, NewRecipe, Recipe},
        value_objects::{GetRecipeInput, IngestImageInput, RecipeFilter},
    },
};

/// Client for the multimodal generation service
pub trait GenerationClient: Send + Sync {
    /// Uploads a local file to the service's media storage area
    fn upload_media(
        &self,
        path: &Path,
        mime_type: &str,
        display_name: &str,
    ) -> impl Future<Output = Result<MediaReference, CoreError>> + Send;

    /// Returns the text of the first candidate, constrained by `response_schema`
    fn generate_with_media(
        &self,
        prompt: String,
        media: MediaReference,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Repository trait for the hosted recipes table
pub trait RecipeRepository: Send + Sync {
    fn insert(&self, recipe: NewRecipe)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn fetch_recipes(
        &self,
        filter: RecipeFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}

/// Service trait for recipe business logic
pub trait RecipeService: Send + Sync {
    fn ingest_image(
        &self,
        input: IngestImageInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipe(
        &self,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_recipes(&self) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;
}
