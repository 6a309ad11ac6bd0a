use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_file_id, services::Service},
    recipe::{
        entities::{NewRecipe, Recipe},
        helpers::{parse_generated_recipe, resolve_image_mime_type, sanitize_file_name},
        ports::{GenerationClient, RecipeRepository, RecipeService},
        schema::{RECIPE_PROMPT, get_recipe_schema},
        transient::TransientUpload,
        value_objects::{GetRecipeInput, IngestImageInput, RecipeFilter},
    },
};

impl<G, RR> RecipeService for Service<G, RR>
where
    G: GenerationClient,
    RR: RecipeRepository,
{
    #[instrument(skip(self, input), fields(file_name = %input.file_name, size = input.data.len()))]
    async fn ingest_image(&self, input: IngestImageInput) -> Result<Recipe, CoreError> {
        // 1. Validate the upload before any external call
        let local_name = sanitize_file_name(&input.file_name);
        let mime_type = resolve_image_mime_type(&local_name)?;

        if input.data.is_empty() {
            return Err(CoreError::Invalid("Uploaded file is empty".to_string()));
        }

        // 2. Keep a transient local copy for the media upload
        let file_id = generate_file_id();
        let upload =
            TransientUpload::persist(&self.upload_dir, file_id, &local_name, &input.data).await?;

        // 3. Upload to the generation service
        let media = self
            .generation_client
            .upload_media(upload.path(), &mime_type, &local_name)
            .await?;

        tracing::info!(
            file_id = %file_id,
            mime_type = %mime_type,
            media_uri = %media.uri,
            "Image uploaded to generation service"
        );

        // 4. Generate and validate
        let raw_response = self
            .generation_client
            .generate_with_media(RECIPE_PROMPT.to_string(), media, get_recipe_schema())
            .await?;

        let generated = parse_generated_recipe(&raw_response)?;

        upload.discard();

        // 5. Store
        let recipe = self
            .recipe_repository
            .insert(NewRecipe::new(file_id, input.file_name, generated))
            .await?;

        tracing::info!(file_id = %file_id, recipe_id = recipe.id, "Recipe stored");

        Ok(recipe)
    }

    #[instrument(skip(self))]
    async fn get_recipe(&self, input: GetRecipeInput) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .fetch_recipes(RecipeFilter::by_id(input.recipe_id))
            .await?
            .into_iter()
            .next()
            .ok_or(CoreError::RecipeNotFound(input.recipe_id))
    }

    #[instrument(skip(self))]
    async fn get_recipes(&self) -> Result<Vec<Recipe>, CoreError> {
        let recipes = self
            .recipe_repository
            .fetch_recipes(RecipeFilter::default())
            .await?;

        tracing::debug!(count = recipes.len(), "Fetched recipes");

        Ok(recipes)
    }
}
