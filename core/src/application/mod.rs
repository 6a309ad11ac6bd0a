use tracing::info;

use crate::{
    domain::common::{RecipeKitConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{llm::GeminiLLMClient, recipe::SupabaseRecipeRepository},
};

pub type RecipeKitService = Service<GeminiLLMClient, SupabaseRecipeRepository>;

pub async fn create_service(config: RecipeKitConfig) -> Result<RecipeKitService, CoreError> {
    if config.llm.gemini_api_key.trim().is_empty() {
        return Err(CoreError::ConfigurationError(
            "GEMINI_API_KEY environment variable is not set!".to_string(),
        ));
    }

    if config.document_store.url.trim().is_empty() || config.document_store.api_key.is_empty() {
        return Err(CoreError::ConfigurationError(
            "SUPABASE_URL and SUPABASE_KEY must be set".to_string(),
        ));
    }

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|e| {
            CoreError::ConfigurationError(format!(
                "Failed to create upload directory {}: {}",
                config.upload_dir.display(),
                e
            ))
        })?;

    let generation_client = GeminiLLMClient::new(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    let recipe_repository = SupabaseRecipeRepository::new(
        config.document_store.url,
        config.document_store.api_key,
        config.document_store.table,
    );

    info!(upload_dir = %config.upload_dir.display(), "Recipe service initialised");

    Ok(Service::new(
        generation_client,
        recipe_repository,
        config.upload_dir,
    ))
}
