use recipekit_api::application::http::{
    recipe::handlers::{
        upload_image::UploadImageResponse, view_all_recipes::ViewAllRecipesResponse,
        view_recipe::ViewRecipeResponse,
    },
    server::api_entities::api_error::ApiErrorResponse,
};
use recipekit_core::domain::recipe::entities::Recipe;
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use tracing::error;

use crate::error::UiError;

/// HTTP client for the three recipe endpoints of the API.
#[derive(Debug, Clone)]
pub struct RecipeApiClient {
    client: Client,
    base_url: String,
}

impl RecipeApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, UiError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);

            error!("API returned {}: {}", status, detail);
            return Err(UiError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UiError::Transport(format!("Invalid API response: {}", e)))
    }

    fn transport(e: reqwest::Error) -> UiError {
        error!("API request failed: {}", e);
        UiError::Transport(e.to_string())
    }

    pub async fn upload_image(
        &self,
        file_name: String,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<UploadImageResponse, UiError> {
        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(content_type)
            .map_err(Self::transport)?;

        let response = self
            .client
            .post(format!("{}/upload-image", self.base_url))
            .multipart(Form::new().part("file", part))
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read(response).await
    }

    pub async fn get_recipe(&self, recipe_id: i64) -> Result<Recipe, UiError> {
        let response = self
            .client
            .get(format!("{}/view-recipe/{}", self.base_url, recipe_id))
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read::<ViewRecipeResponse>(response)
            .await
            .map(|body| body.recipe)
    }

    pub async fn get_recipes(&self) -> Result<Vec<Recipe>, UiError> {
        let response = self
            .client
            .get(format!("{}/view-all-recipes", self.base_url))
            .send()
            .await
            .map_err(Self::transport)?;

        Self::read::<ViewAllRecipesResponse>(response)
            .await
            .map(|body| body.recipes)
    }
}
