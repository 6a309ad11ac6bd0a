use axum::extract::State;
use recipekit_core::domain::recipe::{entities::Recipe, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViewAllRecipesResponse {
    pub recipes: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "/view-all-recipes",
    tag = "recipe",
    summary = "List recipes",
    description = "Returns every stored recipe in store order.",
    responses(
        (status = 200, body = ViewAllRecipesResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn view_all_recipes(
    State(state): State<AppState>,
) -> Result<Response<ViewAllRecipesResponse>, ApiError> {
    let recipes = state.service.get_recipes().await.map_err(ApiError::from)?;

    Ok(Response::OK(ViewAllRecipesResponse { recipes }))
}
