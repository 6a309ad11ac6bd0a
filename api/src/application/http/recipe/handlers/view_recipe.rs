use axum::extract::{Path, State};
use recipekit_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GetRecipeInput,
};
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
pub struct ViewRecipeResponse {
    pub recipe: Recipe,
}

#[utoipa::path(
    get,
    path = "/view-recipe/{recipe_id}",
    tag = "recipe",
    summary = "Get recipe",
    params(
        ("recipe_id" = i64, Path, description = "Store-assigned recipe id"),
    ),
    responses(
        (status = 200, body = ViewRecipeResponse),
        (status = 404, description = "Recipe not found", body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn view_recipe(
    Path(recipe_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response<ViewRecipeResponse>, ApiError> {
    let recipe = state
        .service
        .get_recipe(GetRecipeInput { recipe_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ViewRecipeResponse { recipe }))
}
