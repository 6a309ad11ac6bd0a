use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use utoipa::OpenApi;

use crate::application::http::server::app_state::AppState;

use super::handlers::{
    upload_image::{__path_upload_image, MAX_IMAGE_SIZE, upload_image},
    view_all_recipes::{__path_view_all_recipes, view_all_recipes},
    view_recipe::{__path_view_recipe, view_recipe},
};

#[derive(OpenApi)]
#[openapi(paths(upload_image, view_recipe, view_all_recipes))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/upload-image", state.args.server.root_path),
            post(upload_image).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE)),
        )
        .route(
            &format!("{}/view-recipe/{{recipe_id}}", state.args.server.root_path),
            get(view_recipe),
        )
        .route(
            &format!("{}/view-all-recipes", state.args.server.root_path),
            get(view_all_recipes),
        )
}
