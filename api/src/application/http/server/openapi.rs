use utoipa::OpenApi;

use crate::application::http::{health::__path_live, recipe::router::RecipeApiDoc};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "recipekit API",
        description = "Turns food images into stored recipes"
    ),
    paths(live),
    tags(
        (name = "recipe", description = "Recipe generation and lookup"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Document covering every route of the server.
    pub fn full() -> utoipa::openapi::OpenApi {
        ApiDoc::openapi().merge_from(RecipeApiDoc::openapi())
    }
}
