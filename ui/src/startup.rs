use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{
    AppState,
    handlers::{
        health::live,
        recipes::{list_recipes, lookup_recipe, view_recipe},
        upload::{MAX_IMAGE_SIZE, upload_handler, upload_page},
    },
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/upload") }))
        .route("/health/live", get(live))
        .route(
            "/upload",
            get(upload_page)
                .post(upload_handler)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE)),
        )
        .route("/recipes", get(list_recipes))
        .route("/recipes/{recipe_id}", get(view_recipe))
        .route("/lookup", get(lookup_recipe))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
