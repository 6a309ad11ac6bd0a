use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::UiError,
    pages::{RecipeDetailPage, RecipeListPage},
};

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub id: String,
}

pub async fn list_recipes(State(state): State<AppState>) -> Result<Html<String>, UiError> {
    let page = match state.api_client.get_recipes().await {
        Ok(recipes) => RecipeListPage {
            current_page: "recipes",
            recipes,
            error: None,
        },
        Err(e) => RecipeListPage {
            current_page: "recipes",
            recipes: Vec::new(),
            error: Some(e.to_string()),
        },
    };

    Ok(Html(page.render()?))
}

pub async fn view_recipe(
    Path(recipe_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, UiError> {
    let recipe_id = match parse_recipe_id(&recipe_id) {
        Ok(id) => id,
        Err(page) => return Ok(Html(page.render()?)),
    };

    let page = match state.api_client.get_recipe(recipe_id).await {
        Ok(recipe) => RecipeDetailPage {
            current_page: "recipe",
            recipe: Some(recipe),
            error: None,
        },
        Err(e) => RecipeDetailPage {
            current_page: "recipe",
            recipe: None,
            error: Some(e.to_string()),
        },
    };

    Ok(Html(page.render()?))
}

/// Target of the navigation lookup form.
pub async fn lookup_recipe(Query(query): Query<LookupQuery>) -> Result<Response, UiError> {
    match parse_recipe_id(&query.id) {
        Ok(id) => Ok(Redirect::to(&format!("/recipes/{}", id)).into_response()),
        Err(page) => Ok(Html(page.render()?).into_response()),
    }
}

fn parse_recipe_id(raw: &str) -> Result<i64, RecipeDetailPage> {
    raw.trim().parse::<i64>().map_err(|_| RecipeDetailPage {
        current_page: "recipe",
        recipe: None,
        error: Some(format!("'{}' is not a valid recipe ID", raw)),
    })
}
