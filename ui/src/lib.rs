pub mod args;
pub mod client;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod startup;

use client::RecipeApiClient;

#[derive(Clone)]
pub struct AppState {
    pub api_client: RecipeApiClient,
}

impl AppState {
    pub fn new(api_client: RecipeApiClient) -> Self {
        Self { api_client }
    }
}
