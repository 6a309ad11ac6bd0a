use std::sync::Arc;

use recipekit_core::application::RecipeKitService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeKitService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeKitService) -> Self {
        Self { args, service }
    }
}
