use std::path::PathBuf;

use crate::domain::recipe::ports::{GenerationClient, RecipeRepository};

/// Holds the injected collaborators. Operations are implemented per domain
/// (see `domain::recipe::services`).
#[derive(Clone)]
pub struct Service<G, RR>
where
    G: GenerationClient,
    RR: RecipeRepository,
{
    pub(crate) generation_client: G,
    pub(crate) recipe_repository: RR,
    pub(crate) upload_dir: PathBuf,
}

impl<G, RR> Service<G, RR>
where
    G: GenerationClient,
    RR: RecipeRepository,
{
    pub fn new(generation_client: G, recipe_repository: RR, upload_dir: PathBuf) -> Self {
        Self {
            generation_client,
            recipe_repository,
            upload_dir,
        }
    }
}
