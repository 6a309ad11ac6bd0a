use askama::Template;
use recipekit_core::domain::recipe::entities::Recipe;

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadPage {
    pub current_page: &'static str,
    /// `data:` URI of the submitted image
    pub preview: Option<String>,
    pub recipe: Option<Recipe>,
    pub error: Option<String>,
}

impl Default for UploadPage {
    fn default() -> Self {
        Self {
            current_page: "upload",
            preview: None,
            recipe: None,
            error: None,
        }
    }
}

#[derive(Template)]
#[template(path = "list.html")]
pub struct RecipeListPage {
    pub current_page: &'static str,
    pub recipes: Vec<Recipe>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct RecipeDetailPage {
    pub current_page: &'static str,
    pub recipe: Option<Recipe>,
    pub error: Option<String>,
}
