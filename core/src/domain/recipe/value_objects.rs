#[derive(Debug, Clone)]
pub struct IngestImageInput {
    pub file_name: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy)]
pub struct GetRecipeInput {
    pub recipe_id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub id: Option<i64>,
}

impl RecipeFilter {
    pub fn by_id(id: i64) -> Self {
        Self { id: Some(id) }
    }
}
