use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::recipe::entities::{NewRecipe, Recipe};

/// Row of the `recipes` table as returned by PostgREST.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeRow {
    pub id: i64,
    pub file_id: String,
    pub file_name: String,
    pub recipe_title: String,
    pub recipe_description: String,
    pub recipe_ingredients: Vec<String>,
    pub recipe_making_time: String,
    pub recipe_instructions_to_make: Vec<String>,
    pub recipe_number_of_people_servings: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload; `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, Serialize)]
pub struct InsertRecipeRow {
    pub file_id: String,
    pub file_name: String,
    pub recipe_title: String,
    pub recipe_description: String,
    pub recipe_ingredients: Vec<String>,
    pub recipe_making_time: String,
    pub recipe_instructions_to_make: Vec<String>,
    pub recipe_number_of_people_servings: String,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Self {
            id: row.id,
            file_id: row.file_id,
            file_name: row.file_name,
            title: row.recipe_title,
            description: row.recipe_description,
            ingredients: row.recipe_ingredients,
            making_time: row.recipe_making_time,
            instructions: row.recipe_instructions_to_make,
            servings: row.recipe_number_of_people_servings,
            created_at: row.created_at,
        }
    }
}

impl From<NewRecipe> for InsertRecipeRow {
    fn from(recipe: NewRecipe) -> Self {
        Self {
            file_id: recipe.file_id.to_string(),
            file_name: recipe.file_name,
            recipe_title: recipe.title,
            recipe_description: recipe.description,
            recipe_ingredients: recipe.ingredients,
            recipe_making_time: recipe.making_time,
            recipe_instructions_to_make: recipe.instructions,
            recipe_number_of_people_servings: recipe.servings,
        }
    }
}
