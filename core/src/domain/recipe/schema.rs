use serde_json::json;

pub const RECIPE_PROMPT: &str = "Generate a recipe using the identified items in the image. \
Consider the ingredients and suggest a recipe with a title, description, preparation time, \
serving size, ingredients list, and detailed instructions.";

/// Returns the JSON schema for recipe generation responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "description": { "type": "string" },
            "making_time": { "type": "string" },
            "number_of_people_servings": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            },
            "instructions_to_make": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": [
            "title", "description", "making_time",
            "number_of_people_servings", "ingredients", "instructions_to_make"
        ]
    })
}
