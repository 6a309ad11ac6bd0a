pub mod upload_image;
pub mod view_all_recipes;
pub mod view_recipe;
