pub mod supabase_recipe_repository;

pub use supabase_recipe_repository::SupabaseRecipeRepository;
