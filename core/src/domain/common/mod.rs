use std::path::PathBuf;

use uuid::Uuid;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeKitConfig {
    pub llm: LLMConfig,
    pub document_store: DocumentStoreConfig,
    pub upload_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
}

#[derive(Clone, Debug)]
pub struct DocumentStoreConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
}

pub fn generate_file_id() -> Uuid {
    Uuid::new_v4()
}
