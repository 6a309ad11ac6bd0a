#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use recipekit_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

pub const GENERATED_RECIPE: &str = r#"{
    "title": "Banana apple crumble",
    "description": "Warm fruit baked under an oat topping",
    "making_time": "45 minutes",
    "number_of_people_servings": "4",
    "ingredients": ["2 bananas", "2 apples", "100g oats"],
    "instructions_to_make": ["Slice the fruit", "Cover with oats", "Bake for 30 minutes"]
}"#;

pub struct TestApp {
    pub server: TestServer,
    pub gemini: MockServer,
    pub supabase: MockServer,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_root_path("").await
    }

    pub async fn spawn_with_root_path(root_path: &str) -> Self {
        let gemini = MockServer::start().await;
        let supabase = MockServer::start().await;
        let upload_dir = tempfile::tempdir().unwrap();

        let args = Args::try_parse_from([
            "recipekit-api",
            "--gemini-api-key",
            "test-key",
            "--gemini-base-url",
            gemini.uri().as_str(),
            "--supabase-url",
            supabase.uri().as_str(),
            "--supabase-key",
            "service-key",
            "--upload-dir",
            upload_dir.path().to_str().unwrap(),
            "--server-root-path",
            root_path,
        ])
        .unwrap();

        let app_state = state(Arc::new(args)).await.unwrap();
        let server = TestServer::new(router(app_state).unwrap()).unwrap();

        Self {
            server,
            gemini,
            supabase,
            upload_dir,
        }
    }

    /// Accepts the resumable media upload and answers `generateContent` with `text`.
    pub async fn mock_generation(&self, text: &str) {
        let session_url = format!("{}/upload-session/1", self.gemini.uri());

        Mock::given(method("POST"))
            .and(path("/upload/v1beta/files"))
            .respond_with(
                ResponseTemplate::new(200).insert_header("x-goog-upload-url", session_url),
            )
            .mount(&self.gemini)
            .await;

        Mock::given(method("POST"))
            .and(path("/upload-session/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "file": {
                    "uri": "https://files.example/files/crumble",
                    "mimeType": "image/png"
                }
            })))
            .mount(&self.gemini)
            .await;

        Mock::given(method("POST"))
            .and(path_regex(r"^/v1beta/models/.+:generateContent$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            })))
            .mount(&self.gemini)
            .await;
    }

    pub fn upload_dir_is_empty(&self) -> bool {
        std::fs::read_dir(self.upload_dir.path())
            .unwrap()
            .next()
            .is_none()
    }
}

pub fn recipe_row(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "file_id": "0b7c7c0e-8f39-4d5c-b8a1-3c3c1a9b2f10",
        "file_name": "crumble.png",
        "recipe_title": title,
        "recipe_description": "Warm fruit baked under an oat topping",
        "recipe_ingredients": ["2 bananas", "2 apples", "100g oats"],
        "recipe_making_time": "45 minutes",
        "recipe_instructions_to_make": ["Slice the fruit", "Cover with oats", "Bake for 30 minutes"],
        "recipe_number_of_people_servings": "4"
    })
}
