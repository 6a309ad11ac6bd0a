use std::path::Path;

use reqwest::{
    Client, Response,
    header::{CONTENT_LENGTH, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::MediaReference, ports::GenerationClient},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    FileData { file_data: FileData },
}

#[derive(Debug, Serialize)]
struct FileData {
    mime_type: String,
    file_uri: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct StartUploadRequest<'a> {
    file: UploadMetadata<'a>,
}

#[derive(Debug, Serialize)]
struct UploadMetadata<'a> {
    display_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    file: UploadedFile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadedFile {
    uri: String,
    #[serde(default)]
    mime_type: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String, base_url: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn ensure_success(response: Response, context: &str) -> Result<Response, CoreError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        tracing::error!("Gemini {} error: {} - {}", context, status, error_text);
        Err(CoreError::GenerationError(format!(
            "LLM {} returned error: {} - {}",
            context, status, error_text
        )))
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // the URL carries the API key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::GenerationError(format!("LLM API error: {}", e))
            })?;

        let response = Self::ensure_success(response, "API").await?;

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::GenerationError(format!("Failed to parse LLM response: {}", e))
        })?;

        gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| CoreError::GenerationError("No response from LLM".to_string()))
    }
}

impl GenerationClient for GeminiLLMClient {
    /// Resumable upload to the Gemini File API: a `start` request returns the
    /// session URL, then the bytes are sent with `upload, finalize`.
    async fn upload_media(
        &self,
        path: &Path,
        mime_type: &str,
        display_name: &str,
    ) -> Result<MediaReference, CoreError> {
        let payload = tokio::fs::read(path).await.map_err(|e| {
            tracing::error!(path = %path.display(), "Failed to read upload: {}", e);
            CoreError::TransientFileError(format!("Failed to read transient file: {}", e))
        })?;

        let start_url = format!("{}/upload/v1beta/files?key={}", self.base_url, self.api_key);

        let response = self
            .client
            .post(&start_url)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", payload.len())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&StartUploadRequest {
                file: UploadMetadata { display_name },
            })
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini upload request failed: {}", e);
                CoreError::GenerationError(format!("LLM upload error: {}", e))
            })?;

        let response = Self::ensure_success(response, "upload").await?;

        let upload_url = response
            .headers()
            .get("x-goog-upload-url")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
            .ok_or_else(|| {
                CoreError::GenerationError("LLM upload did not return a session URL".to_string())
            })?;

        let response = self
            .client
            .post(&upload_url)
            .header(CONTENT_LENGTH, payload.len())
            .header(CONTENT_TYPE, mime_type)
            .header("X-Goog-Upload-Offset", 0)
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini upload transfer failed: {}", e);
                CoreError::GenerationError(format!("LLM upload error: {}", e))
            })?;

        let response = Self::ensure_success(response, "upload").await?;

        let uploaded: UploadResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse Gemini upload response: {}", e);
            CoreError::GenerationError(format!("Failed to parse LLM upload response: {}", e))
        })?;

        Ok(MediaReference {
            uri: uploaded.file.uri,
            mime_type: uploaded
                .file
                .mime_type
                .unwrap_or_else(|| mime_type.to_string()),
        })
    }

    async fn generate_with_media(
        &self,
        prompt: String,
        media: MediaReference,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text { text: prompt },
                    Part::FileData {
                        file_data: FileData {
                            mime_type: media.mime_type,
                            file_uri: media.uri,
                        },
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}
