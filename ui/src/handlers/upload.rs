use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::Html,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::{error, info};

use crate::{AppState, error::UiError, pages::UploadPage};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

struct SelectedImage {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

pub async fn upload_page() -> Result<Html<String>, UiError> {
    Ok(Html(UploadPage::default().render()?))
}

pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, UiError> {
    let mut image: Option<SelectedImage> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read multipart field: {}", e);
                return render_error(format!("An error occurred: {}", e));
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        match field.bytes().await {
            Ok(bytes) if !bytes.is_empty() => {
                image = Some(SelectedImage {
                    file_name,
                    content_type,
                    data: bytes.to_vec(),
                });
            }
            Ok(_) => {}
            Err(e) => {
                error!("Failed to read file {}: {}", file_name, e);
                return render_error(format!("An error occurred: {}", e));
            }
        }
    }

    let Some(image) = image else {
        return render_error("Please choose an image to upload.".to_string());
    };

    let preview = format!(
        "data:{};base64,{}",
        image.content_type,
        STANDARD.encode(&image.data)
    );

    let page = match state
        .api_client
        .upload_image(image.file_name.clone(), &image.content_type, image.data)
        .await
    {
        Ok(response) => {
            info!(recipe_id = response.data.id, file_name = %image.file_name, "Recipe generated");
            UploadPage {
                preview: Some(preview),
                recipe: Some(response.data),
                ..UploadPage::default()
            }
        }
        Err(UiError::Api { detail, .. }) => UploadPage {
            preview: Some(preview),
            error: Some(format!("Error generating recipe: {}", detail)),
            ..UploadPage::default()
        },
        Err(e) => UploadPage {
            preview: Some(preview),
            error: Some(e.to_string()),
            ..UploadPage::default()
        },
    };

    Ok(Html(page.render()?))
}

fn render_error(message: String) -> Result<Html<String>, UiError> {
    let page = UploadPage {
        error: Some(message),
        ..UploadPage::default()
    };

    Ok(Html(page.render()?))
}
