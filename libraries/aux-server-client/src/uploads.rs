//! Image upload and deletion.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::client::AuxClient;
use crate::error::{ClientError, Result};
use crate::request::{PartKind, PartSpec, RequestSpec};
use crate::types::{DeleteFileRequest, ImageUploadResponse};

/// Storage endpoints of the Aux backend.
pub struct UploadsClient<'a> {
    client: &'a AuxClient,
}

impl<'a> UploadsClient<'a> {
    pub(crate) fn new(client: &'a AuxClient) -> Self {
        Self { client }
    }

    /// Upload an image file.
    ///
    /// The file is buffered in memory so the retry protocols can resend
    /// the same bytes; profile and post images are small.
    pub async fn upload_image(&self, file_path: &Path) -> Result<ImageUploadResponse> {
        if !file_path.exists() {
            return Err(ClientError::FileNotFound(file_path.display().to_string()));
        }

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        debug!(file = %file_path.display(), "Uploading image");

        let mut file = File::open(file_path).await?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).await?;

        let file_size = contents.len();
        let part = PartSpec {
            name: "file".to_string(),
            kind: PartKind::Bytes {
                bytes: contents,
                file_name: file_name.clone(),
                mime: mime_type_for_image(file_path).to_string(),
            },
        };

        let spec = RequestSpec::post("/storage/upload/image").multipart(vec![part]);
        let response: ImageUploadResponse = self.client.execute(spec).await?;

        info!(file = %file_name, size = file_size, url = %response.url, "Image uploaded");
        Ok(response)
    }

    /// Delete an uploaded file by bucket path.
    pub async fn delete_file(&self, path: &str, bucket: &str) -> Result<()> {
        let body = DeleteFileRequest {
            path: path.to_string(),
            bucket: bucket.to_string(),
        };
        let spec = RequestSpec::delete("/storage/delete").json_of(&body)?;
        self.client.execute_unit(spec).await
    }
}

fn mime_type_for_image(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        _ => "application/octet-stream",
    }
}
