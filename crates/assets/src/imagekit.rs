//! ImageKit-style REST implementation of [`AssetStore`].
//!
//! Management calls (delete, list) authenticate with HTTP Basic where the
//! private key is the username and the password is empty; uploads go to a
//! separate upload host as multipart forms.

use crate::{AssetError, AssetStore, RemoteFile, UploadedAsset};

/// HTTP client for an ImageKit-compatible media API.
pub struct ImageCdnClient {
    client: reqwest::Client,
    /// Base URL of the management API, e.g. `https://api.imagekit.io`.
    api_url: String,
    /// Base URL of the upload API, e.g. `https://upload.imagekit.io`.
    upload_url: String,
    /// Private API key.
    private_key: String,
}

/// Response returned by the upload endpoint.
#[derive(Debug, serde::Deserialize)]
struct UploadResponse {
    url: String,
    #[serde(rename = "fileId")]
    file_id: String,
}

impl ImageCdnClient {
    pub fn new(api_url: String, upload_url: String, private_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            upload_url,
            private_key,
        }
    }

    /// Turn a failed response into an [`AssetError::Api`], keeping the
    /// raw body for debugging.
    async fn error_for(response: reqwest::Response) -> AssetError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        AssetError::Api { status, body }
    }
}

#[async_trait::async_trait]
impl AssetStore for ImageCdnClient {
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedAsset, AssetError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("fileName", file_name.to_string())
            .text("useUniqueFileName", "true");

        let response = self
            .client
            .post(format!("{}/api/v1/files/upload", self.upload_url))
            .basic_auth(&self.private_key, Some(""))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }

        let parsed: UploadResponse = response.json().await?;
        Ok(UploadedAsset {
            url: parsed.url,
            file_id: parsed.file_id,
        })
    }

    async fn delete(&self, file_id: &str) -> Result<(), AssetError> {
        let response = self
            .client
            .delete(format!("{}/v1/files/{file_id}", self.api_url))
            .basic_auth(&self.private_key, Some(""))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<RemoteFile>, AssetError> {
        let response = self
            .client
            .get(format!("{}/v1/files", self.api_url))
            .basic_auth(&self.private_key, Some(""))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_for(response).await);
        }
        Ok(response.json().await?)
    }
}
