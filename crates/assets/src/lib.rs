//! Client for the remote image CDN that hosts project hero images.
//!
//! The API layer talks to the CDN through the [`AssetStore`] trait so
//! integration tests can substitute a stub; [`ImageCdnClient`] is the
//! production implementation.

mod imagekit;

pub use imagekit::ImageCdnClient;

use serde::{Deserialize, Serialize};

/// Reference to an uploaded asset: the public URL plus the handle needed
/// to delete it later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedAsset {
    pub url: String,
    pub file_id: String,
}

/// A file entry from the CDN's listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteFile {
    #[serde(rename = "fileId")]
    pub file_id: String,
    pub url: String,
    pub name: String,
    #[serde(rename = "fileType", default)]
    pub file_type: Option<String>,
}

/// Errors from the asset host.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The CDN returned a non-2xx status code.
    #[error("asset host error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Remote storage for project hero images.
#[async_trait::async_trait]
pub trait AssetStore: Send + Sync {
    /// Upload a file, returning its public URL and delete handle.
    async fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedAsset, AssetError>;

    /// Delete a previously uploaded file.
    async fn delete(&self, file_id: &str) -> Result<(), AssetError>;

    /// List every file stored on the CDN.
    async fn list_all(&self) -> Result<Vec<RemoteFile>, AssetError>;
}
