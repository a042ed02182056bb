//! Hosted media gateway adapter
//!
//! HTTP implementation of `MediaStorage` against a Cloudinary-compatible
//! API. Requests are authenticated with a signature over the sorted request
//! parameters plus the API secret. The adapter owns the declared-kind hint on
//! both upload and delete because the remote API namespaces blobs by kind.

use crate::traits::{MediaKind, MediaStorage, UploadSource, UploadedMedia};
use async_trait::async_trait;
use reelstore_core::{AppError, MediaStorageConfig};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tokio::fs;

/// Hosted HTTP media storage implementation
#[derive(Clone)]
pub struct CloudMediaStorage {
    http: reqwest::Client,
    config: MediaStorageConfig,
}

#[derive(Debug, Deserialize)]
struct UploadApiResponse {
    secure_url: String,
    #[serde(default)]
    duration: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DestroyApiResponse {
    result: String,
}

impl CloudMediaStorage {
    /// Create a new adapter from an explicit configuration value.
    pub fn new(config: MediaStorageConfig) -> Self {
        CloudMediaStorage {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint for an action on a resource kind:
    /// `{base}/{cloud_name}/{kind}/{action}`
    fn endpoint(&self, kind: MediaKind, action: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name,
            kind,
            action
        )
    }

    /// Sign request parameters: sort by name, join as `k=v` pairs with `&`,
    /// append the API secret, and hex-encode the SHA-256 digest.
    fn sign(&self, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by_key(|(name, _)| *name);

        let to_sign = sorted
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.config.api_secret.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Resolve the storage-level identifier from a blob URL: the last path
    /// segment with its extension stripped.
    fn public_id_from_url(url: &str) -> Option<String> {
        let last_segment = url.trim_end_matches('/').rsplit('/').next()?;
        if last_segment.is_empty() {
            return None;
        }
        let public_id = match last_segment.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem,
            _ => last_segment,
        };
        Some(public_id.to_string())
    }

    async fn attempt_upload(&self, source: &UploadSource) -> Result<UploadedMedia, AppError> {
        source.validate()?;

        let data = fs::read(source.path()).await.map_err(|e| {
            AppError::UploadFailed(format!(
                "Failed to read local file {}: {}",
                source.path().display(),
                e
            ))
        })?;

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("timestamp", timestamp.clone())]);

        let file_part = reqwest::multipart::Part::bytes(data)
            .file_name(source.file_name().to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature);

        let response = self
            .http
            .post(self.endpoint(source.kind, "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::UploadFailed(format!("Upload request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UploadFailed(format!(
                "Gateway rejected upload with status {}: {}",
                status, body
            )));
        }

        let parsed: UploadApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::UploadFailed(format!("Invalid upload response: {}", e)))?;

        Ok(UploadedMedia {
            url: parsed.secure_url,
            duration: parsed.duration,
        })
    }
}

#[async_trait]
impl MediaStorage for CloudMediaStorage {
    async fn upload(&self, source: UploadSource) -> Result<UploadedMedia, AppError> {
        let start = std::time::Instant::now();
        let result = self.attempt_upload(&source).await;

        // The local temp file is removed on success and failure alike.
        if let Err(e) = fs::remove_file(source.path()).await {
            tracing::debug!(
                path = %source.path().display(),
                error = %e,
                "Could not remove local upload file"
            );
        }

        match &result {
            Ok(uploaded) => {
                tracing::info!(
                    url = %uploaded.url,
                    kind = %source.kind,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Media upload successful"
                );
            }
            Err(e) => {
                tracing::error!(
                    path = %source.path().display(),
                    kind = %source.kind,
                    error = %e,
                    "Media upload failed"
                );
            }
        }

        result
    }

    async fn delete(&self, url: &str) -> Result<(), AppError> {
        // Records with nothing in a blob slot have nothing to delete.
        if url.trim().is_empty() {
            return Ok(());
        }

        let public_id = Self::public_id_from_url(url).ok_or_else(|| {
            AppError::BlobDeleteFailed(format!("Could not resolve storage id from url: {}", url))
        })?;
        let kind = MediaKind::from_url(url);

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[
            ("public_id", public_id.clone()),
            ("timestamp", timestamp.clone()),
        ]);

        let response = self
            .http
            .post(self.endpoint(kind, "destroy"))
            .form(&[
                ("public_id", public_id.as_str()),
                ("api_key", self.config.api_key.as_str()),
                ("timestamp", timestamp.as_str()),
                ("signature", signature.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::BlobDeleteFailed(format!("Delete request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BlobDeleteFailed(format!(
                "Gateway rejected delete with status {}: {}",
                status, body
            )));
        }

        let parsed: DestroyApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::BlobDeleteFailed(format!("Invalid delete response: {}", e)))?;

        if parsed.result != "ok" {
            return Err(AppError::BlobDeleteFailed(format!(
                "Gateway reported '{}' deleting {}",
                parsed.result, url
            )));
        }

        tracing::info!(url = %url, kind = %kind, "Media delete successful");
        Ok(())
    }
}
