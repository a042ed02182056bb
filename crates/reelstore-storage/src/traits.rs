//! Media storage gateway abstraction
//!
//! This module defines the `MediaStorage` trait that the lifecycle
//! coordinator drives. The coordinator never talks to the remote API
//! directly, which keeps it testable with in-memory gateways.

use async_trait::async_trait;
use reelstore_core::AppError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

/// Resource kind understood by the remote gateway API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Image,
    /// Audio and other non-image, non-video binaries.
    Raw,
}

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "mov", "avi"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav"];

impl MediaKind {
    /// Classify a blob by the file extension of its URL or path.
    ///
    /// The remote API requires a kind hint to locate a blob, and URLs are the
    /// only identifier stored on catalog records, so extension is the
    /// classification signal. Unknown extensions fall back to `Image`.
    pub fn from_url(url: &str) -> MediaKind {
        let extension = url
            .rsplit('.')
            .next()
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Video
        } else if AUDIO_EXTENSIONS.contains(&extension.as_str()) {
            MediaKind::Raw
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Image => "image",
            MediaKind::Raw => "raw",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A local temporary file queued for upload, with its declared kind.
///
/// The path is an explicit value validated at the boundary; the gateway
/// removes the file after the upload attempt on success and failure alike.
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub local_path: PathBuf,
    pub kind: MediaKind,
}

impl UploadSource {
    pub fn new(local_path: impl Into<PathBuf>, kind: MediaKind) -> Self {
        UploadSource {
            local_path: local_path.into(),
            kind,
        }
    }

    /// Reject empty paths before any network traffic is attempted.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.local_path.as_os_str().is_empty() {
            return Err(AppError::InvalidInput(
                "Upload file path is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn file_name(&self) -> &str {
        self.local_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
    }

    pub fn path(&self) -> &Path {
        &self.local_path
    }
}

/// Result of a successful upload: the permanent URL plus metadata the remote
/// derived from the blob (duration is populated for video uploads).
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub url: String,
    pub duration: Option<f64>,
}

/// Media storage gateway abstraction
///
/// Implementations upload local temporary files to remote blob storage and
/// delete remote blobs by URL. Deleting an empty URL is a no-op success so
/// callers need not special-case records with optional blob slots.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Upload a local file and return its permanent URL plus derived
    /// metadata. The local file is removed after the attempt regardless of
    /// outcome.
    async fn upload(&self, source: UploadSource) -> Result<UploadedMedia, AppError>;

    /// Delete the remote blob addressed by `url`. Empty/blank URLs succeed
    /// without remote traffic; a rejected remote deletion is
    /// `AppError::BlobDeleteFailed`.
    async fn delete(&self, url: &str) -> Result<(), AppError>;
}
