//! Shared test doubles: a scripted media gateway and an in-memory record
//! store. Both record their calls so tests can assert on side effects.

use async_trait::async_trait;
use chrono::Utc;
use reelstore_core::{AppError, NewVideo, Video, VideoUpdate};
use reelstore_db::VideoStore;
use reelstore_storage::{MediaKind, MediaStorage, UploadSource, UploadedMedia};
use std::path::PathBuf;
use std::sync::{Mutex, Once};
use uuid::Uuid;

static TRACING: Once = Once::new();

#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// In-memory media gateway. Uploads resolve to `https://cdn.test/{filename}`
/// with duration 42.0 for video kind; failures are scripted by path/url
/// substring.
#[derive(Default)]
pub struct FakeMediaStorage {
    pub uploads: Mutex<Vec<(PathBuf, MediaKind)>>,
    /// Every delete call, attempted before the scripted failure check.
    pub deletes: Mutex<Vec<String>>,
    pub fail_upload_containing: Mutex<Option<String>>,
    pub fail_delete_containing: Mutex<Option<String>>,
}

impl FakeMediaStorage {
    pub fn fail_uploads_containing(&self, needle: &str) {
        *self.fail_upload_containing.lock().unwrap() = Some(needle.to_string());
    }

    pub fn fail_deletes_containing(&self, needle: &str) {
        *self.fail_delete_containing.lock().unwrap() = Some(needle.to_string());
    }

    /// Total gateway calls of any kind (for "no storage I/O" assertions).
    pub fn call_count(&self) -> usize {
        self.uploads.lock().unwrap().len() + self.deletes.lock().unwrap().len()
    }

    pub fn deleted_urls(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStorage for FakeMediaStorage {
    async fn upload(&self, source: UploadSource) -> Result<UploadedMedia, AppError> {
        let path = source.local_path.clone();
        let path_str = path.to_string_lossy().to_string();
        self.uploads.lock().unwrap().push((path, source.kind));

        if let Some(needle) = self.fail_upload_containing.lock().unwrap().as_deref() {
            if path_str.contains(needle) {
                return Err(AppError::UploadFailed(format!(
                    "scripted upload failure for {}",
                    path_str
                )));
            }
        }

        let duration = match source.kind {
            MediaKind::Video => Some(42.0),
            _ => None,
        };
        Ok(UploadedMedia {
            url: format!("https://cdn.test/{}", source.file_name()),
            duration,
        })
    }

    async fn delete(&self, url: &str) -> Result<(), AppError> {
        if url.trim().is_empty() {
            return Ok(());
        }
        self.deletes.lock().unwrap().push(url.to_string());

        if let Some(needle) = self.fail_delete_containing.lock().unwrap().as_deref() {
            if url.contains(needle) {
                return Err(AppError::BlobDeleteFailed(format!(
                    "scripted delete failure for {}",
                    url
                )));
            }
        }
        Ok(())
    }
}

/// In-memory record store preserving insertion order, mirroring the store
/// defaults: views 0, is_published true, timestamps at creation.
#[derive(Default)]
pub struct MemoryVideoStore {
    pub videos: Mutex<Vec<Video>>,
}

impl MemoryVideoStore {
    pub fn snapshot(&self) -> Vec<Video> {
        self.videos.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn create(&self, video: NewVideo) -> Result<Video, AppError> {
        let now = Utc::now();
        let record = Video {
            id: Uuid::new_v4(),
            owner_id: video.owner_id,
            video_file_url: video.video_file_url,
            thumbnail_url: video.thumbnail_url,
            title: video.title,
            description: video.description,
            duration: video.duration,
            views: 0,
            is_published: true,
            created_at: now,
            updated_at: now,
        };
        self.videos.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        Ok(self
            .videos
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        update: VideoUpdate,
    ) -> Result<Option<Video>, AppError> {
        let mut videos = self.videos.lock().unwrap();
        let Some(video) = videos.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };
        if let Some(title) = update.title {
            video.title = title;
        }
        if let Some(description) = update.description {
            video.description = description;
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            video.thumbnail_url = thumbnail_url;
        }
        if let Some(is_published) = update.is_published {
            video.is_published = is_published;
        }
        video.updated_at = Utc::now();
        Ok(Some(video.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let mut videos = self.videos.lock().unwrap();
        let index = videos.iter().position(|v| v.id == id);
        Ok(index.map(|i| videos.remove(i)))
    }

    async fn list(&self, owner_id: Option<Uuid>) -> Result<Vec<Video>, AppError> {
        let videos = self.videos.lock().unwrap();
        Ok(videos
            .iter()
            .filter(|v| owner_id.map_or(true, |owner| v.owner_id == owner))
            .cloned()
            .collect())
    }
}
