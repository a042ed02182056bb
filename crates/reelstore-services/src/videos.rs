//! Media lifecycle coordinator
//!
//! Orchestrates the blob gateway and the record store for publish, update,
//! delete, and publish-toggle, and enforces ownership. Every operation is a
//! bounded one-shot sequence with a fixed ordering: existence check, then
//! ownership check, then blob side effects, then the record mutation. No
//! operation retries; every failure is terminal for that call.
//!
//! The two stores share no transaction. Known inconsistency windows:
//!
//! - publish: record creation fails after both blobs uploaded - the blobs
//!   are orphaned and the failure is surfaced as a persistence error; no
//!   automatic blob rollback is attempted.
//! - delete: thumbnail-blob deletion fails after the video blob is gone -
//!   the record survives, still referencing the deleted video blob.

use crate::catalog::{self, CatalogListing, CatalogQuery};
use reelstore_core::validation::{
    validate_required_text, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH,
};
use reelstore_core::{AppError, NewVideo, Video, VideoUpdate};
use reelstore_db::VideoStore;
use reelstore_storage::{MediaKind, MediaStorage, UploadSource};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// Inputs for publishing a new video.
#[derive(Debug, Clone)]
pub struct PublishRequest {
    pub title: String,
    pub description: String,
    pub video_file: PathBuf,
    pub thumbnail_file: PathBuf,
}

/// Inputs for updating an existing video. Title and description are always
/// required; the thumbnail is replaced only when a new file is supplied.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub title: String,
    pub description: String,
    pub new_thumbnail_file: Option<PathBuf>,
}

/// Coordinates blob and record operations for one logical action.
#[derive(Clone)]
pub struct VideoLifecycleService {
    store: Arc<dyn VideoStore>,
    media: Arc<dyn MediaStorage>,
}

impl VideoLifecycleService {
    pub fn new(store: Arc<dyn VideoStore>, media: Arc<dyn MediaStorage>) -> Self {
        Self { store, media }
    }

    /// List videos: fetch from the store, then filter/sort/paginate.
    pub async fn list_videos(
        &self,
        query: &CatalogQuery,
        owner_id: Option<Uuid>,
    ) -> Result<CatalogListing, AppError> {
        let videos = self.store.list(owner_id).await?;
        Ok(catalog::run_query(videos, query))
    }

    /// Fetch a single video by id.
    pub async fn get_video(&self, id: Uuid) -> Result<Video, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("video {}", id)))
    }

    /// Publish a new video: upload both blobs, then create the record.
    ///
    /// Duration comes from the video upload's derived metadata and the
    /// record is owned by the acting identity. A store failure after both
    /// uploads leaves the blobs orphaned (see module docs).
    #[tracing::instrument(skip(self, request), fields(owner = %owner_id))]
    pub async fn publish_video(
        &self,
        request: PublishRequest,
        owner_id: Uuid,
    ) -> Result<Video, AppError> {
        validate_required_text("title", &request.title, MAX_TITLE_LENGTH)?;
        validate_required_text("description", &request.description, MAX_DESCRIPTION_LENGTH)?;

        let video_upload = self
            .media
            .upload(UploadSource::new(request.video_file, MediaKind::Video))
            .await?;

        let thumbnail_upload = self
            .media
            .upload(UploadSource::new(request.thumbnail_file, MediaKind::Image))
            .await
            .map_err(|e| {
                tracing::warn!(
                    video_url = %video_upload.url,
                    error = %e,
                    "Thumbnail upload failed after video upload; video blob is orphaned"
                );
                e
            })?;

        self.store
            .create(NewVideo {
                owner_id,
                video_file_url: video_upload.url,
                thumbnail_url: thumbnail_upload.url,
                title: request.title,
                description: request.description,
                duration: video_upload.duration.unwrap_or(0.0),
            })
            .await
    }

    /// Update title, description, and optionally the thumbnail.
    ///
    /// When a new thumbnail is supplied the old blob is deleted first; a
    /// failed deletion aborts the whole operation before any other write so
    /// two blobs never stay live for the same slot.
    #[tracing::instrument(skip(self, request), fields(video = %id, actor = %actor_id))]
    pub async fn update_video(
        &self,
        id: Uuid,
        request: UpdateRequest,
        actor_id: Uuid,
    ) -> Result<Video, AppError> {
        validate_required_text("title", &request.title, MAX_TITLE_LENGTH)?;
        validate_required_text("description", &request.description, MAX_DESCRIPTION_LENGTH)?;

        let video = self.get_video(id).await?;
        self.check_owner(&video, actor_id)?;

        let mut update = VideoUpdate {
            title: Some(request.title),
            description: Some(request.description),
            ..VideoUpdate::default()
        };

        if let Some(thumbnail_file) = request.new_thumbnail_file {
            self.media.delete(&video.thumbnail_url).await?;

            let uploaded = self
                .media
                .upload(UploadSource::new(thumbnail_file, MediaKind::Image))
                .await?;
            update.thumbnail_url = Some(uploaded.url);
        }

        self.store
            .update_by_id(id, update)
            .await?
            .ok_or_else(|| AppError::Persistence(format!("video {} vanished during update", id)))
    }

    /// Delete a video: both blobs first, then the record.
    ///
    /// A failed video-blob deletion leaves everything untouched. A failed
    /// thumbnail-blob deletion aborts with the video blob already gone and
    /// the record intact - the documented recoverable window.
    #[tracing::instrument(skip(self), fields(video = %id, actor = %actor_id))]
    pub async fn delete_video(&self, id: Uuid, actor_id: Uuid) -> Result<Video, AppError> {
        let video = self.get_video(id).await?;
        self.check_owner(&video, actor_id)?;

        self.media.delete(&video.video_file_url).await?;

        self.media.delete(&video.thumbnail_url).await.map_err(|e| {
            tracing::error!(
                video = %id,
                video_file_url = %video.video_file_url,
                error = %e,
                "Thumbnail delete failed after video blob deletion; record kept for recovery"
            );
            e
        })?;

        self.store
            .delete_by_id(id)
            .await?
            .ok_or_else(|| AppError::Persistence(format!("video {} vanished during delete", id)))
    }

    /// Flip the published flag. No blob interaction.
    #[tracing::instrument(skip(self), fields(video = %id, actor = %actor_id))]
    pub async fn toggle_publish(&self, id: Uuid, actor_id: Uuid) -> Result<Video, AppError> {
        let video = self.get_video(id).await?;
        self.check_owner(&video, actor_id)?;

        let update = VideoUpdate {
            is_published: Some(!video.is_published),
            ..VideoUpdate::default()
        };

        self.store
            .update_by_id(id, update)
            .await?
            .ok_or_else(|| AppError::Persistence(format!("video {} vanished during toggle", id)))
    }

    /// Ownership gate: runs after the existence check and before any
    /// external side effect, so unauthorized callers never trigger storage
    /// I/O.
    fn check_owner(&self, video: &Video, actor_id: Uuid) -> Result<(), AppError> {
        if video.owner_id != actor_id {
            return Err(AppError::NotOwner(format!(
                "actor {} does not own video {}",
                actor_id, video.id
            )));
        }
        Ok(())
    }
}
