use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog record for one uploaded video.
///
/// Both blob URLs are non-empty for as long as the record exists; the blobs
/// are uploaded before the record is created or updated to reference them.
/// `duration` is derived from the video blob at publish time and never set by
/// a client. `views` is owned by the viewing subsystem and never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Video {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub video_file_url: String,
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-time fields for a video record. `id`, `views`, `is_published` and
/// the timestamps are assigned by the record store.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub owner_id: Uuid,
    pub video_file_url: String,
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
}

/// Partial update applied by the record store. `None` fields are left
/// untouched; `updated_at` is bumped by the store on every update.
#[derive(Debug, Clone, Default)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_published: Option<bool>,
}

/// Client-facing representation of a video record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub video_file_url: String,
    pub thumbnail_url: String,
    pub title: String,
    pub description: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            owner_id: video.owner_id,
            video_file_url: video.video_file_url,
            thumbnail_url: video.thumbnail_url,
            title: video.title,
            description: video.description,
            duration: video.duration,
            views: video.views,
            is_published: video.is_published,
            created_at: video.created_at,
        }
    }
}
