//! Video record repository
//!
//! `VideoStore` is the seam between the lifecycle coordinator and durable
//! storage; `PgVideoStore` is the Postgres implementation. Updates are
//! single-statement read-modify-write at the row level, so concurrent
//! conflicting updates resolve last-writer-wins.

use async_trait::async_trait;
use chrono::Utc;
use reelstore_core::{AppError, NewVideo, Video, VideoUpdate};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Durable keyed storage for video records.
///
/// `update_by_id` and `delete_by_id` return `Ok(None)` when the id does not
/// resolve to a record; the caller decides whether that is `NotFound` or a
/// mid-operation persistence failure.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn create(&self, video: NewVideo) -> Result<Video, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    async fn update_by_id(&self, id: Uuid, update: VideoUpdate)
        -> Result<Option<Video>, AppError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError>;

    /// List records in insertion order, optionally restricted to one owner.
    async fn list(&self, owner_id: Option<Uuid>) -> Result<Vec<Video>, AppError>;
}

/// Postgres-backed video record store
#[derive(Clone)]
pub struct PgVideoStore {
    pool: PgPool,
}

impl PgVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgVideoStore {
    #[tracing::instrument(skip(self, video), fields(db.table = "videos", db.operation = "insert"))]
    async fn create(&self, video: NewVideo) -> Result<Video, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let row: Video = sqlx::query_as::<Postgres, Video>(
            r#"
            INSERT INTO videos (
                id, owner_id, video_file_url, thumbnail_url,
                title, description, duration, views, is_published,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, TRUE, $8, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(video.owner_id)
        .bind(&video.video_file_url)
        .bind(&video.thumbnail_url)
        .bind(&video.title)
        .bind(&video.description)
        .bind(video.duration)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let row: Option<Video> =
            sqlx::query_as::<Postgres, Video>("SELECT * FROM videos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self, update), fields(db.table = "videos", db.operation = "update"))]
    async fn update_by_id(
        &self,
        id: Uuid,
        update: VideoUpdate,
    ) -> Result<Option<Video>, AppError> {
        let row: Option<Video> = sqlx::query_as::<Postgres, Video>(
            r#"
            UPDATE videos
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                thumbnail_url = COALESCE($4, thumbnail_url),
                is_published = COALESCE($5, is_published),
                updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(update.title)
        .bind(update.description)
        .bind(update.thumbnail_url)
        .bind(update.is_published)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "delete"))]
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<Video>, AppError> {
        let row: Option<Video> =
            sqlx::query_as::<Postgres, Video>("DELETE FROM videos WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row)
    }

    async fn list(&self, owner_id: Option<Uuid>) -> Result<Vec<Video>, AppError> {
        let rows: Vec<Video> = sqlx::query_as::<Postgres, Video>(
            r#"
            SELECT * FROM videos
            WHERE $1::uuid IS NULL OR owner_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
