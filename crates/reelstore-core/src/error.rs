//! Error types module
//!
//! All failures in the catalog core are unified under the `AppError` enum:
//! validation, authorization, media gateway, and persistence errors. Every
//! variant is terminal for the operation in which it occurs; no layer in this
//! workspace retries on its own.
//!
//! The `Database` variant and `From<sqlx::Error>` are gated behind the `sqlx`
//! feature so the error type can be used by crates that never touch the
//! database.

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for authorization and gateway rejections
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// Transport layers (HTTP or otherwise) map errors through this trait instead
/// of matching on variants directly.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "MEDIA_UPLOAD_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not owner: {0}")]
    NotOwner(String),

    #[error("Media upload failed: {0}")]
    UploadFailed(String),

    #[error("Blob delete failed: {0}")]
    BlobDeleteFailed(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[cfg(feature = "sqlx")]
    #[error("Database error: {0}")]
    Database(#[source] SqlxError),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(feature = "sqlx")]
impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
/// client_message stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::NotOwner(_) => (403, "NOT_OWNER", LogLevel::Warn),
        AppError::UploadFailed(_) => (502, "MEDIA_UPLOAD_FAILED", LogLevel::Warn),
        AppError::BlobDeleteFailed(_) => (502, "BLOB_DELETE_FAILED", LogLevel::Warn),
        AppError::Persistence(_) => (500, "PERSISTENCE_FAILED", LogLevel::Error),
        #[cfg(feature = "sqlx")]
        AppError::Database(_) => (500, "DATABASE_ERROR", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(ref msg) => msg.clone(),
            // NotFound/NotOwner reveal only their own label; no detail about
            // whether the record exists for some other owner.
            AppError::NotFound(_) => "Video not found".to_string(),
            AppError::NotOwner(_) => "You are not the owner of this video".to_string(),
            AppError::UploadFailed(_) => "Failed to upload media".to_string(),
            AppError::BlobDeleteFailed(_) => "Failed to delete media".to_string(),
            AppError::Persistence(_) => "Failed to save video".to_string(),
            #[cfg(feature = "sqlx")]
            AppError::Database(_) => "Failed to access database".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}
