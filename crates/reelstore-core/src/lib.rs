//! Reelstore Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! validation shared across all Reelstore components.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::MediaStorageConfig;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{NewVideo, Video, VideoResponse, VideoUpdate};
