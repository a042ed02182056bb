//! Reelstore Storage Library
//!
//! This crate provides the media storage gateway abstraction and the hosted
//! HTTP adapter. The gateway holds the binary blobs (video files and
//! thumbnails) that catalog records reference by URL.
//!
//! # Resource kinds
//!
//! The remote API needs a resource-kind hint to locate a blob, so kinds are
//! classified from the URL's file extension: `.mp4`/`.mkv`/`.mov`/`.avi` are
//! video, `.mp3`/`.wav` are raw (audio), everything else is image. Kind
//! classification is centralized in `MediaKind` so upload and delete stay
//! consistent.

pub mod cloud;
pub mod traits;

// Re-export commonly used types
pub use cloud::CloudMediaStorage;
pub use traits::{MediaKind, MediaStorage, UploadSource, UploadedMedia};
