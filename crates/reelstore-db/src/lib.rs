//! Reelstore DB Library
//!
//! This crate provides the video record store: the `VideoStore` trait the
//! lifecycle coordinator depends on, and its Postgres implementation. The
//! schema lives in `migrations/` and is applied with `sqlx::migrate!`.

pub mod videos;

pub use videos::{PgVideoStore, VideoStore};

/// Embedded migrations for the videos schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
