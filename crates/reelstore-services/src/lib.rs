//! Reelstore Services Library
//!
//! This crate hosts the two pieces with real logic in the catalog:
//!
//! - `catalog` - the query engine: pure filter/sort/paginate over an
//!   already-fetched collection of video records.
//! - `videos` - the media lifecycle coordinator: publish, update, delete,
//!   and publish-toggle orchestration across the blob gateway and the
//!   record store, with ownership enforcement.

pub mod catalog;
pub mod videos;

pub use catalog::{CatalogListing, CatalogQuery, SortDirection, SortKey};
pub use videos::{PublishRequest, UpdateRequest, VideoLifecycleService};
