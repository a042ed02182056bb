//! Catalog query engine
//!
//! Pure functions over an already-fetched collection of records; no I/O.
//! Composition is strictly filter, then sort, then paginate: filtering
//! changes the index space that pagination slices, so no other order is
//! equivalent in general.

use reelstore_core::Video;

/// Field a catalog listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Duration,
    Views,
    CreatedAt,
}

impl SortKey {
    /// Parse a client-supplied sort key. Unknown keys yield `None`, which
    /// leaves the listing in fetch order.
    pub fn parse(s: &str) -> Option<SortKey> {
        match s {
            "title" => Some(SortKey::Title),
            "duration" => Some(SortKey::Duration),
            "views" => Some(SortKey::Views),
            "createdAt" | "created_at" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `"asc"` sorts ascending; any other value sorts descending.
    pub fn parse(s: &str) -> SortDirection {
        if s.eq_ignore_ascii_case("asc") {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// Parameters of one listing request. `page` is 1-based.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub sort_by: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
    pub page: usize,
    pub limit: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            search: None,
            sort_by: None,
            sort_direction: None,
            page: 1,
            limit: 10,
        }
    }
}

/// Listing result. `NoVideos` distinguishes an empty catalog from a page
/// beyond the end of a non-empty one (`Page` with an empty vec).
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogListing {
    NoVideos,
    Page(Vec<Video>),
}

/// Run a full catalog query: filter by title, sort, paginate.
pub fn run_query(videos: Vec<Video>, query: &CatalogQuery) -> CatalogListing {
    if videos.is_empty() {
        return CatalogListing::NoVideos;
    }

    let mut videos = match query.search.as_deref() {
        Some(search) if !search.is_empty() => filter_by_title(videos, search),
        _ => videos,
    };

    // Sort only when both key and direction were supplied.
    if let (Some(key), Some(direction)) = (query.sort_by, query.sort_direction) {
        sort_videos(&mut videos, key, direction);
    }

    CatalogListing::Page(paginate(videos, query.page, query.limit))
}

/// Retain records whose title contains `search` case-insensitively.
pub fn filter_by_title(videos: Vec<Video>, search: &str) -> Vec<Video> {
    let needle = search.to_lowercase();
    videos
        .into_iter()
        .filter(|video| video.title.to_lowercase().contains(&needle))
        .collect()
}

/// Stable sort by the named field. Numeric fields compare numerically, text
/// lexicographically.
pub fn sort_videos(videos: &mut [Video], key: SortKey, direction: SortDirection) {
    videos.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Duration => a.duration.total_cmp(&b.duration),
            SortKey::Views => a.views.cmp(&b.views),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Return the 1-based `page` of size `limit`. A page beyond the data yields
/// an empty vec, never an error.
pub fn paginate(videos: Vec<Video>, page: usize, limit: usize) -> Vec<Video> {
    let start = page.saturating_sub(1).saturating_mul(limit);
    videos.into_iter().skip(start).take(limit).collect()
}
