//! Domain models

pub mod video;

pub use video::{NewVideo, Video, VideoResponse, VideoUpdate};
