//! Domain types for the media catalog.
//!
//! This module contains the core data structures:
//! - ContentItem: shared fields and validation
//! - Content / Downloadable: behavior contracts
//! - VideoLecture, PodcastEpisode: concrete variants
//! - Media: the closed set of variants a catalog holds

pub mod capability;
pub mod item;
pub mod media;
pub mod podcast;
pub mod video;

// Re-export commonly used types
pub use capability::{Content, Downloadable, FRESH_AGE_LIMIT};
pub use item::{current_year, ContentId, ContentItem, IdSequence, InvalidArgument, MIN_YEAR};
pub use media::{Media, MediaKind};
pub use podcast::PodcastEpisode;
pub use video::VideoLecture;
