//! The closed set of media variants held by a catalog.

use serde::{Deserialize, Serialize};

use super::capability::{Content, Downloadable};
use super::item::{ContentId, ContentItem};
use super::podcast::PodcastEpisode;
use super::video::VideoLecture;

/// Kind of media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Video lecture
    Video,

    /// Podcast episode
    Podcast,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Podcast => write!(f, "podcast"),
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "video" | "lecture" => Ok(MediaKind::Video),
            "podcast" | "episode" => Ok(MediaKind::Podcast),
            _ => anyhow::bail!("Unknown media kind: {}", s),
        }
    }
}

/// A catalog entry: one of the supported variants
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media {
    Video(VideoLecture),
    Podcast(PodcastEpisode),
}

impl Media {
    pub fn kind(&self) -> MediaKind {
        match self {
            Media::Video(_) => MediaKind::Video,
            Media::Podcast(_) => MediaKind::Podcast,
        }
    }

    pub fn id(&self) -> ContentId {
        self.item().id()
    }

    /// The variant-specific free-form field (quality or host)
    pub fn detail(&self) -> &str {
        match self {
            Media::Video(v) => v.quality(),
            Media::Podcast(p) => p.host_name(),
        }
    }

    /// Download capability, if this variant has one
    pub fn as_downloadable(&self) -> Option<&dyn Downloadable> {
        match self {
            Media::Video(v) => Some(v),
            Media::Podcast(p) => Some(p),
        }
    }
}

impl Content for Media {
    fn item(&self) -> &ContentItem {
        match self {
            Media::Video(v) => v.item(),
            Media::Podcast(p) => p.item(),
        }
    }

    fn item_mut(&mut self) -> &mut ContentItem {
        match self {
            Media::Video(v) => v.item_mut(),
            Media::Podcast(p) => p.item_mut(),
        }
    }

    fn license_cost(&self, reference_year: i32) -> f64 {
        match self {
            Media::Video(v) => v.license_cost(reference_year),
            Media::Podcast(p) => p.license_cost(reference_year),
        }
    }

    fn describe(&self) -> String {
        match self {
            Media::Video(v) => v.describe(),
            Media::Podcast(p) => p.describe(),
        }
    }
}

impl From<VideoLecture> for Media {
    fn from(v: VideoLecture) -> Self {
        Media::Video(v)
    }
}

impl From<PodcastEpisode> for Media {
    fn from(p: PodcastEpisode) -> Self {
        Media::Podcast(p)
    }
}
