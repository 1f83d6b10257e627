//! Podcast episodes.

use serde::Serialize;

use super::capability::{tiered_cost, Content, Downloadable};
use super::item::{ContentItem, IdSequence, InvalidArgument};

/// Per-minute license rate for podcasts
pub const PODCAST_RATE_PER_MINUTE: f64 = 0.03;

/// A podcast episode and the name of its host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PodcastEpisode {
    #[serde(flatten)]
    item: ContentItem,
    host_name: String,
}

impl PodcastEpisode {
    pub fn new(
        ids: &IdSequence,
        title: impl Into<String>,
        year: i32,
        duration_minutes: i32,
        host_name: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        Ok(Self {
            item: ContentItem::new(ids, title, year, duration_minutes)?,
            host_name: host_name.into(),
        })
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }
}

impl Content for PodcastEpisode {
    fn item(&self) -> &ContentItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut ContentItem {
        &mut self.item
    }

    fn license_cost(&self, reference_year: i32) -> f64 {
        tiered_cost(
            PODCAST_RATE_PER_MINUTE,
            self.item.duration_minutes(),
            self.age(reference_year),
            3,
            1,
        )
    }

    fn describe(&self) -> String {
        format!("{}, Host={}", self.item.describe(), self.host_name)
    }
}

impl Downloadable for PodcastEpisode {
    fn download_message(&self) -> String {
        format!("Downloading podcast hosted by {}...", self.host_name)
    }

    fn max_downloads_per_day(&self) -> u32 {
        10
    }
}
