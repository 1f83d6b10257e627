//! Video lectures.

use serde::Serialize;

use super::capability::{tiered_cost, Content, Downloadable};
use super::item::{ContentItem, IdSequence, InvalidArgument};

/// Per-minute license rate for video
pub const VIDEO_RATE_PER_MINUTE: f64 = 0.05;

/// A recorded lecture with a free-form quality label (e.g. "HD", "4K")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoLecture {
    #[serde(flatten)]
    item: ContentItem,
    quality: String,
}

impl VideoLecture {
    pub fn new(
        ids: &IdSequence,
        title: impl Into<String>,
        year: i32,
        duration_minutes: i32,
        quality: impl Into<String>,
    ) -> Result<Self, InvalidArgument> {
        Ok(Self {
            item: ContentItem::new(ids, title, year, duration_minutes)?,
            quality: quality.into(),
        })
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }
}

impl Content for VideoLecture {
    fn item(&self) -> &ContentItem {
        &self.item
    }

    fn item_mut(&mut self) -> &mut ContentItem {
        &mut self.item
    }

    fn license_cost(&self, reference_year: i32) -> f64 {
        tiered_cost(
            VIDEO_RATE_PER_MINUTE,
            self.item.duration_minutes(),
            self.age(reference_year),
            5,
            2,
        )
    }

    fn describe(&self) -> String {
        format!("{}, Quality={}", self.item.describe(), self.quality)
    }
}

impl Downloadable for VideoLecture {
    fn download_message(&self) -> String {
        format!("Downloading video in {}...", self.quality)
    }

    fn max_downloads_per_day(&self) -> u32 {
        3
    }
}
