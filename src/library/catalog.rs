//! Ordered catalog of media items.
//!
//! The catalog owns its items and the identifier sequence they are
//! built from. Insertion order is display order.

use std::path::Path;

use anyhow::{Context, Result};

use super::entry::{CatalogEntry, CatalogFile};
use crate::domain::{
    Content, ContentId, IdSequence, InvalidArgument, Media, MediaKind, PodcastEpisode,
    VideoLecture,
};

/// Catalog of media items
#[derive(Debug, Default)]
pub struct Catalog {
    /// Identifier source for every item added
    ids: IdSequence,

    /// Items in insertion order
    items: Vec<Media>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            ids: IdSequence::new(),
            items: Vec::new(),
        }
    }

    /// The built-in four-item demo catalog, with release years relative to
    /// `current_year`.
    pub fn demo(current_year: i32) -> Result<Self, InvalidArgument> {
        let mut catalog = Self::new();
        catalog.add_video("Java OOP Basics", current_year, 90, "HD")?;
        catalog.add_video("Advanced Java", current_year - 1, 120, "4K")?;
        catalog.add_podcast("Tech Talk", current_year, 40, "Alice")?;
        catalog.add_podcast("Daily Coding", current_year - 3, 60, "Bob")?;
        Ok(catalog)
    }

    /// Build a catalog from a YAML catalog file; `years_ago` entries count
    /// back from `current_year`
    pub fn from_file(path: &Path, current_year: i32) -> Result<Self> {
        let file = CatalogFile::load(path)?;
        Self::from_entries(&file.items, current_year)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Build a catalog from entries, stopping at the first invalid one
    pub fn from_entries(entries: &[CatalogEntry], current_year: i32) -> Result<Self> {
        let mut catalog = Self::new();
        for (index, entry) in entries.iter().enumerate() {
            catalog
                .add_entry(entry, current_year)
                .with_context(|| format!("Entry #{} is invalid", index + 1))?;
        }
        Ok(catalog)
    }

    /// Construct and append a video lecture
    pub fn add_video(
        &mut self,
        title: impl Into<String>,
        year: i32,
        duration_minutes: i32,
        quality: impl Into<String>,
    ) -> Result<ContentId, InvalidArgument> {
        let video = VideoLecture::new(&self.ids, title, year, duration_minutes, quality)?;
        Ok(self.push(video.into()))
    }

    /// Construct and append a podcast episode
    pub fn add_podcast(
        &mut self,
        title: impl Into<String>,
        year: i32,
        duration_minutes: i32,
        host_name: impl Into<String>,
    ) -> Result<ContentId, InvalidArgument> {
        let episode = PodcastEpisode::new(&self.ids, title, year, duration_minutes, host_name)?;
        Ok(self.push(episode.into()))
    }

    /// Construct and append the item described by `entry`
    pub fn add_entry(&mut self, entry: &CatalogEntry, current_year: i32) -> Result<ContentId> {
        let year = entry.resolve_year(current_year)?;
        let id = match entry {
            CatalogEntry::Video {
                title,
                duration_minutes,
                quality,
                ..
            } => self.add_video(title.as_str(), year, *duration_minutes, quality.as_str())?,
            CatalogEntry::Podcast {
                title,
                duration_minutes,
                host,
                ..
            } => self.add_podcast(title.as_str(), year, *duration_minutes, host.as_str())?,
        };
        Ok(id)
    }

    fn push(&mut self, media: Media) -> ContentId {
        let id = media.id();
        tracing::debug!(%id, kind = %media.kind(), title = media.item().title(), "Added to catalog");
        self.items.push(media);
        id
    }

    /// Get an item by ID
    pub fn get(&self, id: ContentId) -> Option<&Media> {
        self.items.iter().find(|m| m.id() == id)
    }

    /// Get an item by ID for mutation through its validating setters
    pub fn get_mut(&mut self, id: ContentId) -> Option<&mut Media> {
        self.items.iter_mut().find(|m| m.id() == id)
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Media> {
        self.items.iter()
    }

    /// Search items by query (case-insensitive substring of title, quality or host)
    pub fn search(&self, query: &str) -> Vec<&Media> {
        let query_lower = query.to_lowercase();

        self.items
            .iter()
            .filter(|m| {
                m.item().title().to_lowercase().contains(&query_lower)
                    || m.detail().to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Filter items by media kind, preserving order
    pub fn filter_by_kind(&self, kind: MediaKind) -> Vec<&Media> {
        self.items.iter().filter(|m| m.kind() == kind).collect()
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Media;
    type IntoIter = std::slice::Iter<'a, Media>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
