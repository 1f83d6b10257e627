//! Declarative catalog entries.
//!
//! A catalog file is a YAML document listing items to construct:
//!
//! ```yaml
//! version: "1"
//! items:
//!   - kind: video
//!     title: Java OOP Basics
//!     years_ago: 0
//!     duration_minutes: 90
//!     quality: HD
//!   - kind: podcast
//!     title: Daily Coding
//!     year: 2021
//!     duration_minutes: 60
//!     host: Bob
//! ```
//!
//! Each entry gives either an absolute `year` or a `years_ago` offset
//! from the current calendar year.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::MediaKind;

/// Parsed catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub items: Vec<CatalogEntry>,
}

fn default_version() -> String {
    "1".to_string()
}

impl CatalogFile {
    /// Load and parse a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parse catalog YAML
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// One item to construct, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Video {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        years_ago: Option<i32>,
        duration_minutes: i32,
        #[serde(default)]
        quality: String,
    },
    Podcast {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<i32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        years_ago: Option<i32>,
        duration_minutes: i32,
        #[serde(default)]
        host: String,
    },
}

impl CatalogEntry {
    pub fn kind(&self) -> MediaKind {
        match self {
            CatalogEntry::Video { .. } => MediaKind::Video,
            CatalogEntry::Podcast { .. } => MediaKind::Podcast,
        }
    }

    /// Resolve the release year, counting `years_ago` back from `current_year`.
    ///
    /// An absolute `year` wins over `years_ago`.
    pub fn resolve_year(&self, current_year: i32) -> Result<i32> {
        let (title, year, years_ago) = match self {
            CatalogEntry::Video {
                title,
                year,
                years_ago,
                ..
            }
            | CatalogEntry::Podcast {
                title,
                year,
                years_ago,
                ..
            } => (title, year, years_ago),
        };

        match (year, years_ago) {
            (Some(year), _) => Ok(*year),
            (None, Some(ago)) => current_year.checked_sub(*ago).with_context(|| {
                format!("Entry '{}' has out-of-range years_ago: {}", title, ago)
            }),
            (None, None) => anyhow::bail!("Entry '{}' needs either year or years_ago", title),
        }
    }
}
