//! mediacat - catalog of licensable media items
//!
//! Models video lectures and podcast episodes, each with its own
//! license-cost formula and daily download cap, and prints a per-item
//! license report.
//!
//! # Modules
//!
//! - `domain`: Items, validation, and the `Content` / `Downloadable` contracts
//! - `library`: The `Catalog` and declarative catalog files
//! - `core`: The catalog runner producing the report
//! - `config`: Config file and environment resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Report on the built-in demo catalog
//! mediacat
//!
//! # Report on a catalog file as of a fixed year, as JSON
//! mediacat report --catalog catalog.yaml --reference-year 2024 --format json
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::core::{CatalogRunner, ReportFormat};
pub use domain::{
    Content, ContentId, ContentItem, Downloadable, IdSequence, InvalidArgument, Media, MediaKind,
    PodcastEpisode, VideoLecture,
};
pub use library::{Catalog, CatalogEntry, CatalogFile};
