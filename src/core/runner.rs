//! Catalog runner: the single report pass over a catalog.
//!
//! For every item, in catalog order, the text report prints
//!
//! ```text
//! ID=1, Title='Java OOP Basics', Year=2024, Duration=90 min, Quality=HD | licenseCost=9.5
//! Downloading video in HD...
//! Max downloads/day: 3
//! -----------------------------
//! ```
//!
//! The download and cap lines only appear for items with the download
//! capability. The reference year is fixed once per runner.

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::{Content, ContentId, Media, MediaKind};
use crate::library::Catalog;

/// Line printed after each item
pub const SEPARATOR: &str = "-----------------------------";

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// One item's computed report values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub id: ContentId,
    pub kind: MediaKind,
    pub title: String,
    pub year: i32,
    pub duration_minutes: i32,
    pub age: i32,
    pub license_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_downloads_per_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
}

impl ReportEntry {
    pub fn new(media: &Media, reference_year: i32) -> Self {
        let item = media.item();
        let downloadable = media.as_downloadable();

        Self {
            id: item.id(),
            kind: media.kind(),
            title: item.title().to_string(),
            year: item.year(),
            duration_minutes: item.duration_minutes(),
            age: item.age(reference_year),
            license_cost: round_cents(media.license_cost(reference_year)),
            max_downloads_per_day: downloadable.map(|d| d.max_downloads_per_day()),
            download: downloadable.map(|d| d.download_message()),
        }
    }
}

/// Totals for a completed run
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunSummary {
    pub items: usize,
    pub downloads: usize,
    pub total_cost: f64,
}

/// Runs the report pass over a catalog
pub struct CatalogRunner<'a> {
    catalog: &'a Catalog,
    reference_year: i32,
    kind: Option<MediaKind>,
}

impl<'a> CatalogRunner<'a> {
    pub fn new(catalog: &'a Catalog, reference_year: i32) -> Self {
        Self {
            catalog,
            reference_year,
            kind: None,
        }
    }

    /// Only report items of `kind`
    pub fn with_kind(mut self, kind: Option<MediaKind>) -> Self {
        self.kind = kind;
        self
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    fn selected(&self) -> impl Iterator<Item = &'a Media> + 'a {
        let kind = self.kind;
        self.catalog
            .iter()
            .filter(move |m| kind.map_or(true, |k| m.kind() == k))
    }

    /// Computed values for every selected item, in catalog order
    pub fn entries(&self) -> Vec<ReportEntry> {
        self.selected()
            .map(|m| ReportEntry::new(m, self.reference_year))
            .collect()
    }

    /// Write the report in `format`
    pub fn run<W: Write>(&self, format: ReportFormat, out: &mut W) -> Result<RunSummary> {
        let summary = match format {
            ReportFormat::Text => self.run_text(out)?,
            ReportFormat::Json => self.run_json(out)?,
        };

        tracing::info!(
            items = summary.items,
            downloads = summary.downloads,
            total_cost = summary.total_cost,
            reference_year = self.reference_year,
            "Report complete"
        );

        Ok(summary)
    }

    /// Write the plain-text report, invoking each item's download action
    pub fn run_text<W: Write>(&self, out: &mut W) -> std::io::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for media in self.selected() {
            let cost = media.license_cost(self.reference_year);
            writeln!(
                out,
                "{} | licenseCost={}",
                media.describe(),
                format_cost(cost)
            )?;

            if let Some(downloadable) = media.as_downloadable() {
                downloadable.download(out)?;
                writeln!(
                    out,
                    "Max downloads/day: {}",
                    downloadable.max_downloads_per_day()
                )?;
                summary.downloads += 1;
            }

            writeln!(out, "{}", SEPARATOR)?;

            summary.items += 1;
            summary.total_cost += cost;
        }

        summary.total_cost = round_cents(summary.total_cost);
        Ok(summary)
    }

    /// Write the report as a JSON array of [`ReportEntry`]
    pub fn run_json<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let entries = self.entries();

        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;

        Ok(RunSummary {
            items: entries.len(),
            downloads: entries.iter().filter(|e| e.download.is_some()).count(),
            total_cost: round_cents(entries.iter().map(|e| e.license_cost).sum()),
        })
    }
}

/// Round a monetary amount to whole cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Cost as printed in the text report: rounded to cents, at least one
/// decimal digit (`9.5`, `8.0`)
pub fn format_cost(amount: f64) -> String {
    format!("{:?}", round_cents(amount))
}
