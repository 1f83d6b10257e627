//! Core report logic.
//!
//! - CatalogRunner: the single report pass over a catalog

pub mod runner;

pub use runner::{
    format_cost, round_cents, CatalogRunner, ReportEntry, ReportFormat, RunSummary, SEPARATOR,
};
