//! Command-line interface for mediacat.
//!
//! Running with no subcommand prints the report for the configured
//! catalog (the built-in demo catalog by default).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{self, ResolvedConfig};
use crate::core::{CatalogRunner, ReportFormat, RunSummary};
use crate::domain::{current_year, MediaKind};
use crate::library::Catalog;

/// mediacat - licensable media catalog report
#[derive(Parser, Debug)]
#[command(name = "mediacat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the license report for every catalog item (default)
    Report(ReportArgs),

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ReportArgs {
    /// Year used for age and cost calculations (default: current year)
    #[arg(short, long)]
    pub reference_year: Option<i32>,

    /// Catalog file to report on instead of the built-in demo catalog
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only report items of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Output format for CLI (maps to ReportFormat)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one block per item
    Text,

    /// JSON array
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Media kind for CLI (maps to MediaKind)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    /// Video lectures
    Video,

    /// Podcast episodes
    Podcast,
}

impl From<KindArg> for MediaKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Video => MediaKind::Video,
            KindArg::Podcast => MediaKind::Podcast,
        }
    }
}

impl ReportArgs {
    /// Apply flags on top of the resolved configuration
    pub fn apply(&self, base: &ResolvedConfig) -> ResolvedConfig {
        let mut config = base.clone();
        if let Some(year) = self.reference_year {
            config.reference_year = Some(year);
        }
        if let Some(ref path) = self.catalog {
            config.catalog_file = Some(path.clone());
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
        config
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            None => run_report(&ReportArgs::default()),
            Some(Commands::Report(args)) => run_report(&args),
            Some(Commands::Config) => show_config(),
        }
    }
}

/// Build the catalog named by `config`, or the demo catalog.
///
/// Release years are always relative to the calendar year, never the
/// report's reference year.
pub fn load_catalog(config: &ResolvedConfig) -> Result<Catalog> {
    let now = current_year();
    match config.catalog_file {
        Some(ref path) => Catalog::from_file(path, now),
        None => Catalog::demo(now).context("Failed to build demo catalog"),
    }
}

/// Load the configured catalog and write its report to `out`
pub fn write_report<W: Write>(
    config: &ResolvedConfig,
    kind: Option<MediaKind>,
    out: &mut W,
) -> Result<RunSummary> {
    // One reference year for the whole run
    let reference_year = config.reference_year();
    let catalog = load_catalog(config)?;

    CatalogRunner::new(&catalog, reference_year)
        .with_kind(kind)
        .run(config.format, out)
}

fn run_report(args: &ReportArgs) -> Result<()> {
    let config = args.apply(config::config()?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&config, args.kind.map(Into::into), &mut out)?;
    out.flush()?;

    Ok(())
}

fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("mediacat configuration");
    println!("======================");
    match config.config_file {
        Some(ref path) => println!("Config file:     {}", path.display()),
        None => println!("Config file:     (none)"),
    }
    match config.reference_year {
        Some(year) => println!("Reference year:  {}", year),
        None => println!("Reference year:  {} (current)", config.reference_year()),
    }
    match config.catalog_file {
        Some(ref path) => println!("Catalog file:    {}", path.display()),
        None => println!("Catalog file:    (built-in demo)"),
    }
    println!("Format:          {}", config.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["mediacat"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_report_flags_parse() {
        let cli = Cli::try_parse_from([
            "mediacat",
            "report",
            "--reference-year",
            "2024",
            "--format",
            "json",
            "--kind",
            "podcast",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.reference_year, Some(2024));
                assert!(matches!(args.format, Some(OutputFormat::Json)));
                assert!(matches!(args.kind, Some(KindArg::Podcast)));
            }
            other => panic!("Expected report command, got {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let base = ResolvedConfig {
            reference_year: Some(2020),
            ..Default::default()
        };
        let args = ReportArgs {
            reference_year: Some(2024),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let config = args.apply(&base);
        assert_eq!(config.reference_year(), 2024);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_load_demo_catalog_by_default() {
        let catalog = load_catalog(&ResolvedConfig::default()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_future_reference_year_ages_demo_items() {
        let now = current_year();
        let config = ResolvedConfig {
            reference_year: Some(now + 5),
            ..Default::default()
        };

        let mut out = Vec::new();
        let summary = write_report(&config, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        // Release years stay anchored to the calendar year
        assert!(lines[0].contains(&format!("Year={}", now)));
        // Every item is past the fresh window: 6.5 + 8.0 + 2.2 + 2.8
        assert!(lines[0].ends_with("licenseCost=6.5"));
        assert!(lines[4].ends_with("licenseCost=8.0"));
        assert!(lines[8].ends_with("licenseCost=2.2"));
        assert!(lines[12].ends_with("licenseCost=2.8"));
        assert!((summary.total_cost - 19.5).abs() < 1e-9);
    }

    #[test]
    fn test_past_reference_year_keeps_demo_years() {
        let now = current_year();
        let config = ResolvedConfig {
            reference_year: Some(now - 10),
            ..Default::default()
        };

        let mut out = Vec::new();
        write_report(&config, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(&format!(
            "ID=1, Title='Java OOP Basics', Year={}, Duration=90 min",
            now
        )));
    }

    #[test]
    fn test_invalid_catalog_file_fails_report() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("catalog.yaml");
        std::fs::write(
            &path,
            "items:\n  - kind: video\n    title: \"\"\n    year: 2020\n    duration_minutes: 10\n",
        )
        .unwrap();

        let config = ResolvedConfig {
            catalog_file: Some(path),
            ..Default::default()
        };

        let mut out = Vec::new();
        let err = write_report(&config, None, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert!(err.chain().any(|e| e.to_string().contains("Title cannot be empty")));
    }

    #[test]
    fn test_execute_propagates_catalog_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing.yaml");

        let cli = Cli::try_parse_from([
            "mediacat",
            "report",
            "--catalog",
            missing.to_str().unwrap(),
        ])
        .unwrap();

        assert!(cli.execute().is_err());
    }
}
