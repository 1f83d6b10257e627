//! Configuration for mediacat reports.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of this)
//! 2. Environment variables (MEDIACAT_REFERENCE_YEAR, MEDIACAT_CATALOG)
//! 3. Config file (.mediacat/config.yaml)
//! 4. Defaults (current year, built-in demo catalog, text output)
//!
//! Config file discovery:
//! - Searches current directory and parents for .mediacat/config.yaml
//! - Catalog paths in the config file are relative to the project root
//!   (the parent of .mediacat/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::ReportFormat;
use crate::domain::current_year;

/// Environment variable overriding the reference year
pub const ENV_REFERENCE_YEAR: &str = "MEDIACAT_REFERENCE_YEAR";

/// Environment variable pointing at a catalog file
pub const ENV_CATALOG: &str = "MEDIACAT_CATALOG";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// Year used for every age and cost calculation
    pub reference_year: Option<i32>,
    /// Output format
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file (relative to project root)
    pub file: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Explicit reference year, if configured
    pub reference_year: Option<i32>,
    /// Catalog file to load instead of the built-in demo catalog
    pub catalog_file: Option<PathBuf>,
    /// Report output format
    pub format: ReportFormat,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            reference_year: None,
            catalog_file: None,
            format: ReportFormat::Text,
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Reference year for a run: the configured one, else the current year
    pub fn reference_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(current_year)
    }
}

/// Find config file by searching `start` and its parents
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".mediacat").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

fn parse_reference_year(raw: &str) -> Result<i32> {
    raw.trim()
        .parse()
        .with_context(|| format!("{} is not a year: {}", ENV_REFERENCE_YEAR, raw))
}

/// Merge a config file (if any) with environment overrides
fn resolve(
    config_file: Option<PathBuf>,
    env_year: Option<String>,
    env_catalog: Option<String>,
) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Base directory is the parent of .mediacat/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        resolved.reference_year = config.report.reference_year;
        resolved.format = config.report.format.unwrap_or_default();
        resolved.catalog_file = config
            .catalog
            .file
            .as_deref()
            .map(|file| resolve_path(base_dir, file));
    }

    if let Some(raw) = env_year {
        resolved.reference_year = Some(parse_reference_year(&raw)?);
    }
    if let Some(path) = env_catalog {
        resolved.catalog_file = Some(PathBuf::from(path));
    }

    resolved.config_file = config_file;
    tracing::debug!(?resolved, "Resolved configuration");

    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = std::env::current_dir()
        .ok()
        .and_then(|dir| find_config_file(&dir));

    resolve(
        config_file,
        std::env::var(ENV_REFERENCE_YEAR).ok(),
        std::env::var(ENV_CATALOG).ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) -> PathBuf {
        let dir = root.join(".mediacat");
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None, None).unwrap();

        assert_eq!(config, ResolvedConfig::default());
        assert_eq!(config.reference_year(), current_year());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1"
report:
  reference_year: 2024
  format: json
catalog:
  file: catalog.yaml
"#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.report.reference_year, Some(2024));
        assert_eq!(config.report.format, Some(ReportFormat::Json));
        assert_eq!(config.catalog.file.as_deref(), Some("catalog.yaml"));
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "version: \"1\"");

        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file(&nested), Some(path));
    }

    #[test]
    fn test_catalog_path_relative_to_project_root() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1"
catalog:
  file: data/catalog.yaml
"#,
        );

        let config = resolve(Some(path.clone()), None, None).unwrap();
        assert_eq!(
            config.catalog_file,
            Some(temp.path().join("data/catalog.yaml"))
        );
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
version: "1"
report:
  reference_year: 2020
"#,
        );

        let config = resolve(
            Some(path),
            Some("2030".to_string()),
            Some("/tmp/other.yaml".to_string()),
        )
        .unwrap();

        assert_eq!(config.reference_year(), 2030);
        assert_eq!(config.catalog_file, Some(PathBuf::from("/tmp/other.yaml")));
    }

    #[test]
    fn test_bad_env_year() {
        assert!(resolve(None, Some("soon".to_string()), None).is_err());
    }
}
