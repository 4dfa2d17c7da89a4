//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.foresight/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::view::View;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ForesightConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub initial_view: Option<String>,
    pub dataset_file: Option<String>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

/// Values given on the command line. `None` = flag not given.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub view: Option<String>,
    pub dataset: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "foresight.log";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `None` = open on the dataset's default view.
    pub initial_view: Option<View>,
    /// `None` = use the embedded dataset.
    pub dataset_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: log::LevelFilter,
    /// Settings that were ignored during resolution. Resolution runs before
    /// the logger exists, so the caller logs these once it does.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            initial_view: None,
            dataset_file: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
            warnings: Vec::new(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.foresight/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".foresight"))
}

/// Returns the path to `~/.foresight/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.foresight/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ForesightConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ForesightConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ForesightConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ForesightConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<ForesightConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ForesightConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Foresight Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# initial_view = "overview"          # overview, ask, simlab, domains, models, workflows,
#                                    # ingestion, agents, insights, api, archive,
#                                    # architecture, diligence, admin, legal
# dataset_file = "dataset.json"      # Path relative to ~/.foresight/ (or absolute)
# log_file = "foresight.log"
# log_level = "info"                 # error, warn, info, debug, trace
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ForesightConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &ForesightConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // View: CLI → env → config. Unknown ids fall through to the next layer.
    let initial_view = [
        ("--view", cli.view.clone()),
        ("FORESIGHT_VIEW", env("FORESIGHT_VIEW")),
        ("general.initial_view", config.general.initial_view.clone()),
    ]
    .into_iter()
    .find_map(|(source, value)| parse_view(source, value?, &mut warnings));

    // Dataset: CLI → env → config (relative to ~/.foresight/)
    let dataset_file = cli
        .dataset
        .clone()
        .or_else(|| env("FORESIGHT_DATASET").map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .dataset_file
                .as_deref()
                .map(resolve_config_relative)
        });

    let log_level = [
        ("--log-level", cli.log_level.clone()),
        ("FORESIGHT_LOG_LEVEL", env("FORESIGHT_LOG_LEVEL")),
        ("general.log_level", config.general.log_level.clone()),
    ]
    .into_iter()
    .find_map(|(source, value)| parse_level(source, value?, &mut warnings))
    .unwrap_or(DEFAULT_LOG_LEVEL);

    let log_file = config
        .general
        .log_file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        initial_view,
        dataset_file,
        log_file,
        log_level,
        warnings,
    }
}

fn parse_view(source: &str, value: String, warnings: &mut Vec<String>) -> Option<View> {
    match value.parse::<View>() {
        Ok(view) => Some(view),
        Err(e) => {
            warnings.push(format!("Ignoring {source}: {e}"));
            None
        }
    }
}

fn parse_level(
    source: &str,
    value: String,
    warnings: &mut Vec<String>,
) -> Option<log::LevelFilter> {
    match value.trim().parse::<log::LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warnings.push(format!("Ignoring {source}: unknown log level {value:?}"));
            None
        }
    }
}

/// Absolute paths are kept; relative ones resolve against `~/.foresight/`.
fn resolve_config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
