//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.chess-tui/config.toml` and is only ever read; a
//! missing file simply means defaults.
//!
//! Loading and resolving happen before the logger exists (the log file path
//! is itself a setting), so neither logs. They hand back what happened and
//! [`report`] logs it once the logger is up.
//!
//! ```toml
//! [general]
//! log_file = "chess-tui.log"      # Or set CHESS_TUI_LOG_FILE
//! log_level = "info"              # "off", "error", "warn", "info", "debug", "trace"
//!
//! [display]
//! colors = true                   # Ignored when NO_COLOR is set
//! show_status = true              # Cursor/selection line under the board
//! ```

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChessConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub colors: Option<bool>,
    pub show_status: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "chess-tui.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub colors: bool,
    pub show_status: bool,
    /// Settings that were ignored while resolving, for the user
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&ChessConfig::default(), |_| None)
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

/// Returns the path to `~/.chess-tui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chess-tui").join("config.toml"))
}

/// Where the loaded config came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    NoHomeDir,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                write!(f, "no config file at {}, using defaults", path.display())
            }
            ConfigSource::NoHomeDir => {
                write!(f, "could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.chess-tui/config.toml`.
///
/// A missing file or home directory yields `ChessConfig::default()`. A file
/// that exists but is malformed returns `ConfigError::Parse`.
pub fn load_config() -> Result<(ChessConfig, ConfigSource), ConfigError> {
    let Some(path) = config_path() else {
        return Ok((ChessConfig::default(), ConfigSource::NoHomeDir));
    };

    if !path.exists() {
        return Ok((ChessConfig::default(), ConfigSource::Missing(path)));
    }

    let config = load_config_from(&path)?;
    Ok((config, ConfigSource::File(path)))
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<ChessConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &ChessConfig) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &ChessConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log file: env → config → default
    let log_file = env("CHESS_TUI_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let mut warnings = Vec::new();

    // Log level: env → config → default, unparseable values fall back
    let log_level = env("CHESS_TUI_LOG_LEVEL")
        .or_else(|| config.general.log_level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warnings.push(format!(
                    "unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"
                ));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Colors: any NO_COLOR value disables them outright
    let colors = env("NO_COLOR").is_none() && config.display.colors.unwrap_or(true);

    ResolvedConfig {
        log_file: PathBuf::from(log_file),
        log_level,
        colors,
        show_status: config.display.show_status.unwrap_or(true),
        warnings,
    }
}

// ============================================================================
// Reporting
// ============================================================================

/// Log how the config was obtained, and tell the user through `out` about
/// anything that was ignored.
pub fn report(
    loaded: &Result<ConfigSource, ConfigError>,
    resolved: &ResolvedConfig,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match loaded {
        Ok(source) => info!("Config: {}", source),
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            writeln!(out, "chess-tui: ignoring config file: {e}")?;
        }
    }
    for warning in &resolved.warnings {
        warn!("Config: {}", warning);
        writeln!(out, "chess-tui: {warning}")?;
    }
    Ok(())
}
