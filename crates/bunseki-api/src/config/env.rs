//! Config loading from environment variables

use std::path::PathBuf;
use std::str::FromStr;

use bunseki::config::{AnalyzerConfig, AssetsConfig, LimitsConfig, SummaryConfig};
use bunseki::SummarizerKind;

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_STATIC_DIR, DEFAULT_SUMMARIZER, MAX_TEXT_LENGTH,
};
use crate::errors::ApiError;

/// Bind address
pub const ENV_BIND_ADDR: &str = "BUNSEKI_BIND_ADDR";
/// Asset cache directory (OS cache dir when unset)
pub const ENV_ASSET_DIR: &str = "BUNSEKI_ASSET_DIR";
/// Directory holding `index.html` and static files
pub const ENV_STATIC_DIR: &str = "BUNSEKI_STATIC_DIR";
/// Summarization engine
pub const ENV_SUMMARIZER: &str = "BUNSEKI_SUMMARIZER";
/// Log level used when `RUST_LOG` is not set
pub const ENV_LOG_LEVEL: &str = "BUNSEKI_LOG_LEVEL";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
  /// trace
  Trace,
  /// debug
  Debug,
  /// info
  Info,
  /// warn
  Warn,
  /// error
  Error,
}

impl FromStr for LogLevel {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "trace" => Ok(Self::Trace),
      "debug" => Ok(Self::Debug),
      "info" => Ok(Self::Info),
      "warn" | "warning" => Ok(Self::Warn),
      "error" => Ok(Self::Error),
      _ => Err(format!(
        "Unknown log level: {}. Valid values: trace, debug, info, warn, error",
        s
      )),
    }
  }
}

impl LogLevel {
  /// Filter directive for `tracing_subscriber::EnvFilter`
  #[must_use]
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Trace => "trace",
      Self::Debug => "debug",
      Self::Info => "info",
      Self::Warn => "warn",
      Self::Error => "error",
    }
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5000")
  pub bind_addr: String,
  /// Asset cache directory; `None` uses the OS cache directory
  pub asset_dir: Option<PathBuf>,
  /// Static file directory
  pub static_dir: PathBuf,
  /// Summarization engine
  pub summarizer: SummarizerKind,
  /// Default log level
  pub log_level: LogLevel,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      asset_dir: None,
      static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
      summarizer: SummarizerKind::default(),
      log_level: LogLevel::Info,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through `lookup` (used by `from_env` and tests)
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let asset_dir = lookup(ENV_ASSET_DIR).filter(|s| !s.is_empty()).map(PathBuf::from);

    let static_dir =
      PathBuf::from(lookup(ENV_STATIC_DIR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()));

    let summarizer_str = lookup(ENV_SUMMARIZER).unwrap_or_else(|| DEFAULT_SUMMARIZER.to_string());
    let summarizer = SummarizerKind::from_str(&summarizer_str)
      .map_err(|e| ApiError::config(e.to_string()))?;

    let log_level_str = lookup(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    let log_level = LogLevel::from_str(&log_level_str).map_err(ApiError::config)?;

    Ok(Self {
      bind_addr,
      asset_dir,
      static_dir,
      summarizer,
      log_level,
    })
  }

  /// Analyzer configuration derived from the server configuration
  #[must_use]
  pub fn analyzer_config(&self) -> AnalyzerConfig {
    AnalyzerConfig {
      assets: AssetsConfig {
        cache_dir: self.asset_dir.clone(),
      },
      summary: SummaryConfig {
        engine: self.summarizer,
        ..SummaryConfig::default()
      },
      limits: LimitsConfig {
        max_text_bytes: MAX_TEXT_LENGTH,
      },
    }
  }
}
