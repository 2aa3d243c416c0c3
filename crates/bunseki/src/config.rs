// crates/bunseki/src/config.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::summarizer::DEFAULT_SUMMARY_WORDS;

/// Default maximum input size in bytes
pub const DEFAULT_MAX_TEXT_BYTES: usize = 1_000_000;

/// Summarization engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummarizerKind {
  /// Graph-based ranking of sentences (falls back to `LeadSentences` when
  /// its assets are missing)
  #[default]
  TextRank,
  /// First three period-delimited fragments
  LeadSentences,
}

impl SummarizerKind {
  /// Returns the engine name as written in configuration.
  ///
  /// # Examples
  /// - `SummarizerKind::TextRank` → `"text-rank"`
  /// - `SummarizerKind::LeadSentences` → `"lead-sentences"`
  pub fn name(&self) -> &'static str {
    match self {
      SummarizerKind::TextRank => "text-rank",
      SummarizerKind::LeadSentences => "lead-sentences",
    }
  }
}

impl FromStr for SummarizerKind {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "text-rank" | "textrank" => Ok(Self::TextRank),
      "lead-sentences" | "lead" => Ok(Self::LeadSentences),
      _ => Err(ConfigError::UnknownSummarizer { name: s.to_string() }),
    }
  }
}

impl std::fmt::Display for SummarizerKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Top-level configuration for the analyzer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzerConfig {
  /// [assets] section
  #[serde(default)]
  pub assets: AssetsConfig,
  /// [summary] section
  #[serde(default)]
  pub summary: SummaryConfig,
  /// [limits] section
  #[serde(default)]
  pub limits: LimitsConfig,
}

/// [assets] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetsConfig {
  /// Asset cache directory.
  ///
  /// `None` when omitted; `AssetManager` then uses the OS cache directory.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
}

/// [summary] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
  /// Summarization engine
  #[serde(default)]
  pub engine: SummarizerKind,
  /// Target summary length in words
  #[serde(default = "default_word_count")]
  pub word_count: usize,
}

fn default_word_count() -> usize {
  DEFAULT_SUMMARY_WORDS
}

impl Default for SummaryConfig {
  fn default() -> Self {
    Self {
      engine: SummarizerKind::default(),
      word_count: DEFAULT_SUMMARY_WORDS,
    }
  }
}

/// [limits] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
  /// Largest accepted input in bytes
  #[serde(default = "default_max_text_bytes")]
  pub max_text_bytes: usize,
}

fn default_max_text_bytes() -> usize {
  DEFAULT_MAX_TEXT_BYTES
}

impl Default for LimitsConfig {
  fn default() -> Self {
    Self {
      max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
    }
  }
}

// ===== Accessor Methods =====

impl AnalyzerConfig {
  /// Returns the configured asset cache directory.
  ///
  /// `None` if unspecified.
  pub fn asset_cache_dir(&self) -> Option<&Path> {
    self.assets.cache_dir.as_deref()
  }

  /// Returns the summarization engine.
  pub fn summarizer(&self) -> SummarizerKind {
    self.summary.engine
  }

  /// Returns the target summary length in words.
  pub fn summary_word_count(&self) -> usize {
    self.summary.word_count
  }

  /// Returns the maximum input size in bytes.
  pub fn max_text_bytes(&self) -> usize {
    self.limits.max_text_bytes
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `summary.word_count` >= 1
  /// - `limits.max_text_bytes` >= 1
  ///
  /// `assets.cache_dir` is not touched here; `AssetManager::provision` creates it
  /// and reports failures without stopping start-up.
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    // summary.word_count >= 1
    if self.summary.word_count < 1 {
      return Err(ConfigError::InvalidSummaryWordCount {
        actual: self.summary.word_count,
      });
    }

    // limits.max_text_bytes >= 1
    if self.limits.max_text_bytes < 1 {
      return Err(ConfigError::InvalidMaxTextBytes {
        actual: self.limits.max_text_bytes,
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
