//! Error definitions

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::assets::AssetKind;

/// Errors related to the analyzer configuration (`AnalyzerConfig`)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// summary.word_count < 1
  #[error("summary.word_count must be at least 1: actual={actual}")]
  InvalidSummaryWordCount {
    /// Actually specified value
    actual: usize,
  },

  /// limits.max_text_bytes < 1
  #[error("limits.max_text_bytes must be at least 1: actual={actual}")]
  InvalidMaxTextBytes {
    /// Actually specified value
    actual: usize,
  },

  /// summary.engine is not a known summarizer name
  #[error("unknown summarizer: {name} (valid values: text-rank, lead-sentences)")]
  UnknownSummarizer {
    /// Name that was given
    name: String,
  },
}

/// Errors related to language assets (sentence model, dictionary, stopwords, ...)
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum AssetError {
  /// The OS cache directory could not be determined
  #[error("asset cache directory not found")]
  CacheDirNotFound,

  /// Failed to create the cache directory
  #[error("failed to create asset cache directory: {0}")]
  CacheDirCreationFailed(Arc<io::Error>),

  /// Failed to write a missing asset into the cache directory
  #[error("failed to provision asset {kind}: path={path:?}, error={source}")]
  ProvisionFailed {
    /// Asset being provisioned
    kind: AssetKind,
    /// Target path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// Failed to read an asset file
  #[error("failed to read asset {kind}: path={path:?}, error={source}")]
  ReadFailed {
    /// Asset being read
    kind: AssetKind,
    /// Source path
    path: PathBuf,
    /// Underlying IO error
    #[source]
    source: Arc<io::Error>,
  },

  /// An asset file contained a line that could not be parsed
  #[error("malformed {kind} asset at line {line}: {reason}")]
  Malformed {
    /// Asset being parsed
    kind: AssetKind,
    /// 1-based line number
    line: usize,
    /// Why the line was rejected
    reason: String,
  },

  /// The asset is required by a stage but was not loaded
  #[error("asset not available: {0}")]
  Missing(AssetKind),
}

/// Tokenizer related errors
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TokenizerError {
  /// Error caused by a language asset
  #[error("asset error: {0}")]
  Asset(#[from] AssetError),

  /// A tokenizer rule failed to compile
  #[error("invalid tokenizer rule {pattern:?}: {reason}")]
  InvalidRule {
    /// Pattern that failed
    pattern: &'static str,
    /// Compiler message
    reason: String,
  },
}

/// Summarizer related errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummarizeError {
  /// The text has fewer sentences than the summarizer needs
  #[error("input must have more than one sentence: sentences={sentences}")]
  TooShort {
    /// Number of sentences found
    sentences: usize,
  },
}

/// Failure of a single analysis stage.
///
/// Stage errors never reach the caller of `TextAnalyzer::analyze`; they are
/// logged and replaced by the stage's empty default.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum StageError {
  /// Tokenizer failure
  #[error(transparent)]
  Tokenizer(#[from] TokenizerError),

  /// Missing or broken asset
  #[error(transparent)]
  Asset(#[from] AssetError),

  /// Summarizer failure
  #[error(transparent)]
  Summarize(#[from] SummarizeError),

  /// The stage depends on another stage that already failed
  #[error("upstream stage {0} failed")]
  Upstream(&'static str),
}

/// Request rejected before any stage runs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// Text is empty or whitespace only
  #[error("Please provide text to analyze")]
  EmptyText,

  /// Text exceeds the configured maximum length
  #[error("text is too long: {actual} bytes (max: {max} bytes)")]
  TextTooLong {
    /// Actual length in bytes
    actual: usize,
    /// Maximum length in bytes
    max: usize,
  },
}

/// Unified error
/// APIs exposed outside this crate return this error
/// Used as `BunsekiResult<T>` = `Result<T, BunsekiError>`
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum BunsekiError {
  /// Asset related error
  #[error(transparent)]
  Asset(#[from] AssetError),

  /// Tokenizer related error
  #[error(transparent)]
  Tokenizer(#[from] TokenizerError),

  /// Request validation error
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),
}

/// Standard Result type alias for the bunseki crate
pub type BunsekiResult<T> = Result<T, BunsekiError>;
