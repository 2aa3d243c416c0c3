//! summarizer module
pub mod lead;
pub mod textrank;

use crate::assets::AssetBundle;
use crate::errors::StageError;

/// Re-export
pub use lead::LeadSentenceSummarizer;
pub use textrank::{DEFAULT_SUMMARY_WORDS, TextRankSummarizer};

/// Extractive summarizer
pub trait Summarizer: Send + Sync {
  /// Engine name for logs
  fn name(&self) -> &'static str;

  /// Whether every asset the summarizer needs is loaded
  fn is_available(&self, _assets: &AssetBundle) -> bool {
    true
  }

  /// Summarizes `text`
  fn summarize(&self, assets: &AssetBundle, text: &str) -> Result<String, StageError>;
}
