//! Lead-sentence summarizer
//!
//! Used when no ranking summarizer is available. Splits on every `.`, so
//! decimals and abbreviations count as fragment boundaries too.

use crate::assets::AssetBundle;
use crate::errors::StageError;
use crate::summarizer::Summarizer;

/// Number of leading fragments kept
const LEAD_FRAGMENTS: usize = 3;

/// Keeps the first three period-delimited fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadSentenceSummarizer;

impl LeadSentenceSummarizer {
  /// Constructor
  pub fn new() -> Self {
    Self
  }

  /// First three fragments joined by `". "` plus a final `.` when the text
  /// has more than three fragments, otherwise the text unchanged
  pub fn lead(&self, text: &str) -> String {
    let fragments: Vec<&str> = text.split('.').collect();
    if fragments.len() > LEAD_FRAGMENTS {
      format!("{}.", fragments[..LEAD_FRAGMENTS].join(". "))
    } else {
      text.to_string()
    }
  }
}

impl Summarizer for LeadSentenceSummarizer {
  fn name(&self) -> &'static str {
    "lead-sentences"
  }

  fn summarize(&self, _assets: &AssetBundle, text: &str) -> Result<String, StageError> {
    Ok(self.lead(text))
  }
}
