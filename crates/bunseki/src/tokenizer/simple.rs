//! Whitespace and blank-line tokenizers

use regex::Regex;

use crate::errors::TokenizerError;

/// Splits on runs of whitespace
pub fn whitespace_tokenize(text: &str) -> Vec<String> {
  text.split_whitespace().map(str::to_string).collect()
}

const BLANKLINE_GAP: &str = r"\s*\n\s*\n\s*";

/// Splits text into blocks separated by one or more blank lines.
///
/// The gaps themselves are dropped, and so are empty blocks.
#[derive(Debug, Clone)]
pub struct BlanklineTokenizer {
  gap: Regex,
}

impl BlanklineTokenizer {
  /// Compiles the gap pattern
  pub fn new() -> Result<Self, TokenizerError> {
    let gap = Regex::new(BLANKLINE_GAP).map_err(|e| TokenizerError::InvalidRule {
      pattern: BLANKLINE_GAP,
      reason: e.to_string(),
    })?;
    Ok(Self { gap })
  }

  /// Tokenizes `text`
  pub fn tokenize(&self, text: &str) -> Vec<String> {
    self.gap.split(text).filter(|block| !block.is_empty()).map(str::to_string).collect()
  }
}
