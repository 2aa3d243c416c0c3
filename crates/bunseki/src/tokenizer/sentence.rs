//! Sentence tokenizer
//!
//! Unicode sentence boundaries (UAX #29) are a good first cut but break after
//! every period followed by a capital letter. Boundaries that follow an
//! abbreviation or an initial, or that lack terminal punctuation, are merged
//! back into the following segment.

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::assets::SentenceModel;

/// Characters that may follow the terminal punctuation of a sentence
const CLOSING: &[char] = &['"', '\'', ')', ']', '}', '»', '”', '’'];

/// Sentence tokenizer backed by a [`SentenceModel`]
#[derive(Debug, Clone, Copy)]
pub struct SentenceTokenizer<'a> {
  model: &'a SentenceModel,
}

impl<'a> SentenceTokenizer<'a> {
  /// Constructor
  pub fn new(model: &'a SentenceModel) -> Self {
    Self { model }
  }

  /// Splits `text` into trimmed, non-empty sentences in document order
  pub fn tokenize(&self, text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for segment in text.split_sentence_bounds() {
      current.push_str(segment);

      let candidate = current.trim();
      if candidate.is_empty() {
        current.clear();
        continue;
      }

      if self.ends_sentence(candidate) {
        sentences.push(candidate.to_string());
        current.clear();
      }
    }

    let rest = current.trim();
    if !rest.is_empty() {
      sentences.push(rest.to_string());
    }

    trace!(sentences = sentences.len(), "sentence tokenization completed");
    sentences
  }

  /// Whether `candidate` (already trimmed) is a complete sentence
  fn ends_sentence(&self, candidate: &str) -> bool {
    let body = candidate.trim_end_matches(CLOSING);
    match body.chars().last() {
      Some('!' | '?') => true,
      Some('.') => !self.ends_with_abbreviation(body),
      _ => false,
    }
  }

  fn ends_with_abbreviation(&self, body: &str) -> bool {
    let Some(last_word) = body.split_whitespace().last() else {
      return false;
    };
    let word = last_word
      .trim_start_matches(|c: char| !c.is_alphanumeric())
      .trim_end_matches('.')
      .to_lowercase();

    if word.is_empty() {
      return false;
    }

    // initials such as "J." in "J. Smith"
    let mut chars = word.chars();
    if matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic()) {
      return true;
    }

    self.model.is_abbreviation(&word)
  }
}
