//! stem module
//!
//! Porter and Lancaster are implemented here; Snowball English comes from
//! `rust-stemmers`.
pub mod lancaster;
pub mod porter;

use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

pub use crate::models::StemmerChoice;
/// Re-export
pub use lancaster::LancasterStemmer;
pub use porter::PorterStemmer;

/// A word-level stemmer.
///
/// Implementations lowercase their input.
pub trait WordStemmer: Send + Sync {
  /// Stems a single token
  fn stem(&self, word: &str) -> String;
}

/// Snowball English (Porter2) stemmer
pub struct SnowballStemmer {
  inner: Stemmer,
}

impl SnowballStemmer {
  /// English stemmer
  pub fn english() -> Self {
    Self {
      inner: Stemmer::create(Algorithm::English),
    }
  }
}

impl Default for SnowballStemmer {
  fn default() -> Self {
    Self::english()
  }
}

impl WordStemmer for SnowballStemmer {
  fn stem(&self, word: &str) -> String {
    self.inner.stem(&word.to_lowercase()).into_owned()
  }
}

/// `rust_stemmers::Stemmer` does not implement `Debug`
impl fmt::Debug for SnowballStemmer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SnowballStemmer").field("algorithm", &"english").finish()
  }
}

/// The three stemmers, built once and selected per request
#[derive(Debug, Default)]
pub struct Stemmers {
  porter: PorterStemmer,
  lancaster: LancasterStemmer,
  snowball: SnowballStemmer,
}

impl Stemmers {
  /// Builds every stemmer
  pub fn new() -> Self {
    Self::default()
  }

  /// Stemmer for `choice`, `None` when stemming is disabled
  pub fn get(&self, choice: StemmerChoice) -> Option<&dyn WordStemmer> {
    match choice {
      StemmerChoice::None => None,
      StemmerChoice::Porter => Some(&self.porter),
      StemmerChoice::Lancaster => Some(&self.lancaster),
      StemmerChoice::Snowball => Some(&self.snowball),
    }
  }

  /// Stems every token with `choice`; empty when stemming is disabled
  pub fn stem_all(&self, choice: StemmerChoice, tokens: &[String]) -> Vec<String> {
    match self.get(choice) {
      Some(stemmer) => tokens.iter().map(|t| stemmer.stem(t)).collect(),
      None => Vec::new(),
    }
  }
}
