//! Stopword filter

use crate::assets::StopwordList;

/// Drops tokens whose lowercase form is a stopword
#[derive(Debug, Clone, Copy)]
pub struct StopwordFilter<'a> {
  stopwords: &'a StopwordList,
}

impl<'a> StopwordFilter<'a> {
  /// Constructor
  pub fn new(stopwords: &'a StopwordList) -> Self {
    Self { stopwords }
  }

  /// Keeps the non-stopwords, in order
  pub fn filter(&self, tokens: &[String]) -> Vec<String> {
    tokens.iter().filter(|t| !self.stopwords.contains(t)).cloned().collect()
  }
}
