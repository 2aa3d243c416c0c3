//! TextRank extractive summarizer
//!
//! Sentences are graph nodes. Edge weights measure the overlap of their
//! stemmed content words, normalised by sentence length:
//!
//! ```text
//! w(i, j) = |Si ∩ Sj| / (ln |Si| + ln |Sj|)
//! ```
//!
//! PageRank over that graph scores the sentences. The best sentences are
//! taken until the summary is as close as possible to the target word
//! count, then restored to document order.

use std::collections::HashSet;

use tracing::debug;

use crate::assets::{AssetBundle, StopwordList};
use crate::errors::{StageError, SummarizeError};
use crate::stem::{SnowballStemmer, WordStemmer};
use crate::summarizer::Summarizer;
use crate::tokenizer::SentenceTokenizer;

/// Default target length of a summary in words
pub const DEFAULT_SUMMARY_WORDS: usize = 50;

const DAMPING: f64 = 0.85;
const MAX_ITERATIONS: usize = 100;
const CONVERGENCE: f64 = 1e-6;

/// TextRank summarizer
#[derive(Debug)]
pub struct TextRankSummarizer {
  word_count: usize,
  stemmer: SnowballStemmer,
}

impl TextRankSummarizer {
  /// Summarizer targeting `word_count` words
  pub fn new(word_count: usize) -> Self {
    Self {
      word_count,
      stemmer: SnowballStemmer::english(),
    }
  }

  /// Target summary length in words
  pub fn word_count(&self) -> usize {
    self.word_count
  }

  /// Summarizes already split sentences
  pub fn summarize_sentences(
    &self,
    sentences: &[String],
    stopwords: &StopwordList,
  ) -> Result<String, SummarizeError> {
    if sentences.len() < 2 {
      return Err(SummarizeError::TooShort {
        sentences: sentences.len(),
      });
    }

    let bags: Vec<Vec<String>> =
      sentences.iter().map(|s| self.content_words(s, stopwords)).collect();
    let weights = similarity_matrix(&bags);
    let scores = page_rank(&weights);

    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));

    let mut selected = Vec::new();
    let mut length = 0usize;
    for index in ranked {
      let words = sentences[index].split_whitespace().count();
      if self.word_count.abs_diff(length + words) > self.word_count.abs_diff(length) {
        break;
      }
      selected.push(index);
      length += words;
    }
    selected.sort_unstable();

    debug!(
      sentences = sentences.len(),
      selected = selected.len(),
      words = length,
      "textrank summary built"
    );

    Ok(selected.iter().map(|&i| sentences[i].as_str()).collect::<Vec<_>>().join("\n"))
  }

  /// Lowercase alphanumeric words of `sentence`, minus stopwords, stemmed
  fn content_words(&self, sentence: &str, stopwords: &StopwordList) -> Vec<String> {
    sentence
      .split(|c: char| !c.is_alphanumeric())
      .filter(|w| !w.is_empty())
      .map(str::to_lowercase)
      .filter(|w| !stopwords.contains(w))
      .map(|w| self.stemmer.stem(&w))
      .collect()
  }
}

impl Default for TextRankSummarizer {
  fn default() -> Self {
    Self::new(DEFAULT_SUMMARY_WORDS)
  }
}

impl Summarizer for TextRankSummarizer {
  fn name(&self) -> &'static str {
    "text-rank"
  }

  fn is_available(&self, assets: &AssetBundle) -> bool {
    assets.sentence_model().is_ok() && assets.stopwords().is_ok()
  }

  fn summarize(&self, assets: &AssetBundle, text: &str) -> Result<String, StageError> {
    let sentences = SentenceTokenizer::new(assets.sentence_model()?).tokenize(text);
    Ok(self.summarize_sentences(&sentences, assets.stopwords()?)?)
  }
}

fn similarity_matrix(bags: &[Vec<String>]) -> Vec<Vec<f64>> {
  let sets: Vec<HashSet<&String>> = bags.iter().map(|b| b.iter().collect()).collect();
  let n = bags.len();
  let mut weights = vec![vec![0.0; n]; n];

  for i in 0..n {
    for j in (i + 1)..n {
      let overlap = sets[i].intersection(&sets[j]).count();
      if overlap == 0 {
        continue;
      }
      let norm = (bags[i].len() as f64).ln() + (bags[j].len() as f64).ln();
      if norm <= 0.0 {
        continue;
      }
      let weight = overlap as f64 / norm;
      weights[i][j] = weight;
      weights[j][i] = weight;
    }
  }

  weights
}

fn page_rank(weights: &[Vec<f64>]) -> Vec<f64> {
  let n = weights.len();
  let out_weight: Vec<f64> = weights.iter().map(|row| row.iter().sum()).collect();
  let mut scores = vec![1.0; n];

  for _ in 0..MAX_ITERATIONS {
    let next: Vec<f64> = (0..n)
      .map(|i| {
        let incoming: f64 = (0..n)
          .filter(|&j| out_weight[j] > 0.0 && weights[j][i] > 0.0)
          .map(|j| weights[j][i] / out_weight[j] * scores[j])
          .sum();
        (1.0 - DAMPING) + DAMPING * incoming
      })
      .collect();

    let delta = next.iter().zip(&scores).map(|(a, b)| (a - b).abs()).fold(0.0, f64::max);
    scores = next;
    if delta < CONVERGENCE {
      break;
    }
  }

  scores
}
