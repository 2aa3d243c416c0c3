//! Response Model Definition

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bunseki::models::AnalysisResult;

/// Text Analysis Response
///
/// Every field is always present; disabled or failed stages are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
  /// Tokens in the requested tokenization mode
  pub tokens: Vec<String>,
  /// Stemmed word tokens
  pub stemmed: Vec<String>,
  /// Lemmatized word tokens
  pub lemmatized: Vec<String>,
  /// Word tokens without stopwords
  pub filtered: Vec<String>,
  /// Space-joined n-grams
  pub ngrams: Vec<String>,
  /// `[token, tag]` pairs
  pub pos_tags: Vec<(String, String)>,
  /// `[label, text]` pairs
  pub ner: Vec<(String, String)>,
  /// Noun-phrase chunks
  pub chunks: Vec<String>,
  /// Word token counts
  pub frequency: BTreeMap<String, usize>,
  /// Extractive summary
  pub summary: String,
}

impl From<AnalysisResult> for ProcessResponse {
  fn from(result: AnalysisResult) -> Self {
    Self {
      tokens: result.tokens,
      stemmed: result.stemmed,
      lemmatized: result.lemmatized,
      filtered: result.filtered,
      ngrams: result.ngrams,
      pos_tags: result.pos_tags.into_iter().map(|t| (t.token, t.tag)).collect(),
      ner: result
        .named_entities
        .into_iter()
        .map(|e| (e.label.as_str().to_string(), e.text))
        .collect(),
      chunks: result.noun_phrases,
      frequency: result.frequency,
      summary: result.summary,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bunseki::models::{EntityLabel, NamedEntity, PosTag};

  #[test]
  fn converts_tags_and_entities_to_pairs() {
    let result = AnalysisResult {
      tokens: vec!["Paris".to_string()],
      pos_tags: vec![PosTag::new("Paris", "NNP")],
      named_entities: vec![NamedEntity {
        label: EntityLabel::Gpe,
        text: "Paris".to_string(),
      }],
      ..AnalysisResult::default()
    };

    let response = ProcessResponse::from(result);
    assert_eq!(response.pos_tags, vec![("Paris".to_string(), "NNP".to_string())]);
    assert_eq!(response.ner, vec![("GPE".to_string(), "Paris".to_string())]);
  }

  #[test]
  fn serializes_all_ten_fields() {
    let json = serde_json::to_value(ProcessResponse::default()).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 10);
    for key in [
      "tokens", "stemmed", "lemmatized", "filtered", "ngrams", "pos_tags", "ner", "chunks",
      "frequency", "summary",
    ] {
      assert!(object.contains_key(key), "missing field {key}");
    }
  }

  #[test]
  fn pairs_serialize_as_arrays() {
    let response = ProcessResponse {
      pos_tags: vec![("fox".to_string(), "NN".to_string())],
      ..ProcessResponse::default()
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["pos_tags"], serde_json::json!([["fox", "NN"]]));
  }
}
