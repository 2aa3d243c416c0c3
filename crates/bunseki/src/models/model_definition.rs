//! Data Model Definition
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default n-gram window size when the request does not specify one
pub const DEFAULT_NGRAM_SIZE: i64 = 2;

/// How the `tokens` field of the result is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizationMode {
  /// Treebank-style word tokens (punctuation split off)
  #[default]
  Word,
  /// One token per sentence
  Sentence,
  /// Split on runs of whitespace only
  Whitespace,
  /// Split on blank lines (paragraphs)
  Blankline,
}

impl TokenizationMode {
  /// Resolves a mode name as sent by clients.
  ///
  /// Matching is case-insensitive. Any name other than `word`, `sentence`
  /// or `whitespace` selects [`TokenizationMode::Blankline`].
  pub fn from_name(name: &str) -> Self {
    match name.to_ascii_lowercase().as_str() {
      "word" => Self::Word,
      "sentence" => Self::Sentence,
      "whitespace" => Self::Whitespace,
      _ => Self::Blankline,
    }
  }

  /// Lowercase name of the mode
  pub fn name(&self) -> &'static str {
    match self {
      Self::Word => "word",
      Self::Sentence => "sentence",
      Self::Whitespace => "whitespace",
      Self::Blankline => "blankline",
    }
  }
}

impl fmt::Display for TokenizationMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Stemming algorithm applied to word tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerChoice {
  /// No stemming; the `stemmed` field stays empty
  #[default]
  None,
  /// Porter (1980)
  Porter,
  /// Lancaster (Paice/Husk)
  Lancaster,
  /// Snowball English (Porter2)
  Snowball,
}

impl StemmerChoice {
  /// Resolves a stemmer name as sent by clients (`"None"`, `"Porter"`, ...).
  ///
  /// Matching is case-insensitive; unknown names disable stemming.
  pub fn from_name(name: &str) -> Self {
    match name.to_ascii_lowercase().as_str() {
      "porter" => Self::Porter,
      "lancaster" => Self::Lancaster,
      "snowball" => Self::Snowball,
      _ => Self::None,
    }
  }
}

/// Analysis request
///
/// Built once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
  /// Raw input text
  pub text: String,

  /// Tokenization mode for the `tokens` field
  #[serde(default)]
  pub tokenization: TokenizationMode,

  /// Stemmer for the `stemmed` field
  #[serde(default)]
  pub stemmer: StemmerChoice,

  /// Whether to fill the `lemmatized` field
  #[serde(default)]
  pub lemmatize: bool,

  /// Whether to fill the `filtered` field
  #[serde(default)]
  pub remove_stopwords: bool,

  /// N-gram window size; values `<= 1` disable n-grams
  #[serde(default = "default_ngram_size")]
  pub ngram_size: i64,

  /// Whether to fill the `summary` field
  #[serde(default)]
  pub summarize: bool,
}

fn default_ngram_size() -> i64 {
  DEFAULT_NGRAM_SIZE
}

impl AnalysisRequest {
  /// Creates a request with every option at its default
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      tokenization: TokenizationMode::default(),
      stemmer: StemmerChoice::default(),
      lemmatize: false,
      remove_stopwords: false,
      ngram_size: DEFAULT_NGRAM_SIZE,
      summarize: false,
    }
  }

  /// Builder that sets the tokenization mode
  #[must_use]
  pub fn with_tokenization(mut self, mode: TokenizationMode) -> Self {
    self.tokenization = mode;
    self
  }

  /// Builder that sets the stemmer
  #[must_use]
  pub fn with_stemmer(mut self, stemmer: StemmerChoice) -> Self {
    self.stemmer = stemmer;
    self
  }

  /// Builder that enables or disables lemmatization
  #[must_use]
  pub fn with_lemmatize(mut self, enabled: bool) -> Self {
    self.lemmatize = enabled;
    self
  }

  /// Builder that enables or disables stopword removal
  #[must_use]
  pub fn with_stopword_removal(mut self, enabled: bool) -> Self {
    self.remove_stopwords = enabled;
    self
  }

  /// Builder that sets the n-gram window size
  #[must_use]
  pub fn with_ngram_size(mut self, size: i64) -> Self {
    self.ngram_size = size;
    self
  }

  /// Builder that enables or disables summarization
  #[must_use]
  pub fn with_summarize(mut self, enabled: bool) -> Self {
    self.summarize = enabled;
    self
  }
}

/// A token and its part-of-speech tag (Penn Treebank tag set)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTag {
  /// Token text
  pub token: String,
  /// Tag, e.g. `NN`, `VBZ`, `.`
  pub tag: String,
}

impl PosTag {
  /// Constructor for PosTag
  pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
    Self {
      token: token.into(),
      tag: tag.into(),
    }
  }

  /// Whether the tag is a noun tag (`NN`, `NNS`, `NNP`, `NNPS`)
  pub fn is_noun(&self) -> bool {
    self.tag.starts_with("NN")
  }

  /// Whether the tag is a proper noun tag (`NNP`, `NNPS`)
  pub fn is_proper_noun(&self) -> bool {
    self.tag.starts_with("NNP")
  }
}

/// Named-entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
  /// People, including names preceded by a title
  Person,
  /// Companies, institutions, agencies
  Organization,
  /// Geo-political entities: countries, cities, states
  Gpe,
  /// Geographical features: rivers, mountains, oceans
  Location,
}

impl EntityLabel {
  /// Label as emitted in results
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Person => "PERSON",
      Self::Organization => "ORGANIZATION",
      Self::Gpe => "GPE",
      Self::Location => "LOCATION",
    }
  }

  /// Parses a label name (case-insensitive)
  pub fn from_name(name: &str) -> Option<Self> {
    match name.to_ascii_uppercase().as_str() {
      "PERSON" => Some(Self::Person),
      "ORGANIZATION" => Some(Self::Organization),
      "GPE" => Some(Self::Gpe),
      "LOCATION" => Some(Self::Location),
      _ => None,
    }
  }
}

impl fmt::Display for EntityLabel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A named-entity mention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEntity {
  /// Entity category
  pub label: EntityLabel,
  /// Surface text: the chunk's tokens joined by single spaces
  pub text: String,
}

/// Analysis result
///
/// Every field is always present. A stage that is disabled or fails leaves
/// its field at the empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
  /// Tokens in the requested tokenization mode
  pub tokens: Vec<String>,
  /// Stemmed word tokens
  pub stemmed: Vec<String>,
  /// Lemmatized word tokens
  pub lemmatized: Vec<String>,
  /// Word tokens with stopwords removed
  pub filtered: Vec<String>,
  /// Space-joined n-grams
  pub ngrams: Vec<String>,
  /// Part-of-speech tags
  pub pos_tags: Vec<PosTag>,
  /// Named-entity mentions in document order
  pub named_entities: Vec<NamedEntity>,
  /// Noun-phrase chunks in document order
  pub noun_phrases: Vec<String>,
  /// Exact token string → occurrence count
  pub frequency: BTreeMap<String, usize>,
  /// Summary (empty unless requested)
  pub summary: String,
}
