//! Asset kinds and their bundled sources

use std::fmt;

/// Identifies one language asset.
///
/// Each asset is a small line-oriented text file. A copy of every asset is
/// compiled into the binary, so provisioning never needs the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
  /// Abbreviations that do not end a sentence
  SentenceModel,
  /// Noun base forms and irregular inflections for the lemmatizer
  LexicalDictionary,
  /// English stopword list
  Stopwords,
  /// Word → Penn Treebank tag lexicon
  TaggerModel,
  /// Gazetteer used by the entity chunker
  EntityChunker,
  /// General English word list
  WordList,
}

impl AssetKind {
  /// Every asset kind, in provisioning order
  pub const ALL: [AssetKind; 6] = [
    AssetKind::SentenceModel,
    AssetKind::LexicalDictionary,
    AssetKind::Stopwords,
    AssetKind::TaggerModel,
    AssetKind::EntityChunker,
    AssetKind::WordList,
  ];

  /// Short name used in logs and error messages
  pub fn name(&self) -> &'static str {
    match self {
      AssetKind::SentenceModel => "sentence-model",
      AssetKind::LexicalDictionary => "lexical-dictionary",
      AssetKind::Stopwords => "stopwords",
      AssetKind::TaggerModel => "tagger-model",
      AssetKind::EntityChunker => "entity-chunker",
      AssetKind::WordList => "word-list",
    }
  }

  /// File name inside the asset cache directory
  pub fn file_name(&self) -> &'static str {
    match self {
      AssetKind::SentenceModel => "sentence_abbreviations.txt",
      AssetKind::LexicalDictionary => "lemma_dictionary.txt",
      AssetKind::Stopwords => "stopwords_english.txt",
      AssetKind::TaggerModel => "pos_lexicon.txt",
      AssetKind::EntityChunker => "entity_gazetteer.txt",
      AssetKind::WordList => "words_english.txt",
    }
  }

  /// Contents of the copy compiled into the binary
  pub fn bundled_source(&self) -> &'static str {
    match self {
      AssetKind::SentenceModel => include_str!("../../assets/sentence_abbreviations.txt"),
      AssetKind::LexicalDictionary => include_str!("../../assets/lemma_dictionary.txt"),
      AssetKind::Stopwords => include_str!("../../assets/stopwords_english.txt"),
      AssetKind::TaggerModel => include_str!("../../assets/pos_lexicon.txt"),
      AssetKind::EntityChunker => include_str!("../../assets/entity_gazetteer.txt"),
      AssetKind::WordList => include_str!("../../assets/words_english.txt"),
    }
  }
}

impl fmt::Display for AssetKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
