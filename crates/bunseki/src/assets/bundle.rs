//! Parsed language assets
//!
//! Every asset file is line oriented: blank lines and lines starting with `#`
//! are ignored, the remaining lines are whitespace separated fields.

use std::collections::{HashMap, HashSet};

use crate::assets::AssetKind;
use crate::errors::AssetError;
use crate::models::EntityLabel;

/// Yields `(1-based line number, fields)` for every content line
fn content_lines(source: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
  source.lines().enumerate().filter_map(|(idx, line)| {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
      None
    } else {
      Some((idx + 1, line.split_whitespace().collect()))
    }
  })
}

fn malformed(kind: AssetKind, line: usize, reason: impl Into<String>) -> AssetError {
  AssetError::Malformed {
    kind,
    line,
    reason: reason.into(),
  }
}

/// Parses a one-word-per-line list into a set
fn parse_word_set(kind: AssetKind, source: &str) -> Result<HashSet<String>, AssetError> {
  let mut words = HashSet::new();
  for (line, fields) in content_lines(source) {
    match fields.as_slice() {
      [word] => {
        words.insert((*word).to_string());
      }
      _ => return Err(malformed(kind, line, "expected exactly one word")),
    }
  }
  Ok(words)
}

/// Sentence boundary model: abbreviations that do not end a sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentenceModel {
  abbreviations: HashSet<String>,
}

impl SentenceModel {
  /// Parses the model from its file contents
  pub fn parse(source: &str) -> Result<Self, AssetError> {
    let abbreviations = parse_word_set(AssetKind::SentenceModel, source)?
      .into_iter()
      .map(|w| w.trim_end_matches('.').to_lowercase())
      .collect();
    Ok(Self { abbreviations })
  }

  /// Whether `word` (lowercase, without the final period) is a known abbreviation
  pub fn is_abbreviation(&self, word: &str) -> bool {
    self.abbreviations.contains(word)
  }
}

/// Lexical dictionary used by the lemmatizer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalDictionary {
  base_forms: HashSet<String>,
  exceptions: HashMap<String, String>,
}

impl LexicalDictionary {
  /// Parses the dictionary.
  ///
  /// A line with one field declares a base form; a line with two fields maps
  /// an irregular inflection to its base form (which also becomes known).
  pub fn parse(source: &str) -> Result<Self, AssetError> {
    let mut dictionary = Self::default();
    for (line, fields) in content_lines(source) {
      match fields.as_slice() {
        [base] => {
          dictionary.base_forms.insert((*base).to_string());
        }
        [inflected, base] => {
          dictionary.exceptions.insert((*inflected).to_string(), (*base).to_string());
          dictionary.base_forms.insert((*base).to_string());
        }
        _ => {
          return Err(malformed(
            AssetKind::LexicalDictionary,
            line,
            "expected `<base>` or `<inflected> <base>`",
          ));
        }
      }
    }
    Ok(dictionary)
  }

  /// Whether `word` is a known base form
  pub fn is_base_form(&self, word: &str) -> bool {
    self.base_forms.contains(word)
  }

  /// Irregular base form of `word`, if any
  pub fn exception(&self, word: &str) -> Option<&str> {
    self.exceptions.get(word).map(String::as_str)
  }
}

/// Stopword list (lowercase)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordList {
  words: HashSet<String>,
}

impl StopwordList {
  /// Parses the list
  pub fn parse(source: &str) -> Result<Self, AssetError> {
    Ok(Self {
      words: parse_word_set(AssetKind::Stopwords, source)?,
    })
  }

  /// Whether the lowercase form of `word` is a stopword
  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(&word.to_lowercase())
  }

  /// Number of stopwords
  pub fn len(&self) -> usize {
    self.words.len()
  }

  /// Whether the list is empty
  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}

/// Tagger model: a word → tag lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggerModel {
  lexicon: HashMap<String, String>,
}

impl TaggerModel {
  /// Parses `<word> <TAG>` lines
  pub fn parse(source: &str) -> Result<Self, AssetError> {
    let mut lexicon = HashMap::new();
    for (line, fields) in content_lines(source) {
      match fields.as_slice() {
        [word, tag] => {
          lexicon.insert((*word).to_string(), (*tag).to_string());
        }
        _ => {
          return Err(malformed(AssetKind::TaggerModel, line, "expected `<word> <TAG>`"));
        }
      }
    }
    Ok(Self { lexicon })
  }

  /// Tag for the exact form `word`
  pub fn lookup(&self, word: &str) -> Option<&str> {
    self.lexicon.get(word).map(String::as_str)
  }
}

/// Gazetteer for the entity chunker.
///
/// Name entries may span several words and are matched on the lowercase
/// surface. Cue words (titles, organisation suffixes, location nouns) are
/// single words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityGazetteer {
  titles: HashSet<String>,
  org_suffixes: HashSet<String>,
  location_nouns: HashSet<String>,
  names: HashMap<String, EntityLabel>,
}

impl EntityGazetteer {
  /// Parses `<CLASS> <entry words...>` lines
  pub fn parse(source: &str) -> Result<Self, AssetError> {
    let mut gazetteer = Self::default();
    for (line, fields) in content_lines(source) {
      let Some((class, entry)) = fields.split_first() else {
        continue;
      };
      if entry.is_empty() {
        return Err(malformed(AssetKind::EntityChunker, line, "missing entry"));
      }
      let entry = entry.join(" ").to_lowercase();
      match *class {
        "TITLE" => {
          gazetteer.titles.insert(entry);
        }
        "ORG_SUFFIX" => {
          gazetteer.org_suffixes.insert(entry);
        }
        "LOC_NOUN" => {
          gazetteer.location_nouns.insert(entry);
        }
        other => match EntityLabel::from_name(other) {
          Some(label) => {
            // first entry wins
            gazetteer.names.entry(entry).or_insert(label);
          }
          None => {
            return Err(malformed(
              AssetKind::EntityChunker,
              line,
              format!("unknown class {other:?}"),
            ));
          }
        },
      }
    }
    Ok(gazetteer)
  }

  /// Whether `word` (any case, trailing period ignored) is a title such as "Mr."
  pub fn is_title(&self, word: &str) -> bool {
    self.titles.contains(&word.trim_end_matches('.').to_lowercase())
  }

  /// Whether `word` is an organisation suffix such as "Inc." or "University"
  pub fn is_org_suffix(&self, word: &str) -> bool {
    self.org_suffixes.contains(&word.trim_end_matches('.').to_lowercase())
  }

  /// Whether `word` is a geographical feature noun such as "River"
  pub fn is_location_noun(&self, word: &str) -> bool {
    self.location_nouns.contains(&word.to_lowercase())
  }

  /// Label of a known name (any case)
  pub fn label_of(&self, phrase: &str) -> Option<EntityLabel> {
    self.names.get(&phrase.to_lowercase()).copied()
  }
}

/// General English word list (lowercase)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
  words: HashSet<String>,
}

impl WordList {
  /// Parses the list
  pub fn parse(source: &str) -> Result<Self, AssetError> {
    Ok(Self {
      words: parse_word_set(AssetKind::WordList, source)?,
    })
  }

  /// Whether `word` is a common English word
  pub fn contains(&self, word: &str) -> bool {
    self.words.contains(word)
  }
}

/// All language assets, each present or absent.
///
/// Immutable once built; shared between requests behind `Arc`. Stages ask for
/// the assets they need and get [`AssetError::Missing`] when one is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBundle {
  sentence_model: Option<SentenceModel>,
  lexical_dictionary: Option<LexicalDictionary>,
  stopwords: Option<StopwordList>,
  tagger_model: Option<TaggerModel>,
  entity_gazetteer: Option<EntityGazetteer>,
  word_list: Option<WordList>,
}

impl AssetBundle {
  /// Bundle with no assets at all
  pub fn empty() -> Self {
    Self::default()
  }

  /// Bundle parsed from the copies compiled into the binary
  pub fn bundled() -> Result<Self, AssetError> {
    let mut bundle = Self::empty();
    for kind in AssetKind::ALL {
      bundle.insert_source(kind, kind.bundled_source())?;
    }
    Ok(bundle)
  }

  /// Parses `source` as `kind` and stores it, replacing any previous value
  pub fn insert_source(&mut self, kind: AssetKind, source: &str) -> Result<(), AssetError> {
    match kind {
      AssetKind::SentenceModel => self.sentence_model = Some(SentenceModel::parse(source)?),
      AssetKind::LexicalDictionary => {
        self.lexical_dictionary = Some(LexicalDictionary::parse(source)?)
      }
      AssetKind::Stopwords => self.stopwords = Some(StopwordList::parse(source)?),
      AssetKind::TaggerModel => self.tagger_model = Some(TaggerModel::parse(source)?),
      AssetKind::EntityChunker => self.entity_gazetteer = Some(EntityGazetteer::parse(source)?),
      AssetKind::WordList => self.word_list = Some(WordList::parse(source)?),
    }
    Ok(())
  }

  /// Returns the bundle with `kind` removed
  #[must_use]
  pub fn without(mut self, kind: AssetKind) -> Self {
    match kind {
      AssetKind::SentenceModel => self.sentence_model = None,
      AssetKind::LexicalDictionary => self.lexical_dictionary = None,
      AssetKind::Stopwords => self.stopwords = None,
      AssetKind::TaggerModel => self.tagger_model = None,
      AssetKind::EntityChunker => self.entity_gazetteer = None,
      AssetKind::WordList => self.word_list = None,
    }
    self
  }

  /// Whether `kind` is loaded
  pub fn contains(&self, kind: AssetKind) -> bool {
    match kind {
      AssetKind::SentenceModel => self.sentence_model.is_some(),
      AssetKind::LexicalDictionary => self.lexical_dictionary.is_some(),
      AssetKind::Stopwords => self.stopwords.is_some(),
      AssetKind::TaggerModel => self.tagger_model.is_some(),
      AssetKind::EntityChunker => self.entity_gazetteer.is_some(),
      AssetKind::WordList => self.word_list.is_some(),
    }
  }

  /// Loaded asset kinds
  pub fn available(&self) -> Vec<AssetKind> {
    AssetKind::ALL.into_iter().filter(|k| self.contains(*k)).collect()
  }

  /// Sentence model
  pub fn sentence_model(&self) -> Result<&SentenceModel, AssetError> {
    self.sentence_model.as_ref().ok_or(AssetError::Missing(AssetKind::SentenceModel))
  }

  /// Lexical dictionary
  pub fn lexical_dictionary(&self) -> Result<&LexicalDictionary, AssetError> {
    self.lexical_dictionary.as_ref().ok_or(AssetError::Missing(AssetKind::LexicalDictionary))
  }

  /// Stopword list
  pub fn stopwords(&self) -> Result<&StopwordList, AssetError> {
    self.stopwords.as_ref().ok_or(AssetError::Missing(AssetKind::Stopwords))
  }

  /// Tagger model
  pub fn tagger_model(&self) -> Result<&TaggerModel, AssetError> {
    self.tagger_model.as_ref().ok_or(AssetError::Missing(AssetKind::TaggerModel))
  }

  /// Entity gazetteer
  pub fn entity_gazetteer(&self) -> Result<&EntityGazetteer, AssetError> {
    self.entity_gazetteer.as_ref().ok_or(AssetError::Missing(AssetKind::EntityChunker))
  }

  /// Word list
  pub fn word_list(&self) -> Result<&WordList, AssetError> {
    self.word_list.as_ref().ok_or(AssetError::Missing(AssetKind::WordList))
  }
}
