//! Noun lemmatizer
//!
//! Irregular forms are looked up first. Otherwise the regular noun
//! detachment rules produce candidates, and the shortest candidate the
//! dictionary knows as a base form wins. Unknown words come back unchanged.

use crate::assets::LexicalDictionary;

/// Regular noun suffix rewrites `(suffix, replacement)`
const NOUN_RULES: &[(&str, &str)] = &[
  ("s", ""),
  ("ses", "s"),
  ("xes", "x"),
  ("zes", "z"),
  ("ches", "ch"),
  ("shes", "sh"),
  ("men", "man"),
  ("ies", "y"),
];

/// Lemmatizer over a [`LexicalDictionary`]
#[derive(Debug, Clone, Copy)]
pub struct Lemmatizer<'a> {
  dictionary: &'a LexicalDictionary,
}

impl<'a> Lemmatizer<'a> {
  /// Constructor
  pub fn new(dictionary: &'a LexicalDictionary) -> Self {
    Self { dictionary }
  }

  /// Base form of `word`, treated as a noun.
  ///
  /// Lookup is case-sensitive; the dictionary holds lowercase forms.
  pub fn lemmatize(&self, word: &str) -> String {
    if let Some(base) = self.dictionary.exception(word) {
      return base.to_string();
    }

    let mut candidates = vec![word.to_string()];
    for (suffix, replacement) in NOUN_RULES {
      if let Some(stem) = word.strip_suffix(suffix) {
        candidates.push(format!("{stem}{replacement}"));
      }
    }

    candidates
      .into_iter()
      .filter(|c| !c.is_empty() && self.dictionary.is_base_form(c))
      .min_by_key(|c| c.chars().count())
      .unwrap_or_else(|| word.to_string())
  }

  /// Lemmatizes every token
  pub fn lemmatize_all(&self, tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| self.lemmatize(t)).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn dictionary() -> LexicalDictionary {
    LexicalDictionary::parse("mice mouse\ndog\nbox\nchurch\ncity\nbus\nglass\nwoman\n").unwrap()
  }

  #[test]
  fn regular_plurals() {
    let dictionary = dictionary();
    let lemmatizer = Lemmatizer::new(&dictionary);
    assert_eq!(lemmatizer.lemmatize("dogs"), "dog");
    assert_eq!(lemmatizer.lemmatize("boxes"), "box");
    assert_eq!(lemmatizer.lemmatize("churches"), "church");
    assert_eq!(lemmatizer.lemmatize("cities"), "city");
    assert_eq!(lemmatizer.lemmatize("buses"), "bus");
  }

  #[test]
  fn base_forms_are_kept() {
    let dictionary = dictionary();
    let lemmatizer = Lemmatizer::new(&dictionary);
    assert_eq!(lemmatizer.lemmatize("glass"), "glass");
    assert_eq!(lemmatizer.lemmatize("bus"), "bus");
  }

  #[test]
  fn irregular_forms_use_exceptions() {
    let dictionary = dictionary();
    let lemmatizer = Lemmatizer::new(&dictionary);
    assert_eq!(lemmatizer.lemmatize("mice"), "mouse");
    assert_eq!(lemmatizer.lemmatize("women"), "woman");
  }

  #[test]
  fn unknown_and_capitalised_words_are_unchanged() {
    let dictionary = dictionary();
    let lemmatizer = Lemmatizer::new(&dictionary);
    assert_eq!(lemmatizer.lemmatize("xyzzies"), "xyzzies");
    assert_eq!(lemmatizer.lemmatize("Dogs"), "Dogs");
    assert_eq!(lemmatizer.lemmatize("."), ".");
  }
}
