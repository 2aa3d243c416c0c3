//! Named-entity chunker
//!
//! Maximal runs of proper nouns (`NNP`, `NNPS`) are entity candidates.
//! Each run is labelled from the gazetteer, from cue words inside or before
//! it, and from its shape; anything left over is taken to be a person.

use crate::assets::{EntityGazetteer, WordList};
use crate::models::{EntityLabel, NamedEntity, PosTag};
use crate::tagger::at_sentence_start;

/// Prepositions that introduce places
const LOCATIVE_PREPOSITIONS: &[&str] = &["in", "at", "from", "to", "near"];

/// Entity chunker over an [`EntityGazetteer`] and a [`WordList`]
#[derive(Debug, Clone, Copy)]
pub struct EntityChunker<'a> {
  gazetteer: &'a EntityGazetteer,
  words: &'a WordList,
}

impl<'a> EntityChunker<'a> {
  /// Constructor
  pub fn new(gazetteer: &'a EntityGazetteer, words: &'a WordList) -> Self {
    Self { gazetteer, words }
  }

  /// Entity mentions in document order
  pub fn chunk(&self, tagged: &[PosTag]) -> Vec<NamedEntity> {
    let mut entities = Vec::new();
    let mut i = 0;

    while i < tagged.len() {
      if !tagged[i].is_proper_noun() {
        i += 1;
        continue;
      }
      let start = i;
      while i < tagged.len() && tagged[i].is_proper_noun() {
        i += 1;
      }
      if let Some(entity) = self.classify(tagged, start, i) {
        entities.push(entity);
      }
    }

    entities
  }

  /// Labels the run `tagged[start..end]`; `None` when it is not an entity
  fn classify(&self, tagged: &[PosTag], start: usize, end: usize) -> Option<NamedEntity> {
    let titles =
      tagged[start..end].iter().take_while(|t| self.gazetteer.is_title(&t.token)).count();
    let name_start = start + titles;
    if name_start == end {
      return None;
    }

    let names: Vec<&str> = tagged[name_start..end].iter().map(|t| t.token.as_str()).collect();
    let text = names.join(" ");
    let previous = name_start.checked_sub(1).map(|p| tagged[p].token.as_str());
    let sentence_initial =
      at_sentence_start(tagged[..name_start].iter().map(|t| t.token.as_str()));

    let label = if names.iter().any(|n| self.gazetteer.is_org_suffix(n)) {
      EntityLabel::Organization
    } else if let Some(label) = self.gazetteer.label_of(&text) {
      label
    } else if titles > 0 {
      EntityLabel::Person
    } else if sentence_initial && names.len() == 1 && self.is_common_word(names[0]) {
      // a capitalised common word at the start of a sentence
      return None;
    } else if let Some(label) = names.iter().find_map(|n| self.gazetteer.label_of(n)) {
      label
    } else if names.iter().any(|n| self.gazetteer.is_location_noun(n)) {
      EntityLabel::Location
    } else if names.iter().all(|n| is_acronym(n)) {
      EntityLabel::Organization
    } else if previous.is_some_and(|p| LOCATIVE_PREPOSITIONS.contains(&p.to_lowercase().as_str()))
    {
      EntityLabel::Gpe
    } else {
      EntityLabel::Person
    };

    Some(NamedEntity { label, text })
  }

  /// Lowercase form, or its singular, is in the word list
  fn is_common_word(&self, token: &str) -> bool {
    let lower = token.to_lowercase();
    self.words.contains(&lower) || lower.strip_suffix('s').is_some_and(|w| self.words.contains(w))
  }
}

fn is_acronym(token: &str) -> bool {
  token.chars().count() >= 2 && token.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn gazetteer() -> EntityGazetteer {
    EntityGazetteer::parse(
      "TITLE dr\nTITLE mr\nORG_SUFFIX inc\nORG_SUFFIX university\nLOC_NOUN river\n\
       GPE paris\nGPE new york\nPERSON barack\nORGANIZATION google\n",
    )
    .unwrap()
  }

  fn words() -> WordList {
    WordList::parse("hello\nthe\n").unwrap()
  }

  fn tagged(pairs: &[(&str, &str)]) -> Vec<PosTag> {
    pairs.iter().map(|(w, t)| PosTag::new(*w, *t)).collect()
  }

  fn chunk(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    let gazetteer = gazetteer();
    let words = words();
    EntityChunker::new(&gazetteer, &words)
      .chunk(&tagged(pairs))
      .into_iter()
      .map(|e| (e.label.to_string(), e.text))
      .collect()
  }

  fn entity(label: &str, text: &str) -> (String, String) {
    (label.to_string(), text.to_string())
  }

  #[test]
  fn gazetteer_names() {
    assert_eq!(
      chunk(&[("Barack", "NNP"), ("Obama", "NNP"), ("visited", "VBD"), ("Paris", "NNP")]),
      vec![entity("PERSON", "Barack Obama"), entity("GPE", "Paris")]
    );
  }

  #[test]
  fn multi_word_gazetteer_entry() {
    assert_eq!(
      chunk(&[("I", "PRP"), ("love", "VBP"), ("New", "NNP"), ("York", "NNP")]),
      vec![entity("GPE", "New York")]
    );
  }

  #[test]
  fn organisation_suffix_and_acronym() {
    assert_eq!(
      chunk(&[("She", "PRP"), ("joined", "VBD"), ("Acme", "NNP"), ("Inc.", "NNP")]),
      vec![entity("ORGANIZATION", "Acme Inc.")]
    );
    assert_eq!(
      chunk(&[("He", "PRP"), ("works", "VBZ"), ("for", "IN"), ("ACME", "NNP")]),
      vec![entity("ORGANIZATION", "ACME")]
    );
  }

  #[test]
  fn title_marks_person_and_is_excluded() {
    assert_eq!(
      chunk(&[("He", "PRP"), ("met", "VBD"), ("Dr.", "NNP"), ("Watson", "NNP")]),
      vec![entity("PERSON", "Watson")]
    );
  }

  #[test]
  fn location_noun_and_locative_preposition() {
    assert_eq!(
      chunk(&[("the", "DT"), ("Thames", "NNP"), ("River", "NNP")]),
      vec![entity("LOCATION", "Thames River")]
    );
    assert_eq!(
      chunk(&[("he", "PRP"), ("lives", "VBZ"), ("in", "IN"), ("Springfield", "NNP")]),
      vec![entity("GPE", "Springfield")]
    );
  }

  #[test]
  fn sentence_initial_common_word_is_skipped() {
    assert!(chunk(&[("Hello", "NNP"), ("there", "RB")]).is_empty());
  }

  #[test]
  fn sentence_initial_plural_of_common_word_is_skipped() {
    assert!(chunk(&[("Hellos", "NNP"), ("rang", "VBD"), ("out", "RP")]).is_empty());
  }

  #[test]
  fn common_word_after_closing_quote_is_skipped() {
    assert!(
      chunk(&[("!", "."), ("''", "''"), ("Hello", "NNP"), ("again", "RB")]).is_empty()
    );
  }

  #[test]
  fn no_proper_nouns_no_entities() {
    assert!(chunk(&[("the", "DT"), ("dog", "NN")]).is_empty());
  }
}
