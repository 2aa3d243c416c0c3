//! Part-of-speech tagger (Penn Treebank tag set)
//!
//! Tagging runs in two passes over the word tokens:
//!
//! 1. An initial tag per token: punctuation table, lexicon, token shape
//!    (numbers, capitalisation, hyphens), then suffix rules.
//! 2. Contextual repairs that look at neighbouring tags.

use tracing::trace;

use crate::assets::TaggerModel;
use crate::models::PosTag;
use crate::tagger::at_sentence_start;

/// Forms of "have" and "be" that take a participle
const AUXILIARIES: &[&str] = &[
  "have", "has", "had", "having", "'ve", "'d", "be", "is", "are", "was", "were", "been", "being",
  "am", "'re", "'m",
];

/// Tags that may follow a third-person verb
const AFTER_VERB: &[&str] = &["DT", "IN", "PRP$", ".", ",", "RB", "TO", "JJ", "CD", "PRP"];

/// Closed-class tags; a capitalised form still takes these from the
/// lowercase entry ("I", "She" mid-sentence)
const CLOSED_CLASS: &[&str] = &[
  "PRP", "PRP$", "DT", "PDT", "IN", "CC", "TO", "EX", "WDT", "WP", "WP$", "WRB", "RP", "UH",
];

/// Suffix rules, checked in order against the lowercase token
const SUFFIX_RULES: &[(&str, usize, &str)] = &[
  // (suffix, minimum token length, tag)
  ("ing", 5, "VBG"),
  ("ed", 4, "VBD"),
  ("ly", 4, "RB"),
  ("ness", 5, "NN"),
  ("ment", 5, "NN"),
  ("tion", 5, "NN"),
  ("sion", 5, "NN"),
  ("ity", 4, "NN"),
  ("ism", 4, "NN"),
  ("ship", 5, "NN"),
  ("hood", 5, "NN"),
  ("ance", 5, "NN"),
  ("ence", 5, "NN"),
  ("ist", 4, "NN"),
  ("ous", 4, "JJ"),
  ("ful", 4, "JJ"),
  ("ive", 4, "JJ"),
  ("able", 5, "JJ"),
  ("ible", 5, "JJ"),
  ("less", 5, "JJ"),
  ("ish", 4, "JJ"),
  ("ary", 4, "JJ"),
  ("ic", 4, "JJ"),
  ("al", 4, "JJ"),
  ("est", 5, "JJS"),
  ("er", 4, "NN"),
  ("or", 4, "NN"),
];

/// Tag for punctuation tokens
fn punctuation_tag(token: &str) -> Option<&'static str> {
  let tag = match token {
    "." | "!" | "?" => ".",
    "," => ",",
    ";" | ":" | "..." | "--" | "-" => ":",
    "(" | "[" | "{" => "(",
    ")" | "]" | "}" => ")",
    "``" => "``",
    "''" | "'" => "''",
    "$" => "$",
    "#" => "#",
    "%" => "NN",
    "&" => "CC",
    _ => return None,
  };
  Some(tag)
}

fn is_number(token: &str) -> bool {
  token.chars().any(|c| c.is_ascii_digit())
    && token.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-' | '/' | ':'))
}

fn is_capitalized(token: &str) -> bool {
  token.chars().next().is_some_and(char::is_uppercase)
}

fn is_all_caps(token: &str) -> bool {
  token.chars().count() >= 2 && token.chars().all(|c| !c.is_lowercase())
}

/// Lexicon and rule based tagger over a [`TaggerModel`]
#[derive(Debug, Clone, Copy)]
pub struct PosTagger<'a> {
  model: &'a TaggerModel,
}

impl<'a> PosTagger<'a> {
  /// Constructor
  pub fn new(model: &'a TaggerModel) -> Self {
    Self { model }
  }

  /// Tags every token; the output has one entry per input token
  pub fn tag(&self, tokens: &[String]) -> Vec<PosTag> {
    let mut tags: Vec<String> = tokens
      .iter()
      .enumerate()
      .map(|(i, token)| {
        let sentence_start = at_sentence_start(tokens[..i].iter().map(String::as_str));
        self.initial_tag(token, sentence_start).to_string()
      })
      .collect();

    apply_context_rules(tokens, &mut tags);

    trace!(tokens = tokens.len(), "pos tagging completed");
    tokens.iter().zip(tags).map(|(token, tag)| PosTag::new(token.clone(), tag)).collect()
  }

  fn initial_tag(&self, token: &str, sentence_start: bool) -> &'a str {
    if let Some(tag) = punctuation_tag(token) {
      return tag;
    }
    if let Some(tag) = self.model.lookup(token) {
      return tag;
    }

    let lower = token.to_lowercase();
    let capitalized = is_capitalized(token);
    if let Some(tag) = self.model.lookup(&lower)
      && (!capitalized
        || sentence_start
        || (CLOSED_CLASS.contains(&tag) && !is_all_caps(token)))
    {
      return tag;
    }

    if is_number(token) {
      return "CD";
    }
    if capitalized {
      return "NNP";
    }
    if token.contains('-') {
      return "JJ";
    }

    suffix_tag(&lower)
  }
}

fn suffix_tag(lower: &str) -> &'static str {
  let len = lower.chars().count();
  for (suffix, min_len, tag) in SUFFIX_RULES {
    if len >= *min_len && lower.ends_with(suffix) {
      return tag;
    }
  }

  if len > 3 && lower.ends_with('s') && !["ss", "us", "is"].iter().any(|e| lower.ends_with(e)) {
    return "NNS";
  }

  "NN"
}

fn apply_context_rules(tokens: &[String], tags: &mut [String]) {
  for i in 0..tags.len() {
    let prev = i.checked_sub(1).map(|p| tags[p].clone());
    let prev = prev.as_deref();

    // "to run", "will run"
    if matches!(prev, Some("TO" | "MD")) && matches!(tags[i].as_str(), "NN" | "VBP") {
      tags[i] = "VB".to_string();
      continue;
    }

    // "the dog runs ."
    if tags[i] == "NNS" && matches!(prev, Some("NN" | "NNP" | "PRP")) {
      let next = tags.get(i + 1).map(String::as_str);
      if next.is_none_or(|n| AFTER_VERB.contains(&n)) {
        tags[i] = "VBZ".to_string();
        continue;
      }
    }

    // "has walked", "was taken by"
    if tags[i] == "VBD" {
      let start = i.saturating_sub(2);
      if tokens[start..i].iter().any(|t| AUXILIARIES.contains(&t.to_lowercase().as_str())) {
        tags[i] = "VBN".to_string();
        continue;
      }
    }

    // "it 's"
    if tokens[i] == "'s" && prev == Some("PRP") {
      tags[i] = "VBZ".to_string();
    }
  }
}
