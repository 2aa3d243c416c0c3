//! Treebank-style word tokenizer
//!
//! Text is split into sentences first, then every sentence is rewritten by a
//! fixed sequence of regex rules that pad punctuation, quotes and clitics with
//! spaces. The padded sentence is finally split on whitespace.

use regex::Regex;
use tracing::trace;

use crate::errors::TokenizerError;
use crate::tokenizer::SentenceTokenizer;

/// A compiled `pattern → replacement` rewrite
#[derive(Debug, Clone)]
struct RewriteRule {
  regex: Regex,
  replacement: &'static str,
}

impl RewriteRule {
  fn compile(pattern: &'static str, replacement: &'static str) -> Result<Self, TokenizerError> {
    let regex = Regex::new(pattern).map_err(|e| TokenizerError::InvalidRule {
      pattern,
      reason: e.to_string(),
    })?;
    Ok(Self { regex, replacement })
  }

  fn apply(&self, text: &str) -> String {
    self.regex.replace_all(text, self.replacement).into_owned()
  }
}

fn compile_all(
  rules: &[(&'static str, &'static str)],
) -> Result<Vec<RewriteRule>, TokenizerError> {
  rules.iter().map(|(pattern, replacement)| RewriteRule::compile(pattern, replacement)).collect()
}

/// Opening quotes
const STARTING_QUOTES: &[(&str, &str)] = &[
  (r"([«“‘„]|`+)", " ${1} "),
  (r#"^""#, "``"),
  (r"(``)", " ${1} "),
  (r#"([ (\[{<])("|'')"#, "${1} `` "),
];

/// Punctuation; the period rule only fires at the end of a sentence
const PUNCTUATION: &[(&str, &str)] = &[
  (r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2} ${3} "),
  (r"([:,])([^\d])", " ${1} ${2}"),
  (r"([:,])$", " ${1} "),
  (r"\.{2,}", " $0 "),
  (r"[;@#$%&]", " $0 "),
  (r"[?!]", " $0 "),
  (r"([^'])' ", "${1} ' "),
  (r"[*]", " $0 "),
];

/// Brackets and double dashes
const BRACKETS_AND_DASHES: &[(&str, &str)] = &[(r"[\]\[(){}<>]", " $0 "), (r"--", " -- ")];

/// Closing quotes and clitics; the input is padded with spaces beforehand
const ENDING_QUOTES: &[(&str, &str)] = &[
  (r"([»”’])", " ${1} "),
  (r"''", " '' "),
  (r#"""#, " '' "),
  (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
  (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
];

/// Fused forms such as "cannot" and "gonna"
const CONTRACTIONS: &[(&str, &str)] = &[
  (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
  (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
  (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
  (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
  (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
  (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
  (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
  (r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
  (r"(?i) ('t)(is)\b", " ${1} ${2} "),
  (r"(?i) ('t)(was)\b", " ${1} ${2} "),
];

/// Word tokenizer
///
/// - Rules are compiled once in [`WordTokenizer::new`]
/// - `Clone + Send + Sync`; shared by all requests
#[derive(Debug, Clone)]
pub struct WordTokenizer {
  starting_quotes: Vec<RewriteRule>,
  punctuation: Vec<RewriteRule>,
  brackets_and_dashes: Vec<RewriteRule>,
  ending_quotes: Vec<RewriteRule>,
  contractions: Vec<RewriteRule>,
}

impl WordTokenizer {
  /// Compiles the rewrite rules
  pub fn new() -> Result<Self, TokenizerError> {
    Ok(Self {
      starting_quotes: compile_all(STARTING_QUOTES)?,
      punctuation: compile_all(PUNCTUATION)?,
      brackets_and_dashes: compile_all(BRACKETS_AND_DASHES)?,
      ending_quotes: compile_all(ENDING_QUOTES)?,
      contractions: compile_all(CONTRACTIONS)?,
    })
  }

  /// Splits `text` into sentences, then each sentence into word tokens
  pub fn tokenize(&self, sentences: &SentenceTokenizer<'_>, text: &str) -> Vec<String> {
    let tokens: Vec<String> = sentences
      .tokenize(text)
      .iter()
      .flat_map(|sentence| self.tokenize_sentence(sentence))
      .collect();

    trace!(tokens = tokens.len(), "word tokenization completed");
    tokens
  }

  /// Tokenizes a single sentence
  pub fn tokenize_sentence(&self, sentence: &str) -> Vec<String> {
    let mut text = sentence.to_string();

    for rule in self.starting_quotes.iter().chain(&self.punctuation).chain(&self.brackets_and_dashes) {
      text = rule.apply(&text);
    }

    text = format!(" {text} ");

    for rule in self.ending_quotes.iter().chain(&self.contractions) {
      text = rule.apply(&text);
    }

    text.split_whitespace().map(str::to_string).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assets::SentenceModel;

  fn tokenize(text: &str) -> Vec<String> {
    let model = SentenceModel::parse("mr\ndr\n").unwrap();
    let sentences = SentenceTokenizer::new(&model);
    WordTokenizer::new().unwrap().tokenize(&sentences, text)
  }

  #[test]
  fn splits_final_period() {
    assert_eq!(
      tokenize("The quick brown fox jumps."),
      vec!["The", "quick", "brown", "fox", "jumps", "."]
    );
  }

  #[test]
  fn splits_clitics() {
    assert_eq!(
      tokenize("I can't believe it's not butter!"),
      vec!["I", "ca", "n't", "believe", "it", "'s", "not", "butter", "!"]
    );
  }

  #[test]
  fn converts_double_quotes() {
    assert_eq!(
      tokenize("He said \"hello\" to me."),
      vec!["He", "said", "``", "hello", "''", "to", "me", "."]
    );
  }

  #[test]
  fn separates_commas_and_brackets() {
    assert_eq!(
      tokenize("Hi, there (friend)."),
      vec!["Hi", ",", "there", "(", "friend", ")", "."]
    );
  }

  #[test]
  fn keeps_numbers_with_commas_and_abbreviation_periods() {
    assert_eq!(
      tokenize("Mr. Smith paid 1,000 dollars."),
      vec!["Mr.", "Smith", "paid", "1,000", "dollars", "."]
    );
  }

  #[test]
  fn splits_fused_forms() {
    assert_eq!(tokenize("I cannot go"), vec!["I", "can", "not", "go"]);
    assert_eq!(tokenize("gonna win"), vec!["gon", "na", "win"]);
  }

  #[test]
  fn every_sentence_gets_its_period() {
    assert_eq!(tokenize("Hello world. Goodbye."), vec!["Hello", "world", ".", "Goodbye", "."]);
  }

  #[test]
  fn ellipsis_and_double_dash() {
    assert_eq!(tokenize("Wait... no--yes"), vec!["Wait", "...", "no", "--", "yes"]);
  }
}
