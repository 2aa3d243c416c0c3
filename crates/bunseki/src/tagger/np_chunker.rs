//! Noun-phrase chunker for the pattern `DT? JJ* NN.*+`

use crate::models::PosTag;

/// Noun-phrase chunker
///
/// Scans left to right; at each position the longest match is taken and the
/// scan resumes after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounPhraseChunker;

impl NounPhraseChunker {
  /// Constructor
  pub fn new() -> Self {
    Self
  }

  /// Surface text of every noun phrase, in document order
  pub fn chunk(&self, tagged: &[PosTag]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < tagged.len() {
      match match_at(tagged, i) {
        Some(end) => {
          let phrase: Vec<&str> = tagged[i..end].iter().map(|t| t.token.as_str()).collect();
          chunks.push(phrase.join(" "));
          i = end;
        }
        None => i += 1,
      }
    }

    chunks
  }
}

/// End (exclusive) of a noun phrase starting at `start`
fn match_at(tagged: &[PosTag], start: usize) -> Option<usize> {
  let mut j = start;
  if tagged.get(j).is_some_and(|t| t.tag == "DT") {
    j += 1;
  }
  while tagged.get(j).is_some_and(|t| t.tag == "JJ") {
    j += 1;
  }
  let nouns_start = j;
  while tagged.get(j).is_some_and(PosTag::is_noun) {
    j += 1;
  }
  (j > nouns_start).then_some(j)
}
