//! Lancaster (Paice/Husk) stemmer
//!
//! Rules are written back to front: `"sei3y>"` reads "if the word ends in
//! `ies`, remove 3 letters, append `y`, then continue". A `*` after the
//! ending restricts the rule to words not yet modified, a final `.` stops
//! stemming after the rule fires.

use std::collections::HashMap;

use crate::stem::WordStemmer;

const RULES: &[&str] = &[
  "ai*2.", "a*1.", "bb1.", "city3s.", "ci2>", "cn1t>", "dd1.", "dei3y>", "deec2ss.", "dee1.",
  "de2>", "dooh4>", "e1>", "feil1v.", "fi2>", "gni3>", "gai3y.", "ga2>", "gg1.", "ht*2.",
  "hsiug5ct.", "hsi3>", "i*1.", "i1y>", "ji1d.", "juf1s.", "ju1d.", "jo1d.", "jeh1r.", "jrev1t.",
  "jsim2t.", "jn1d.", "j1s.", "lbaifi6.", "lbai4y.", "lba3>", "lbi3.", "lib2l>", "lc1.",
  "lufi4y.", "luf3>", "lu2.", "lai3>", "lau3>", "la2>", "ll1.", "mui3.", "mu*2.", "msi3>", "mm1.",
  "nois4j>", "noix4ct.", "noi3>", "nai3>", "na2>", "nee0.", "ne2>", "nn1.", "pihs4>", "pp1.",
  "re2>", "rae0.", "ra2.", "ro2>", "ru2>", "rr1.", "rt1>", "rei3y>", "sei3y>", "sis2.", "si2>",
  "ssen4>", "ss0.", "suo3>", "su*2.", "s*1>", "s0.", "tacilp4y.", "ta2>", "tnem4>", "tne3>",
  "tna3>", "tpir2b.", "tpro2b.", "tcud1.", "tpmus2.", "tpec2iv.", "tulo2v.", "tsis0.", "tsi3>",
  "tt1.", "uqi3.", "ugo1.", "vis3j>", "vie0.", "vi2>", "ylb1>", "yli3y>", "ylp0.", "yl2>",
  "ygo1.", "yhp1.", "ymo1.", "ypo1.", "yti3>", "yte3>", "ytl2.", "yrtsi5.", "yra3>", "yro3>",
  "yfi3.", "ycn2t>", "yca3>", "zi2>", "zy1s.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
  /// Ending in reading order
  ending: String,
  intact_only: bool,
  remove: usize,
  append: String,
  proceed: bool,
}

impl Rule {
  /// Parses `<reversed ending>[*]<digit><append>[>|.]`; `None` for malformed rules
  fn parse(rule: &str) -> Option<Self> {
    let reversed: String = rule.chars().take_while(char::is_ascii_lowercase).collect();
    if reversed.is_empty() {
      return None;
    }
    let mut rest = &rule[reversed.len()..];

    let intact_only = rest.starts_with('*');
    if intact_only {
      rest = &rest[1..];
    }

    let mut chars = rest.chars();
    let remove = chars.next()?.to_digit(10)? as usize;
    let rest = chars.as_str();

    let append: String = rest.chars().take_while(char::is_ascii_lowercase).collect();
    let proceed = match &rest[append.len()..] {
      ">" | "" => true,
      "." => false,
      _ => return None,
    };

    Some(Self {
      ending: reversed.chars().rev().collect(),
      intact_only,
      remove,
      append,
      proceed,
    })
  }
}

/// Lancaster stemmer
#[derive(Debug, Clone)]
pub struct LancasterStemmer {
  /// Rules indexed by the last letter of the ending
  rules: HashMap<char, Vec<Rule>>,
}

impl LancasterStemmer {
  /// Builds the stemmer from the standard rule table
  pub fn new() -> Self {
    let mut rules: HashMap<char, Vec<Rule>> = HashMap::new();
    for rule in RULES.iter().filter_map(|r| Rule::parse(r)) {
      if let Some(last) = rule.ending.chars().last() {
        rules.entry(last).or_default().push(rule);
      }
    }
    Self { rules }
  }
}

impl Default for LancasterStemmer {
  fn default() -> Self {
    Self::new()
  }
}

impl WordStemmer for LancasterStemmer {
  fn stem(&self, word: &str) -> String {
    let intact = word.to_lowercase();
    let mut word = intact.clone();

    loop {
      // last letter of the leading alphabetic run
      let Some(last) = word.chars().take_while(|c| c.is_alphabetic()).last() else {
        break;
      };
      let Some(candidates) = self.rules.get(&last) else {
        break;
      };

      let mut applied = false;
      for rule in candidates {
        if !word.ends_with(&rule.ending) {
          continue;
        }
        if rule.intact_only && word != intact {
          continue;
        }
        if !is_acceptable(&word, rule.remove) {
          continue;
        }

        let keep = word.chars().count() - rule.remove;
        word = word.chars().take(keep).collect::<String>() + &rule.append;
        if !rule.proceed {
          return word;
        }
        applied = true;
        break;
      }

      if !applied {
        break;
      }
    }

    word
  }
}

/// A stem must keep two letters if it starts with a vowel, otherwise three
/// letters with a vowel in the second or third position.
fn is_acceptable(word: &str, remove: usize) -> bool {
  let chars: Vec<char> = word.chars().collect();
  let is_vowel = |c: char| "aeiouy".contains(c);
  let Some(&first) = chars.first() else {
    return false;
  };
  let remaining = chars.len().saturating_sub(remove);

  if is_vowel(first) {
    remaining >= 2
  } else {
    remaining >= 3 && (is_vowel(chars[1]) || is_vowel(chars[2]))
  }
}
