//! Porter stemmer (M.F. Porter, 1980)
//!
//! Carries the widely used extensions to the published rules:
//! - a short list of irregular forms ("skies" → "sky", "dying" → "die")
//! - four-letter `-ies` / `-ied` words keep their `e` ("dies" → "die")
//! - a final `y` becomes `i` only after a consonant ("buying" → "buy")
//! - `-alli` is reduced before the other step 2 rules, and `-fulli` → `-ful`
//!
//! Works on a byte buffer `b` where `b[..=k]` is the current word and `j` marks
//! the end of the stem left by the last successful `ends` check. Both are
//! signed so that an empty stem (`j == -1`) can be represented.

use crate::stem::WordStemmer;

/// Irregular forms stemmed by lookup
const IRREGULAR_FORMS: &[(&str, &str)] = &[
  ("skies", "sky"),
  ("sky", "sky"),
  ("dying", "die"),
  ("lying", "lie"),
  ("tying", "tie"),
  ("news", "news"),
  ("innings", "inning"),
  ("inning", "inning"),
  ("outings", "outing"),
  ("outing", "outing"),
  ("cannings", "canning"),
  ("canning", "canning"),
  ("howe", "howe"),
  ("proceed", "proceed"),
  ("exceed", "exceed"),
  ("succeed", "succeed"),
];

/// Porter stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
  /// Constructor
  pub fn new() -> Self {
    Self
  }
}

impl WordStemmer for PorterStemmer {
  fn stem(&self, word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some((_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == lower) {
      return (*stem).to_string();
    }
    if lower.len() <= 2 || !lower.bytes().all(|c| c.is_ascii_lowercase()) {
      return lower;
    }

    let mut state = Stem::new(lower.into_bytes());
    state.step1ab();
    if state.k > 0 {
      state.step1c();
      state.step2();
      state.step3();
      state.step4();
      state.step5();
    }
    state.finish()
  }
}

struct Stem {
  b: Vec<u8>,
  k: isize,
  j: isize,
}

impl Stem {
  fn new(b: Vec<u8>) -> Self {
    let k = b.len() as isize - 1;
    Self { b, k, j: 0 }
  }

  fn finish(mut self) -> String {
    self.b.truncate((self.k + 1) as usize);
    String::from_utf8_lossy(&self.b).into_owned()
  }

  fn at(&self, i: isize) -> u8 {
    self.b[i as usize]
  }

  /// Whether `b[i]` is a consonant
  fn cons(&self, i: isize) -> bool {
    match self.at(i) {
      b'a' | b'e' | b'i' | b'o' | b'u' => false,
      b'y' => i == 0 || !self.cons(i - 1),
      _ => true,
    }
  }

  /// Number of VC sequences in `b[..=j]`
  fn m(&self) -> usize {
    let mut n = 0;
    let mut i = 0;
    loop {
      if i > self.j {
        return n;
      }
      if !self.cons(i) {
        break;
      }
      i += 1;
    }
    i += 1;
    loop {
      loop {
        if i > self.j {
          return n;
        }
        if self.cons(i) {
          break;
        }
        i += 1;
      }
      i += 1;
      n += 1;
      loop {
        if i > self.j {
          return n;
        }
        if !self.cons(i) {
          break;
        }
        i += 1;
      }
      i += 1;
    }
  }

  fn vowel_in_stem(&self) -> bool {
    (0..=self.j).any(|i| !self.cons(i))
  }

  /// Whether `b[i-1..=i]` is a double consonant
  fn double_cons(&self, i: isize) -> bool {
    i >= 1 && self.at(i) == self.at(i - 1) && self.cons(i)
  }

  /// Whether `b[i-2..=i]` is consonant-vowel-consonant and the last is not w, x or y
  fn cvc(&self, i: isize) -> bool {
    if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
      return false;
    }
    !matches!(self.at(i), b'w' | b'x' | b'y')
  }

  /// Whether `b[..=k]` ends with `suffix`; sets `j` on success
  fn ends(&mut self, suffix: &str) -> bool {
    let len = suffix.len() as isize;
    if len > self.k + 1 {
      return false;
    }
    let start = (self.k - len + 1) as usize;
    if &self.b[start..=self.k as usize] != suffix.as_bytes() {
      return false;
    }
    self.j = self.k - len;
    true
  }

  /// Replaces `b[j+1..=k]` with `s`
  fn set_to(&mut self, s: &str) {
    self.b.truncate((self.j + 1) as usize);
    self.b.extend_from_slice(s.as_bytes());
    self.k = self.j + s.len() as isize;
  }

  fn replace_if_measured(&mut self, s: &str) {
    if self.m() > 0 {
      self.set_to(s);
    }
  }

  /// Plurals and -ed / -ing
  fn step1ab(&mut self) {
    if self.at(self.k) == b's' {
      if self.ends("sses") {
        self.k -= 2;
      } else if self.ends("ies") {
        // "dies" → "die", "ponies" → "poni"
        self.set_to(if self.k == 3 { "ie" } else { "i" });
      } else if self.at(self.k - 1) != b's' {
        self.k -= 1;
      }
    }

    if self.ends("ied") {
      self.set_to(if self.k == 3 { "ie" } else { "i" });
      return;
    }

    if self.ends("eed") {
      if self.m() > 0 {
        self.k -= 1;
      }
    } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
      self.k = self.j;
      if self.ends("at") {
        self.set_to("ate");
      } else if self.ends("bl") {
        self.set_to("ble");
      } else if self.ends("iz") {
        self.set_to("ize");
      } else if self.double_cons(self.k) {
        self.k -= 1;
        if matches!(self.at(self.k), b'l' | b's' | b'z') {
          self.k += 1;
        }
      } else if self.m() == 1 && self.cvc(self.k) {
        self.set_to("e");
      }
    }
  }

  /// Terminal y → i after a consonant that is not the first letter
  fn step1c(&mut self) {
    if self.ends("y") && self.j > 0 && self.cons(self.j) {
      let k = self.k as usize;
      self.b[k] = b'i';
    }
  }

  /// Double suffixes → single ones
  fn step2(&mut self) {
    if self.k < 1 {
      return;
    }
    if self.ends("alli") && self.m() > 0 {
      self.set_to("al");
      self.step2();
      return;
    }
    // measured on the stem including the "l"
    if self.ends("logi") {
      self.j += 1;
      self.replace_if_measured("og");
      return;
    }

    const RULES: &[(&str, &str)] = &[
      ("ational", "ate"),
      ("tional", "tion"),
      ("enci", "ence"),
      ("anci", "ance"),
      ("izer", "ize"),
      ("bli", "ble"),
      ("alli", "al"),
      ("entli", "ent"),
      ("eli", "e"),
      ("ousli", "ous"),
      ("ization", "ize"),
      ("ation", "ate"),
      ("ator", "ate"),
      ("alism", "al"),
      ("iveness", "ive"),
      ("fulness", "ful"),
      ("ousness", "ous"),
      ("aliti", "al"),
      ("iviti", "ive"),
      ("biliti", "ble"),
      ("fulli", "ful"),
    ];
    self.apply_first(RULES);
  }

  /// -ic-, -full, -ness etc.
  fn step3(&mut self) {
    const RULES: &[(&str, &str)] = &[
      ("icate", "ic"),
      ("ative", ""),
      ("alize", "al"),
      ("iciti", "ic"),
      ("ical", "ic"),
      ("ful", ""),
      ("ness", ""),
    ];
    self.apply_first(RULES);
  }

  /// Applies the first rule whose suffix matches, if the stem is measured
  fn apply_first(&mut self, rules: &[(&str, &str)]) {
    if self.k < 1 {
      return;
    }
    for (suffix, replacement) in rules {
      if self.ends(suffix) {
        self.replace_if_measured(replacement);
        return;
      }
    }
  }

  /// Removes -ant, -ence etc. in context <c>vcvc<v>
  fn step4(&mut self) {
    const SUFFIXES: &[&str] = &[
      "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ou", "ism",
      "ate", "iti", "ous", "ive", "ize",
    ];
    if self.k < 1 {
      return;
    }

    let mut matched = SUFFIXES.iter().any(|suffix| self.ends(suffix));
    if !matched && self.ends("ion") && self.j >= 0 && matches!(self.at(self.j), b's' | b't') {
      matched = true;
    }

    if matched && self.m() > 1 {
      self.k = self.j;
    }
  }

  /// Removes a final -e and reduces -ll
  fn step5(&mut self) {
    self.j = self.k;
    if self.at(self.k) == b'e' {
      let a = self.m();
      if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
        self.k -= 1;
      }
    }
    if self.at(self.k) == b'l' && self.double_cons(self.k) && self.m() > 1 {
      self.k -= 1;
    }
  }
}
