// crates/bunseki/src/service.rs

//! TextAnalyzer: bunseki クレートの統合ファサード。
//!
//! 1 リクエスト = 1 回の `analyze` 呼び出し。各ステージは生テキストから
//! 独立に実行され、失敗したステージはログを出したうえで空の値に置き換わる。
//! NER と名詞句チャンクだけは品詞タグの結果に依存する。
//!
//! HTTP 層などの外部からは、この構造体だけを意識すればよい。

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::assets::AssetBundle;
use crate::config::{AnalyzerConfig, SummarizerKind};
use crate::errors::{BunsekiResult, StageError, ValidationError};
use crate::lexicon::{Lemmatizer, StopwordFilter};
use crate::models::{
  AnalysisRequest, AnalysisResult, NamedEntity, PosTag, StemmerChoice, TokenizationMode,
};
use crate::stem::Stemmers;
use crate::summarizer::{LeadSentenceSummarizer, Summarizer, TextRankSummarizer};
use crate::tagger::{EntityChunker, NounPhraseChunker, PosTagger};
use crate::tokenizer::{BlanklineTokenizer, SentenceTokenizer, WordTokenizer, whitespace_tokenize};

/// 要約ステージが失敗したときに `summary` に入る文言
pub const SUMMARY_FAILED_MESSAGE: &str =
  "Text too short for summarization or summarization failed.";

/// 上流ステージの名前（NER / チャンクの失敗理由に使う）
const POS_STAGE: &str = "pos_tagging";

/// bunseki クレートの統合ファサード。
///
/// - アセットは `Arc<AssetBundle>` で全リクエストから共有（読み取り専用）
/// - トークナイザー・ステマー・要約器は構築時に 1 度だけ作る
/// - `Send + Sync` なので `Arc<TextAnalyzer>` で並列に呼び出せる
#[derive(Debug)]
pub struct TextAnalyzer {
  assets: Arc<AssetBundle>,
  word_tokenizer: WordTokenizer,
  blankline_tokenizer: BlanklineTokenizer,
  stemmers: Stemmers,
  text_rank: TextRankSummarizer,
  lead: LeadSentenceSummarizer,
  summarizer_kind: SummarizerKind,
  max_text_bytes: usize,
}

impl TextAnalyzer {
  /// 初期化
  ///
  /// # 処理フロー
  /// 1. 設定の妥当性を検証
  /// 2. トークナイザーのルールをコンパイル
  /// 3. ステマー・要約器を構築
  ///
  /// アセットの欠落はエラーにしない（該当ステージがフォールバックする）。
  pub fn new(assets: Arc<AssetBundle>, config: &AnalyzerConfig) -> BunsekiResult<Self> {
    // ConfigError は #[from] で BunsekiError に自動変換
    config.validate()?;

    let missing: Vec<String> = crate::assets::AssetKind::ALL
      .iter()
      .filter(|k| !assets.contains(**k))
      .map(ToString::to_string)
      .collect();
    if !missing.is_empty() {
      warn!(?missing, "assets missing; dependent stages will return fallbacks");
    }

    Ok(Self {
      assets,
      word_tokenizer: WordTokenizer::new()?,
      blankline_tokenizer: BlanklineTokenizer::new()?,
      stemmers: Stemmers::new(),
      text_rank: TextRankSummarizer::new(config.summary_word_count()),
      lead: LeadSentenceSummarizer::new(),
      summarizer_kind: config.summarizer(),
      max_text_bytes: config.max_text_bytes(),
    })
  }

  /// コンパイル済みアセットとデフォルト設定で初期化するヘルパー。
  pub fn with_bundled_assets() -> BunsekiResult<Self> {
    Self::new(Arc::new(AssetBundle::bundled()?), &AnalyzerConfig::default())
  }

  /// 共有アセットへの参照を返す。
  pub fn assets(&self) -> &AssetBundle {
    &self.assets
  }

  /// リクエストを検証する。
  ///
  /// # エラー
  /// - テキストが空または空白のみ
  /// - テキストが `max_text_bytes` を超える
  pub fn validate(&self, request: &AnalysisRequest) -> Result<(), ValidationError> {
    if request.text.trim().is_empty() {
      return Err(ValidationError::EmptyText);
    }
    if request.text.len() > self.max_text_bytes {
      return Err(ValidationError::TextTooLong {
        actual: request.text.len(),
        max: self.max_text_bytes,
      });
    }
    Ok(())
  }

  /// テキストを解析する。
  ///
  /// 検証エラー以外で失敗することはない。各ステージのエラーはログに出し、
  /// そのステージの空の値に置き換える。
  pub fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ValidationError> {
    self.validate(request)?;

    let text = request.text.as_str();
    debug!(
      text_bytes = text.len(),
      tokenization = %request.tokenization,
      stemmer = ?request.stemmer,
      lemmatize = request.lemmatize,
      remove_stopwords = request.remove_stopwords,
      ngram_size = request.ngram_size,
      summarize = request.summarize,
      "analysis started"
    );

    // 単語分割は全ステージ共通なので 1 度だけ行い、結果（エラー含む）を共有する
    let words = self.word_tokens(text);

    let tokens = isolate("tokenization", self.tokens(request.tokenization, text, &words), || {
      whitespace_tokenize(text)
    });

    let stemmed = if request.stemmer != StemmerChoice::None {
      isolate(
        "stemming",
        words.clone().map(|w| self.stemmers.stem_all(request.stemmer, &w)),
        Vec::new,
      )
    } else {
      Vec::new()
    };

    let lemmatized = if request.lemmatize {
      isolate("lemmatization", self.lemmatize(&words), Vec::new)
    } else {
      Vec::new()
    };

    let filtered = if request.remove_stopwords {
      isolate("stopword_removal", self.remove_stopwords(&words), Vec::new)
    } else {
      Vec::new()
    };

    let ngrams = if request.ngram_size > 1 {
      isolate("ngrams", words.clone().map(|w| ngrams(&w, request.ngram_size)), Vec::new)
    } else {
      Vec::new()
    };

    let tagged = self.pos_tags(&words);
    let named_entities = isolate("ner", self.named_entities(&tagged), Vec::new);
    let noun_phrases = isolate("chunking", self.noun_phrases(&tagged), Vec::new);
    let pos_tags = isolate(POS_STAGE, tagged, Vec::new);

    let frequency = isolate("word_frequency", words.map(|w| word_frequency(&w)), BTreeMap::new);

    let summary = if request.summarize {
      isolate("summarization", self.summarize(text), || SUMMARY_FAILED_MESSAGE.to_string())
    } else {
      String::new()
    };

    debug!(tokens = tokens.len(), "analysis completed");

    Ok(AnalysisResult {
      tokens,
      stemmed,
      lemmatized,
      filtered,
      ngrams,
      pos_tags,
      named_entities,
      noun_phrases,
      frequency,
      summary,
    })
  }

  // ===== ステージ =====

  fn word_tokens(&self, text: &str) -> Result<Vec<String>, StageError> {
    let sentences = SentenceTokenizer::new(self.assets.sentence_model()?);
    Ok(self.word_tokenizer.tokenize(&sentences, text))
  }

  fn tokens(
    &self,
    mode: TokenizationMode,
    text: &str,
    words: &Result<Vec<String>, StageError>,
  ) -> Result<Vec<String>, StageError> {
    match mode {
      TokenizationMode::Word => words.clone(),
      TokenizationMode::Sentence => {
        Ok(SentenceTokenizer::new(self.assets.sentence_model()?).tokenize(text))
      }
      TokenizationMode::Whitespace => Ok(whitespace_tokenize(text)),
      TokenizationMode::Blankline => Ok(self.blankline_tokenizer.tokenize(text)),
    }
  }

  fn lemmatize(&self, words: &Result<Vec<String>, StageError>) -> Result<Vec<String>, StageError> {
    let words = words.as_ref().map_err(Clone::clone)?;
    let lemmatizer = Lemmatizer::new(self.assets.lexical_dictionary()?);
    Ok(lemmatizer.lemmatize_all(words))
  }

  fn remove_stopwords(
    &self,
    words: &Result<Vec<String>, StageError>,
  ) -> Result<Vec<String>, StageError> {
    let words = words.as_ref().map_err(Clone::clone)?;
    let filter = StopwordFilter::new(self.assets.stopwords()?);
    Ok(filter.filter(words))
  }

  fn pos_tags(&self, words: &Result<Vec<String>, StageError>) -> Result<Vec<PosTag>, StageError> {
    let words = words.as_ref().map_err(Clone::clone)?;
    let tagger = PosTagger::new(self.assets.tagger_model()?);
    Ok(tagger.tag(words))
  }

  fn named_entities(
    &self,
    tagged: &Result<Vec<PosTag>, StageError>,
  ) -> Result<Vec<NamedEntity>, StageError> {
    let tagged = tagged.as_ref().map_err(|_| StageError::Upstream(POS_STAGE))?;
    let chunker =
      EntityChunker::new(self.assets.entity_gazetteer()?, self.assets.word_list()?);
    Ok(chunker.chunk(tagged))
  }

  fn noun_phrases(
    &self,
    tagged: &Result<Vec<PosTag>, StageError>,
  ) -> Result<Vec<String>, StageError> {
    let tagged = tagged.as_ref().map_err(|_| StageError::Upstream(POS_STAGE))?;
    Ok(NounPhraseChunker::new().chunk(tagged))
  }

  fn summarize(&self, text: &str) -> Result<String, StageError> {
    let summarizer: &dyn Summarizer = match self.summarizer_kind {
      SummarizerKind::TextRank if self.text_rank.is_available(&self.assets) => &self.text_rank,
      _ => &self.lead,
    };
    debug!(engine = summarizer.name(), "summarizing");
    summarizer.summarize(&self.assets, text)
  }
}

/// ステージの結果を取り出す。エラーならログを出してフォールバック値を返す。
fn isolate<T>(stage: &'static str, outcome: Result<T, StageError>, fallback: impl FnOnce() -> T) -> T {
  match outcome {
    Ok(value) => value,
    Err(error) => {
      warn!(stage, error = %error, "analysis stage failed; using fallback");
      fallback()
    }
  }
}

/// 連続する `n` 個のトークンをスペースで連結した n-gram を左から順に返す。
///
/// `n <= 1` またはトークン数が `n` 未満なら空。
pub fn ngrams(tokens: &[String], n: i64) -> Vec<String> {
  let Ok(n) = usize::try_from(n) else {
    return Vec::new();
  };
  if n <= 1 || tokens.len() < n {
    return Vec::new();
  }
  tokens.windows(n).map(|window| window.join(" ")).collect()
}

/// トークン文字列（大文字小文字を区別）ごとの出現回数。
pub fn word_frequency(tokens: &[String]) -> BTreeMap<String, usize> {
  let mut frequency = BTreeMap::new();
  for token in tokens {
    *frequency.entry(token.clone()).or_insert(0) += 1;
  }
  frequency
}

// ─────────────────────────────────────────────────────────────────────────────
// テストモジュール
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assets::AssetKind;
  use std::io;
  use std::sync::Mutex;

  // ─── テスト用ヘルパー関数 ───────────────────────────────────────────────────

  fn analyzer_with(bundle: AssetBundle) -> TextAnalyzer {
    TextAnalyzer::new(Arc::new(bundle), &AnalyzerConfig::default()).unwrap()
  }

  fn analyzer() -> TextAnalyzer {
    analyzer_with(AssetBundle::bundled().unwrap())
  }

  /// ログ出力をメモリに集めるライター
  #[derive(Clone, Default)]
  struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

  impl CapturedLogs {
    fn contents(&self) -> String {
      String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
  }

  impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  /// `f` の実行中に出た WARN 以上のログを返す
  fn warnings_during<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::WARN)
      .with_ansi(false)
      .with_writer(move || writer.clone())
      .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    (value, logs.contents())
  }

  fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  // ─── ngrams ──────────────────────────────────────────────────────────

  #[test]
  fn ngrams_window_counts() {
    let tokens = strings(&["a", "b", "c", "d"]);
    assert_eq!(ngrams(&tokens, 2), vec!["a b", "b c", "c d"]);
    assert_eq!(ngrams(&tokens, 4), vec!["a b c d"]);
    assert!(ngrams(&tokens, 5).is_empty());
  }

  #[test]
  fn ngrams_disabled_for_small_or_negative_n() {
    let tokens = strings(&["a", "b"]);
    assert!(ngrams(&tokens, 1).is_empty());
    assert!(ngrams(&tokens, 0).is_empty());
    assert!(ngrams(&tokens, -3).is_empty());
  }

  // ─── word_frequency ──────────────────────────────────────────────────

  #[test]
  fn word_frequency_is_case_sensitive_and_sums_to_token_count() {
    let tokens = strings(&["The", "the", "cat", "the", "."]);
    let frequency = word_frequency(&tokens);
    assert_eq!(frequency["the"], 2);
    assert_eq!(frequency["The"], 1);
    assert_eq!(frequency.values().sum::<usize>(), tokens.len());
  }

  // ─── validate ────────────────────────────────────────────────────────

  #[test]
  fn empty_and_blank_text_is_rejected() {
    let analyzer = analyzer();
    for text in ["", "   ", "\n\t"] {
      let err = analyzer.analyze(&AnalysisRequest::new(text)).unwrap_err();
      assert_eq!(err, ValidationError::EmptyText);
    }
  }

  #[test]
  fn oversized_text_is_rejected() {
    let mut config = AnalyzerConfig::default();
    config.limits.max_text_bytes = 10;
    let analyzer = TextAnalyzer::new(Arc::new(AssetBundle::bundled().unwrap()), &config).unwrap();

    let err = analyzer.analyze(&AnalysisRequest::new("more than ten bytes")).unwrap_err();
    assert_eq!(err, ValidationError::TextTooLong { actual: 19, max: 10 });
  }

  // ─── analyze ─────────────────────────────────────────────────────────

  #[test]
  fn disabled_stages_are_empty() {
    let result = analyzer()
      .analyze(&AnalysisRequest::new("Dogs run.").with_ngram_size(1))
      .unwrap();
    assert!(result.stemmed.is_empty());
    assert!(result.lemmatized.is_empty());
    assert!(result.filtered.is_empty());
    assert!(result.ngrams.is_empty());
    assert!(result.summary.is_empty());
    assert!(!result.tokens.is_empty());
  }

  #[test]
  fn enabled_stages_are_filled() {
    let request = AnalysisRequest::new("The dogs are running in the park.")
      .with_stemmer(StemmerChoice::Porter)
      .with_lemmatize(true)
      .with_stopword_removal(true);
    let result = analyzer().analyze(&request).unwrap();

    assert_eq!(result.stemmed.len(), result.tokens.len());
    assert!(result.lemmatized.contains(&"dog".to_string()));
    assert!(!result.filtered.iter().any(|t| t.eq_ignore_ascii_case("the")));
  }

  #[test]
  fn missing_sentence_model_falls_back_to_whitespace_tokens() {
    let analyzer = analyzer_with(AssetBundle::bundled().unwrap().without(AssetKind::SentenceModel));
    let result = analyzer.analyze(&AnalysisRequest::new("Hello, world.")).unwrap();

    assert_eq!(result.tokens, vec!["Hello,", "world."]);
    assert!(result.pos_tags.is_empty());
    assert!(result.ngrams.is_empty());
    assert!(result.frequency.is_empty());
  }

  #[test]
  fn disabled_stages_stay_quiet_without_sentence_model() {
    let analyzer = analyzer_with(AssetBundle::bundled().unwrap().without(AssetKind::SentenceModel));
    let request = AnalysisRequest::new("Hello, world.")
      .with_stemmer(StemmerChoice::None)
      .with_ngram_size(1);

    let (result, logs) = warnings_during(|| analyzer.analyze(&request).unwrap());

    assert!(result.stemmed.is_empty());
    assert!(result.ngrams.is_empty());
    assert!(!logs.contains("stage=\"stemming\""), "{logs}");
    assert!(!logs.contains("stage=\"ngrams\""), "{logs}");
    // enabled stages still report the missing model
    assert!(logs.contains("stage=\"word_frequency\""), "{logs}");
  }

  #[test]
  fn missing_tagger_empties_ner_and_chunks() {
    let analyzer = analyzer_with(AssetBundle::bundled().unwrap().without(AssetKind::TaggerModel));
    let result = analyzer.analyze(&AnalysisRequest::new("Barack Obama visited Paris.")).unwrap();

    assert!(result.pos_tags.is_empty());
    assert!(result.named_entities.is_empty());
    assert!(result.noun_phrases.is_empty());
    // independent stages still run
    assert!(!result.tokens.is_empty());
    assert!(!result.frequency.is_empty());
  }

  #[test]
  fn missing_stopwords_empties_only_filtered() {
    let analyzer = analyzer_with(AssetBundle::bundled().unwrap().without(AssetKind::Stopwords));
    let request = AnalysisRequest::new("The cat sat.").with_stopword_removal(true);
    let result = analyzer.analyze(&request).unwrap();

    assert!(result.filtered.is_empty());
    assert_eq!(result.tokens, vec!["The", "cat", "sat", "."]);
  }

  #[test]
  fn summary_of_single_sentence_reports_failure() {
    let request = AnalysisRequest::new("Just one sentence here.").with_summarize(true);
    let result = analyzer().analyze(&request).unwrap();
    assert_eq!(result.summary, SUMMARY_FAILED_MESSAGE);
  }

  #[test]
  fn summary_uses_lead_fallback_without_assets() {
    let analyzer = analyzer_with(AssetBundle::empty());
    let request = AnalysisRequest::new("One. Two. Three. Four. Five.").with_summarize(true);
    let result = analyzer.analyze(&request).unwrap();
    assert_eq!(result.summary, "One.  Two.  Three.");
  }

  #[test]
  fn configured_lead_summarizer_is_used() {
    let mut config = AnalyzerConfig::default();
    config.summary.engine = SummarizerKind::LeadSentences;
    let analyzer = TextAnalyzer::new(Arc::new(AssetBundle::bundled().unwrap()), &config).unwrap();

    let request = AnalysisRequest::new("First one. Second one.").with_summarize(true);
    let result = analyzer.analyze(&request).unwrap();
    assert_eq!(result.summary, "First one. Second one.");
  }

  #[test]
  fn invalid_config_is_rejected() {
    let mut config = AnalyzerConfig::default();
    config.summary.word_count = 0;
    let err = TextAnalyzer::new(Arc::new(AssetBundle::empty()), &config).unwrap_err();
    assert!(matches!(err, crate::errors::BunsekiError::Config(_)));
  }
}
