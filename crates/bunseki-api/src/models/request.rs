//! リクエストモデル定義

use serde::Deserialize;

use bunseki::models::{AnalysisRequest, DEFAULT_NGRAM_SIZE, StemmerChoice, TokenizationMode};

/// テキスト解析リクエスト（POST /process のボディ）
///
/// `text` 以外はすべて省略可能。
/// 省略時は既定値、明示的な `null` はその段を無効にする値として扱う。
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
  /// 解析対象のテキスト（`null` や省略は空文字列として扱う）
  #[serde(default)]
  pub text: Option<String>,
  /// 分割方法: word / sentence / whitespace / blankline（それ以外と `null` は blankline）
  #[serde(default = "default_token_type")]
  pub token_type: Option<String>,
  /// ステマー: None / Porter / Lancaster / Snowball（`null` は None）
  #[serde(default = "default_stemmer")]
  pub stemmer: Option<String>,
  /// 見出し語化を行うか
  #[serde(default)]
  pub lemmatize: Option<bool>,
  /// n-gram のサイズ（`null` は n-gram なし）
  #[serde(default = "default_ngram_n")]
  pub ngram_n: Option<i64>,
  /// ストップワードを除去するか
  #[serde(default)]
  pub remove_stopwords: Option<bool>,
  /// 要約を行うか
  #[serde(default)]
  pub summarize: Option<bool>,
}

fn default_token_type() -> Option<String> {
  Some("word".to_string())
}

fn default_stemmer() -> Option<String> {
  Some("None".to_string())
}

fn default_ngram_n() -> Option<i64> {
  Some(DEFAULT_NGRAM_SIZE)
}

impl ProcessRequest {
  /// 解析対象のテキスト（未指定なら空文字列）
  #[must_use]
  pub fn text(&self) -> &str {
    self.text.as_deref().unwrap_or_default()
  }

  /// ドメイン層のリクエストに変換する
  #[must_use]
  pub fn into_analysis_request(self) -> AnalysisRequest {
    let tokenization = self
      .token_type
      .as_deref()
      .map_or(TokenizationMode::Blankline, TokenizationMode::from_name);
    let stemmer = self.stemmer.as_deref().map_or(StemmerChoice::None, StemmerChoice::from_name);

    AnalysisRequest::new(self.text.unwrap_or_default())
      .with_tokenization(tokenization)
      .with_stemmer(stemmer)
      .with_lemmatize(self.lemmatize.unwrap_or(false))
      // n < 2 は n-gram なし
      .with_ngram_size(self.ngram_n.unwrap_or(0))
      .with_stopword_removal(self.remove_stopwords.unwrap_or(false))
      .with_summarize(self.summarize.unwrap_or(false))
  }
}
