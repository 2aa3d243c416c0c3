//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// bunseki クレートのエラー型をインポート
use bunseki::errors::{BunsekiError, ValidationError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// テキストが長すぎる
  TextTooLong,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
///
/// `Display` の文字列がそのままレスポンスの `error` フィールドになる。
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error("{0}")]
  InvalidInput(String),

  /// テキストが長すぎる
  #[error("Text is too long: {0} bytes (max: {1} bytes)")]
  TextTooLong(usize, usize),

  /// 内部エラー
  #[error("An error occurred while processing the text: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("Configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 無効な入力エラーを作成
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// テキスト長超過エラーを作成
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
#[derive(Serialize)]
struct ErrorResponse {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_server_error() {
      tracing::error!(code = self.code(), error = %self, "リクエスト処理に失敗しました");
    }

    let body = ErrorResponse {
      error: self.to_string(),
    };

    (status, Json(body)).into_response()
  }
}

/// ValidationError から ApiError への変換
impl From<ValidationError> for ApiError {
  fn from(err: ValidationError) -> Self {
    match err {
      ValidationError::EmptyText => ApiError::invalid_input(err.to_string()),
      ValidationError::TextTooLong { actual, max } => ApiError::text_too_long(actual, max),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::invalid_input(err.to_string()),
    }
  }
}

/// BunsekiError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<BunsekiError> for ApiError {
  fn from(err: BunsekiError) -> Self {
    match err {
      BunsekiError::Validation(err) => err.into(),
      BunsekiError::Config(err) => ApiError::config(err.to_string()),
      BunsekiError::Asset(_) | BunsekiError::Tokenizer(_) => {
        ApiError::config(format!("analyzer initialization failed: {err}"))
      }
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
