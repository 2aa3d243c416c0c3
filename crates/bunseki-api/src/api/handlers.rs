//! HTTPハンドラー定義

use std::time::Instant;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info, warn};

use crate::errors::ApiError;
use crate::models::{ProcessRequest, ProcessResponse};

use super::state::AppState;

/// POST /process エンドポイント
///
/// 英語テキストの解析を実行する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト", "token_type": "word", "stemmer": "Porter", "ngram_n": 2 }
/// ```
///
/// # Response
/// - 200 OK: 解析成功（失敗したステージは空の値）
/// - 400 Bad Request: 入力エラー（空テキスト、テキスト長超過）
/// - 500 Internal Server Error: ボディのパース失敗・内部エラー
pub async fn post_process(
  State(state): State<AppState>,
  payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
  let Json(request) = payload.map_err(|rejection| {
    warn!(error = %rejection, "リクエストボディを解釈できません");
    ApiError::internal(rejection.body_text())
  })?;

  debug!(text_len = request.text().len(), "解析リクエストを受信");

  // CPUバウンドな処理を spawn_blocking で実行
  let service = state.service.clone();
  let start = Instant::now();

  let response =
    tokio::task::spawn_blocking(move || service.process(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking エラー");
      ApiError::internal(e.to_string())
    })??;

  info!(
    token_count = response.tokens.len(),
    elapsed_ms = start.elapsed().as_millis() as u64,
    "解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> &'static str {
  "OK"
}
