//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! スタブサービスのテストはアセット不要で軽量。
//! 実サービスのテストはバイナリに同梱されたアセットを使う。

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, Response, StatusCode},
};
use tower::ServiceExt;

use bunseki::assets::AssetBundle;
use bunseki::{SummarizerKind, TextAnalyzer};
use bunseki_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  errors::{ApiError, Result as ApiResult},
  models::{ProcessRequest, ProcessResponse},
  service::{BunsekiApiServiceFull, TextAnalysisService},
};

/// 統合テスト用の軽量スタブサービス
///
/// - 空文字列: `invalid_input` エラー
/// - 長さ超過: `text_too_long` エラー
/// - それ以外: tokens にテキストだけを入れたレスポンスを返す
struct StubTextAnalysisService;

impl TextAnalysisService for StubTextAnalysisService {
  fn process(&self, request: ProcessRequest) -> ApiResult<ProcessResponse> {
    let text = request.text().to_string();

    if text.trim().is_empty() {
      return Err(ApiError::invalid_input("Please provide text to analyze"));
    }

    if text.len() > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text.len(), MAX_TEXT_LENGTH));
    }

    Ok(ProcessResponse {
      tokens: vec![text],
      ..ProcessResponse::default()
    })
  }
}

fn test_config() -> Config {
  Config {
    bind_addr: "127.0.0.1:0".to_string(),
    static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
    ..Config::default()
  }
}

/// スタブを使った Router
fn stub_app() -> Router {
  let service: Arc<dyn TextAnalysisService> = Arc::new(StubTextAnalysisService);
  create_router(AppState::new(test_config(), service))
}

/// 同梱アセットの実サービスを使った Router
fn real_app_with(summarizer: SummarizerKind) -> Router {
  let config = Config {
    summarizer,
    ..test_config()
  };
  let analyzer =
    TextAnalyzer::new(Arc::new(AssetBundle::bundled().unwrap()), &config.analyzer_config())
      .unwrap();
  let service: Arc<dyn TextAnalysisService> =
    Arc::new(BunsekiApiServiceFull::from_analyzer(analyzer));
  create_router(AppState::new(config, service))
}

fn real_app() -> Router {
  real_app_with(SummarizerKind::TextRank)
}

async fn post_json(app: Router, body: String) -> Response<Body> {
  app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/process")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap(),
    )
    .await
    .expect("request should succeed")
}

async fn get(app: Router, uri: &str) -> Response<Body> {
  app
    .oneshot(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
    .await
    .expect("request should succeed")
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn health_check_returns_ok() {
  let response = get(stub_app(), "/health").await;
  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn post_process_stub_success_returns_all_fields() {
  let payload = serde_json::json!({ "text": "hello" });
  let response = post_json(stub_app(), payload.to_string()).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  for key in [
    "tokens", "stemmed", "lemmatized", "filtered", "ngrams", "pos_tags", "ner", "chunks",
    "frequency", "summary",
  ] {
    assert!(json.get(key).is_some(), "missing field {key}");
  }
  assert_eq!(json["tokens"], serde_json::json!(["hello"]));
}

#[tokio::test]
async fn quick_brown_fox_end_to_end() {
  let payload =
    serde_json::json!({ "text": "The quick brown fox jumps.", "token_type": "word", "ngram_n": 2 });
  let response = post_json(real_app(), payload.to_string()).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(
    json["tokens"],
    serde_json::json!(["The", "quick", "brown", "fox", "jumps", "."])
  );
  let ngrams = json["ngrams"].as_array().unwrap();
  assert_eq!(ngrams.len(), 5);
  assert_eq!(ngrams[0], "The quick");
  assert_eq!(ngrams[1], "quick brown");
  assert_eq!(json["pos_tags"][3], serde_json::json!(["fox", "NN"]));
  assert_eq!(json["chunks"], serde_json::json!(["The quick brown fox"]));
  assert_eq!(json["summary"], "");
}

#[tokio::test]
async fn named_entities_are_label_text_pairs() {
  let payload = serde_json::json!({ "text": "Barack Obama visited Paris." });
  let json = body_json(post_json(real_app(), payload.to_string()).await).await;

  assert_eq!(
    json["ner"],
    serde_json::json!([["PERSON", "Barack Obama"], ["GPE", "Paris"]])
  );
}

#[tokio::test]
async fn lead_summarizer_keeps_three_fragments() {
  let payload = serde_json::json!({
    "text": "Alpha one. Beta two. Gamma three. Delta four. Epsilon five.",
    "summarize": true
  });
  let response = post_json(real_app_with(SummarizerKind::LeadSentences), payload.to_string()).await;
  let json = body_json(response).await;

  assert_eq!(json["summary"], "Alpha one.  Beta two.  Gamma three.");
}

#[tokio::test]
async fn lead_summarizer_returns_two_sentences_unchanged() {
  let text = "Alpha one is here. Beta two is there.";
  let payload = serde_json::json!({ "text": text, "summarize": true });
  let response = post_json(real_app_with(SummarizerKind::LeadSentences), payload.to_string()).await;
  let json = body_json(response).await;

  assert_eq!(json["summary"], text);
}

#[tokio::test]
async fn post_process_null_options_disable_their_stage() {
  for (field, stage) in [("ngram_n", "ngrams"), ("stemmer", "stemmed"), ("lemmatize", "lemmatized")]
  {
    let mut payload = serde_json::json!({
      "text": "The quick brown fox jumps.",
      "stemmer": "Porter",
      "lemmatize": true,
      "ngram_n": 2
    });
    payload[field] = serde_json::Value::Null;

    let response = post_json(real_app(), payload.to_string()).await;
    assert_eq!(response.status(), StatusCode::OK, "{field}: null");

    let json = body_json(response).await;
    assert_eq!(json[stage], serde_json::json!([]), "{field}: null");
    assert_eq!(json["tokens"].as_array().unwrap().len(), 6);
  }
}

#[tokio::test]
async fn post_process_null_token_type_uses_blank_lines() {
  let payload = serde_json::json!({ "text": "The quick brown fox jumps.", "token_type": null });
  let response = post_json(real_app(), payload.to_string()).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["tokens"], serde_json::json!(["The quick brown fox jumps."]));
}

// ============================================================================
// 異常系テスト（サービスエラー）
// ============================================================================

#[tokio::test]
async fn post_process_empty_text_returns_400() {
  for app in [stub_app(), real_app()] {
    let payload = serde_json::json!({ "text": "" });
    let response = post_json(app, payload.to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Please provide text to analyze" }));
  }
}

#[tokio::test]
async fn post_process_whitespace_text_returns_400() {
  let payload = serde_json::json!({ "text": "  \n\t " });
  let response = post_json(real_app(), payload.to_string()).await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_process_missing_text_returns_400() {
  let response = post_json(real_app(), "{}".to_string()).await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn post_process_too_long_text_returns_400() {
  // MAX_TEXT_LENGTH + 1 バイト（Axum のボディ上限 2MB 未満）
  let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
  let payload = serde_json::json!({ "text": long_text });

  let response = post_json(real_app(), payload.to_string()).await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = body_json(response).await;
  assert!(json["error"].as_str().unwrap().starts_with("Text is too long"));
}

// ============================================================================
// JSON パースエラーテスト（Axum 側）
// ============================================================================

#[tokio::test]
async fn post_process_invalid_json_returns_500() {
  let response = post_json(stub_app(), "{ invalid json".to_string()).await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let json = body_json(response).await;
  let message = json["error"].as_str().unwrap();
  assert!(message.starts_with("An error occurred while processing the text: "));
}

#[tokio::test]
async fn post_process_without_content_type_returns_500() {
  let response = stub_app()
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/process")
        .body(Body::from(r#"{"text": "hello"}"#))
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn post_process_wrong_field_type_returns_500() {
  let payload = serde_json::json!({ "text": "hello", "ngram_n": "two" });
  let response = post_json(stub_app(), payload.to_string()).await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// 静的ファイル
// ============================================================================

#[tokio::test]
async fn landing_page_is_served() {
  let response = get(stub_app(), "/").await;
  assert_eq!(response.status(), StatusCode::OK);

  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let html = String::from_utf8(body_bytes.to_vec()).unwrap();
  assert!(html.contains("/static/script.js"));
}

#[tokio::test]
async fn static_files_are_served() {
  let response = get(stub_app(), "/static/script.js").await;
  assert_eq!(response.status(), StatusCode::OK);

  let response = get(stub_app(), "/static/does-not-exist.js").await;
  assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
