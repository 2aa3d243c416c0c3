//! bunseki-api crate
//!
//! Web server providing English text analysis as an HTTP API.
//!
//! ## Endpoints
//! - `POST /process` - Text Analysis
//! - `GET /health` - Health Check
//! - `GET /` - Landing page
//! - `GET /static/*` - Static files
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/process \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "The quick brown fox jumps.", "stemmer": "Porter", "ngram_n": 2}'
//! ```

/// ルーター・ハンドラー・アプリケーション状態
pub mod api;
/// 環境変数からの設定読み込み
pub mod config;
/// APIエラーとHTTPレスポンスへの変換
pub mod errors;
/// リクエスト/レスポンスDTO
pub mod models;
/// テキスト解析サービス
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ProcessRequest, ProcessResponse};
pub use service::BunsekiApiServiceFull;
