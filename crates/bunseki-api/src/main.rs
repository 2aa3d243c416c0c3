//! bunseki-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bunseki_api::ApiError;
use bunseki_api::api::AppState;
use bunseki_api::api::run_server;
use bunseki_api::config::Config;
use bunseki_api::service::BunsekiApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（ログレベルを決めるため最初に行う）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG が優先）
  let env_filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", config.log_level.as_str())));
  tracing_subscriber::registry().with(env_filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    bind_addr = %config.bind_addr,
    summarizer = %config.summarizer,
    static_dir = ?config.static_dir,
    "設定を読み込みました"
  );

  // サービスの初期化（不足アセットの配置とロード）
  let service = Arc::new(BunsekiApiServiceFull::new(&config)?);
  tracing::info!("テキスト解析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
