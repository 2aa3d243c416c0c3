//! API設定の定数定義

/// 入力テキストの最大長（バイト単位）
///
/// Axum のデフォルトのボディ上限（2MB）より小さくしておくことで、
/// 超過時はサービス層の `text_too_long` エラーとして返る。
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// デフォルトのバインドアドレス
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// デフォルトの静的ファイルディレクトリ
///
/// `index.html`（トップページ）と `/static/*` で配信するファイルを置く。
pub const DEFAULT_STATIC_DIR: &str = "static";

/// デフォルトの要約エンジン名
pub const DEFAULT_SUMMARIZER: &str = "text-rank";

/// デフォルトのログレベル
pub const DEFAULT_LOG_LEVEL: &str = "info";
