//! bunseki 英語テキスト解析ライブラリー
//!
//! 分かち書き・ステミング・見出し語化・品詞タグ付け・固有表現抽出・
//! 名詞句チャンク・n-gram・頻度・抽出型要約をまとめて行う

/// 言語アセットモジュール - 文分割モデル・辞書・ストップワード等のロードと配置
pub mod assets;

/// 設定モジュール - AnalyzerConfig, SummarizerKind等の設定構造体を定義
pub mod config;

/// エラーモジュール - BunsekiError, BunsekiResult等のエラー型を定義
pub mod errors;

/// 語彙モジュール - 見出し語化とストップワード除去
pub mod lexicon;

/// データモデルモジュール - AnalysisRequest, AnalysisResult等のデータ構造を定義
pub mod models;

/// サービスモジュール - TextAnalyzer等の上位レベルAPIを提供
pub mod service;

/// ステミングモジュール - Porter / Lancaster / Snowball
pub mod stem;

/// 要約モジュール - TextRankと先頭文フォールバック
pub mod summarizer;

/// タグ付けモジュール - 品詞タグ・固有表現・名詞句
pub mod tagger;

/// トークナイザーモジュール - 文・単語・空白・空行による分割
pub mod tokenizer;

/// 再エクスポート
pub use assets::{AssetBundle, AssetManager};
pub use config::{AnalyzerConfig, SummarizerKind};
pub use errors::{BunsekiError, BunsekiResult};
pub use models::{AnalysisRequest, AnalysisResult};
pub use service::TextAnalyzer;
