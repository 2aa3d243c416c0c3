//! Text Analysis Service

use std::sync::Arc;
use std::time::Instant;

use bunseki::assets::{AssetBundle, AssetManager};
use bunseki::errors::BunsekiError;
use bunseki::{AnalyzerConfig, TextAnalyzer};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::Result;
use crate::models::{ProcessRequest, ProcessResponse};

/// Common interface for the text analysis service
///
/// This trait allows swapping the production implementation (`BunsekiApiServiceFull`)
/// with test stubs/mocks.
pub trait TextAnalysisService: Send + Sync {
  /// Analyzes the request text
  ///
  /// # Errors
  /// - Input error (empty text, length exceeded)
  fn process(&self, request: ProcessRequest) -> Result<ProcessResponse>;
}

/// Text Analysis Service
///
/// Wraps a [`TextAnalyzer`] whose assets are provisioned once at startup.
#[derive(Debug)]
pub struct BunsekiApiServiceFull {
  analyzer: TextAnalyzer,
}

impl BunsekiApiServiceFull {
  /// Initializes the service
  ///
  /// Provisions missing assets into the cache directory, loads them, and builds
  /// the analyzer. Assets that fail to provision or load only disable the
  /// stages that need them.
  ///
  /// # Errors
  /// Returns an error if the analyzer configuration is invalid
  pub fn new(config: &Config) -> Result<Self> {
    let analyzer_config = config.analyzer_config();
    let bundle = load_assets(&analyzer_config)?;
    let analyzer = TextAnalyzer::new(bundle, &analyzer_config)?;
    Ok(Self { analyzer })
  }

  /// Wraps an already built analyzer
  #[must_use]
  pub fn from_analyzer(analyzer: TextAnalyzer) -> Self {
    Self { analyzer }
  }

  /// Executes the analysis
  ///
  /// # Errors
  /// - If text is empty or whitespace only
  /// - If text exceeds the maximum length
  pub fn process(&self, request: ProcessRequest) -> Result<ProcessResponse> {
    let start = Instant::now();

    let result = self.analyzer.analyze(&request.into_analysis_request())?;

    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "analysis finished");
    Ok(ProcessResponse::from(result))
  }
}

/// Production implementation of trait `TextAnalysisService`
impl TextAnalysisService for BunsekiApiServiceFull {
  fn process(&self, request: ProcessRequest) -> Result<ProcessResponse> {
    // Explicitly call the inherent method.
    BunsekiApiServiceFull::process(self, request)
  }
}

/// Provisions and loads the asset bundle.
///
/// Without a usable cache directory the bundled copies are used directly.
fn load_assets(config: &AnalyzerConfig) -> Result<Arc<AssetBundle>> {
  let manager = match AssetManager::from_config(config) {
    Ok(manager) => manager,
    Err(e) => {
      warn!(error = %e, "no asset cache directory; using bundled assets");
      return bundled_assets();
    }
  };

  let report = manager.provision();
  info!(
    cache_dir = ?manager.cache_dir(),
    present = report.present.len(),
    provisioned = report.provisioned.len(),
    failed = report.failed.len(),
    "アセットの準備が完了しました"
  );

  if report.is_unusable() {
    warn!(cache_dir = ?manager.cache_dir(), "asset cache directory unusable; using bundled assets");
    return bundled_assets();
  }

  Ok(manager.load())
}

fn bundled_assets() -> Result<Arc<AssetBundle>> {
  let bundle = AssetBundle::bundled().map_err(BunsekiError::from)?;
  Ok(Arc::new(bundle))
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  fn create_test_config(temp_dir: &TempDir) -> Config {
    Config {
      asset_dir: Some(temp_dir.path().join("assets")),
      ..Config::default()
    }
  }

  fn request(json: serde_json::Value) -> ProcessRequest {
    serde_json::from_value(json).unwrap()
  }

  #[test]
  fn test_service_creation_provisions_assets() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&temp_dir);

    let service = BunsekiApiServiceFull::new(&config).expect("service should build");
    assert!(temp_dir.path().join("assets").read_dir().unwrap().next().is_some());

    let response = service.process(request(serde_json::json!({ "text": "Dogs bark." }))).unwrap();
    assert_eq!(response.tokens, vec!["Dogs", "bark", "."]);
  }

  #[test]
  fn test_unusable_asset_dir_falls_back_to_bundled_assets() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("not_a_dir");
    std::fs::write(&file_path, "x").unwrap();
    let config = Config {
      asset_dir: Some(file_path.join("assets")),
      ..Config::default()
    };

    let service = BunsekiApiServiceFull::new(&config).expect("service should still build");

    let response = service
      .process(request(serde_json::json!({ "text": "Barack Obama visited Paris." })))
      .unwrap();
    assert_eq!(response.tokens, vec!["Barack", "Obama", "visited", "Paris", "."]);
    assert_eq!(
      response.ner,
      vec![
        ("PERSON".to_string(), "Barack Obama".to_string()),
        ("GPE".to_string(), "Paris".to_string()),
      ]
    );
  }

  #[test]
  fn test_empty_text_error() {
    let temp_dir = TempDir::new().unwrap();
    let service = BunsekiApiServiceFull::new(&create_test_config(&temp_dir)).unwrap();

    let err = service.process(request(serde_json::json!({ "text": "   " }))).unwrap_err();
    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.to_string(), "Please provide text to analyze");
  }

  #[test]
  fn test_text_too_long_error() {
    let temp_dir = TempDir::new().unwrap();
    let service = BunsekiApiServiceFull::new(&create_test_config(&temp_dir)).unwrap();

    let long_text = "a".repeat(crate::config::MAX_TEXT_LENGTH + 1);
    let err = service.process(request(serde_json::json!({ "text": long_text }))).unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }

  #[test]
  fn test_from_analyzer() {
    let analyzer = TextAnalyzer::with_bundled_assets().unwrap();
    let service = BunsekiApiServiceFull::from_analyzer(analyzer);

    let response = service
      .process(request(serde_json::json!({ "text": "a b c", "ngram_n": 3 })))
      .unwrap();
    assert_eq!(response.ngrams, vec!["a b c"]);
  }
}
