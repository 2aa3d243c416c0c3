//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::TextAnalysisService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Text Analysis Service
  ///
  /// - Production: `Arc::new(BunsekiApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubTextAnalysisService)`
  pub service: Arc<dyn TextAnalysisService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn TextAnalysisService>) -> Self {
    Self { config, service }
  }
}
