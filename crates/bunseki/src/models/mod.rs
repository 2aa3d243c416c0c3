//! models module
pub mod model_definition;

/// Re-export
pub use model_definition::{
  AnalysisRequest, AnalysisResult, DEFAULT_NGRAM_SIZE, EntityLabel, NamedEntity, PosTag,
  StemmerChoice, TokenizationMode,
};
