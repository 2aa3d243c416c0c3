//! errors module
pub mod error_definition;

/// Re-export major error types
pub use error_definition::{
  AssetError, BunsekiError, BunsekiResult, ConfigError, StageError, SummarizeError,
  TokenizerError, ValidationError,
};
